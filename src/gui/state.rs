// state - the GUI editor model and its pointer-tracking host implementation
use crate::core::{
    Buffer, CharCoords, CoordinateMapper, CursorSurface, Rect as HitRect, SelectionRange,
    SelectionSource, TextPosition,
};
use egui::{CursorIcon, Pos2};

// Fixed monospace metrics, in points
pub const ROW_HEIGHT: f32 = 20.0;
pub const CHAR_WIDTH: f32 = 8.4;
pub const MARGIN_WIDTH: f32 = 40.0;

pub struct EditorState {
    pub buffer: Buffer,
    pub filename: Option<String>,
    pub selection: Option<SelectionRange>,
    pub is_dragging: bool,
    pub scroll_line: usize,
    pub cursor_style: String,
    // Top-left of the text panel in screen points
    origin: Pos2,
    // Selection highlight painted in the last frame, one rect per row
    overlay: Option<Vec<HitRect>>,
    // Last hover position and button state fed to the tracker
    pub last_pointer: Option<(Pos2, bool)>,
}

impl EditorState {
    pub fn new(buffer: Buffer, filename: Option<String>) -> Self {
        Self {
            buffer,
            filename,
            selection: None,
            is_dragging: false,
            scroll_line: 0,
            cursor_style: String::new(),
            origin: Pos2::ZERO,
            overlay: None,
            last_pointer: None,
        }
    }

    // Returns true when the panel moved on screen
    pub fn set_origin(&mut self, origin: Pos2) -> bool {
        if self.origin == origin {
            return false;
        }
        self.origin = origin;
        true
    }

    // Returns true when the painted highlight differs from the last frame
    pub fn set_overlay(&mut self, rects: Vec<HitRect>) -> bool {
        if self.overlay.as_ref() == Some(&rects) {
            return false;
        }
        self.overlay = Some(rects);
        true
    }

    // Returns true when the first visible line changed
    pub fn scroll_by(&mut self, lines: isize) -> bool {
        let max_line = self.buffer.line_count().saturating_sub(1);
        let target = self.scroll_line.saturating_add_signed(lines).min(max_line);
        if target == self.scroll_line {
            return false;
        }
        self.scroll_line = target;
        true
    }

    pub fn clear_selection(&mut self) -> bool {
        self.is_dragging = false;
        self.selection.take().is_some()
    }

    pub fn selection_text(&self) -> Option<String> {
        let selection = self.selection.filter(|s| !s.is_empty())?;
        let (start, end) = selection.normalized();
        Some(format!(
            "{}:{} - {}:{}",
            start.line + 1,
            start.column + 1,
            end.line + 1,
            end.column + 1
        ))
    }

    pub fn screen_pos_to_text_pos(&self, pos: Pos2) -> TextPosition {
        let row = ((pos.y - self.origin.y) / ROW_HEIGHT).max(0.0) as usize;
        let max_line = self.buffer.line_count().saturating_sub(1);
        let line = (row + self.scroll_line).min(max_line);

        let column = ((pos.x - self.origin.x - MARGIN_WIDTH) / CHAR_WIDTH)
            .round()
            .max(0.0) as usize;
        let column = column.min(self.buffer.line_len(line));

        TextPosition { line, column }
    }

    pub fn column_x(&self, column: usize) -> f32 {
        self.origin.x + MARGIN_WIDTH + column as f32 * CHAR_WIDTH
    }

    pub fn row_y(&self, line: usize) -> f32 {
        self.origin.y + (line as f32 - self.scroll_line as f32) * ROW_HEIGHT
    }
}

impl CoordinateMapper for EditorState {
    fn char_coords(&self, pos: TextPosition) -> CharCoords {
        let top = self.row_y(pos.line);
        CharCoords {
            left: self.column_x(pos.column),
            top,
            bottom: top + ROW_HEIGHT,
        }
    }

    fn line_length(&self, line: usize) -> usize {
        self.buffer.line_len(line)
    }
}

impl SelectionSource for EditorState {
    fn has_non_empty_selection(&self) -> bool {
        self.selection.is_some_and(|s| !s.is_empty())
    }

    fn primary_selection(&self) -> SelectionRange {
        self.selection
            .unwrap_or_else(|| SelectionRange::caret(TextPosition::default()))
    }

    fn overlay_rects(&self) -> Option<Vec<HitRect>> {
        self.overlay.clone()
    }
}

impl CursorSurface for EditorState {
    fn cursor_style(&self) -> &str {
        &self.cursor_style
    }

    fn set_cursor_style(&mut self, style: &str) {
        self.cursor_style = style.to_string();
    }
}

// CSS cursor names onto egui icons; unknown names fall back to the default arrow
pub fn cursor_icon(style: &str) -> CursorIcon {
    match style {
        "pointer" => CursorIcon::PointingHand,
        "grab" => CursorIcon::Grab,
        "grabbing" => CursorIcon::Grabbing,
        "move" => CursorIcon::Move,
        "copy" => CursorIcon::Copy,
        "text" => CursorIcon::Text,
        "crosshair" => CursorIcon::Crosshair,
        "not-allowed" => CursorIcon::NotAllowed,
        _ => CursorIcon::Default,
    }
}
