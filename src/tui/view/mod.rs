// view module: the terminal editor surface and its pointer-tracking host
mod graphemes;
mod mouse;
mod render;

use crate::core::{
    Buffer, CharCoords, CoordinateMapper, CursorSurface, SelectionRange, SelectionSource,
    TextPosition,
};
use graphemes::{cell_offset, column_at_cell};
use std::io::Error;

// Fixed chrome around the text area, in cells
pub struct Layout;

impl Layout {
    pub const MARGIN: u16 = 4; // Width of the line-number margin
    pub const HEADER: u16 = 1; // Height of the header
    pub const FOOTER: u16 = 1; // Height of the footer
}

pub struct View {
    pub buffer: Buffer,
    pub selection: Option<SelectionRange>,
    pub is_dragging: bool,
    pub scroll_offset: usize,
    pub filename: Option<String>,
    pub width: u16,
    pub height: u16,
    pub needs_redraw: bool,
    pub pointer_enabled: bool,
    pointer_shape: String,
    shape_dirty: bool,
}

impl View {
    pub fn new(buffer: Buffer, width: u16, height: u16) -> Self {
        Self {
            buffer,
            selection: None,
            is_dragging: false,
            scroll_offset: 0,
            filename: None,
            width,
            height,
            needs_redraw: true,
            pointer_enabled: false,
            pointer_shape: String::new(),
            shape_dirty: false,
        }
    }

    pub fn set_filename(&mut self, filename: String) {
        self.filename = Some(filename);
    }

    pub fn visible_rows(&self) -> usize {
        self.height.saturating_sub(Layout::HEADER + Layout::FOOTER) as usize
    }

    fn max_scroll(&self) -> usize {
        self.buffer.line_count().saturating_sub(self.visible_rows())
    }

    // Returns true when the size actually changed
    pub fn resize(&mut self, width: u16, height: u16) -> bool {
        if (width, height) == (self.width, self.height) {
            return false;
        }
        self.width = width;
        self.height = height;
        self.scroll_offset = self.scroll_offset.min(self.max_scroll());
        self.needs_redraw = true;
        true
    }

    // Returns true when the offset moved
    pub fn scroll_by(&mut self, delta: isize) -> bool {
        let target = self
            .scroll_offset
            .saturating_add_signed(delta)
            .min(self.max_scroll());
        if target == self.scroll_offset {
            return false;
        }
        self.scroll_offset = target;
        self.needs_redraw = true;
        true
    }

    pub fn page(&self) -> isize {
        self.visible_rows().max(1) as isize
    }

    // Mouse operations return true when the selection changed
    pub fn handle_mouse_down(&mut self, x: u16, y: u16) -> bool {
        mouse::handle_down(self, x, y)
    }

    pub fn handle_mouse_drag(&mut self, x: u16, y: u16) -> bool {
        mouse::handle_drag(self, x, y)
    }

    pub fn handle_mouse_up(&mut self, x: u16, y: u16) -> bool {
        mouse::handle_up(self, x, y)
    }

    pub fn select_all(&mut self) -> bool {
        let last = self.buffer.line_count().saturating_sub(1);
        let range = SelectionRange::new(
            TextPosition::new(0, 0),
            TextPosition::new(last, self.buffer.line_len(last)),
        );
        self.replace_selection(Some(range))
    }

    pub fn clear_selection(&mut self) -> bool {
        self.is_dragging = false;
        self.replace_selection(None)
    }

    fn replace_selection(&mut self, selection: Option<SelectionRange>) -> bool {
        if self.selection == selection {
            return false;
        }
        self.selection = selection;
        self.needs_redraw = true;
        true
    }

    // The pointer shape to emit, if it changed since the last call
    pub fn take_pointer_shape(&mut self) -> Option<&str> {
        if !self.shape_dirty {
            return None;
        }
        self.shape_dirty = false;
        Some(&self.pointer_shape)
    }

    // render only if needed and clear the flag
    pub fn render_if_needed(&mut self) -> Result<(), Error> {
        if self.needs_redraw {
            render::render_view(self)?;
            self.needs_redraw = false;
        }
        Ok(())
    }

    pub fn screen_to_text_pos(&self, screen_x: u16, screen_y: u16) -> TextPosition {
        // Clamp to the text rows (header and footer excluded)
        let last_row = self.height.saturating_sub(Layout::FOOTER + 1);
        let y = screen_y.clamp(Layout::HEADER, last_row.max(Layout::HEADER));

        let line = ((y - Layout::HEADER) as usize + self.scroll_offset)
            .min(self.buffer.line_count().saturating_sub(1));

        let cell = screen_x.saturating_sub(Layout::MARGIN) as usize;
        let column = column_at_cell(self.buffer.line(line).unwrap_or(""), cell);

        TextPosition { line, column }
    }

    // Terminal cells are reported by their centre so edges stay unambiguous
    pub fn pointer_point(screen_x: u16, screen_y: u16) -> (f32, f32) {
        (screen_x as f32 + 0.5, screen_y as f32 + 0.5)
    }
}

impl CoordinateMapper for View {
    fn char_coords(&self, pos: TextPosition) -> CharCoords {
        let top = Layout::HEADER as f32 + pos.line as f32 - self.scroll_offset as f32;
        let line = self.buffer.line(pos.line).unwrap_or("");
        CharCoords {
            left: Layout::MARGIN as f32 + cell_offset(line, pos.column) as f32,
            top,
            bottom: top + 1.0,
        }
    }

    fn line_length(&self, line: usize) -> usize {
        self.buffer.line_len(line)
    }
}

impl SelectionSource for View {
    fn has_non_empty_selection(&self) -> bool {
        self.selection.is_some_and(|s| !s.is_empty())
    }

    fn primary_selection(&self) -> SelectionRange {
        self.selection
            .unwrap_or_else(|| SelectionRange::caret(TextPosition::default()))
    }
}

impl CursorSurface for View {
    fn cursor_style(&self) -> &str {
        &self.pointer_shape
    }

    fn set_cursor_style(&mut self, style: &str) {
        self.pointer_shape = style.to_string();
        self.shape_dirty = true;
        self.needs_redraw = true;
    }
}
