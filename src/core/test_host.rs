// In-memory host with a fixed 10x20 cell grid, used by the unit tests
use super::host::{CoordinateMapper, CursorSurface, SelectionSource};
use super::rect::{CharCoords, Rect};
use super::selection::{SelectionRange, TextPosition};
use std::cell::Cell;

pub const CELL_WIDTH: f32 = 10.0;
pub const LINE_HEIGHT: f32 = 20.0;

pub struct GridHost {
    pub line_lengths: Vec<usize>,
    pub scroll_top: usize,
    pub selection: Option<SelectionRange>,
    pub overlay: Option<Vec<Rect>>,
    pub cursor: String,
    pub cursor_writes: usize,
    pub coord_calls: Cell<usize>,
}

impl GridHost {
    pub fn new(line_lengths: &[usize]) -> Self {
        Self {
            line_lengths: line_lengths.to_vec(),
            scroll_top: 0,
            selection: None,
            overlay: None,
            cursor: String::new(),
            cursor_writes: 0,
            coord_calls: Cell::new(0),
        }
    }

    pub fn select(&mut self, anchor: (usize, usize), head: (usize, usize)) {
        self.selection = Some(SelectionRange::new(
            TextPosition::new(anchor.0, anchor.1),
            TextPosition::new(head.0, head.1),
        ));
    }

    // Viewport point at the middle of a cell
    pub fn cell_center(&self, line: usize, column: usize) -> (f32, f32) {
        let top = (line as f32 - self.scroll_top as f32) * LINE_HEIGHT;
        (column as f32 * CELL_WIDTH + CELL_WIDTH / 2.0, top + LINE_HEIGHT / 2.0)
    }
}

impl CoordinateMapper for GridHost {
    fn char_coords(&self, pos: TextPosition) -> CharCoords {
        self.coord_calls.set(self.coord_calls.get() + 1);
        let top = (pos.line as f32 - self.scroll_top as f32) * LINE_HEIGHT;
        CharCoords {
            left: pos.column as f32 * CELL_WIDTH,
            top,
            bottom: top + LINE_HEIGHT,
        }
    }

    fn line_length(&self, line: usize) -> usize {
        self.line_lengths.get(line).copied().unwrap_or(0)
    }
}

impl SelectionSource for GridHost {
    fn has_non_empty_selection(&self) -> bool {
        self.selection.is_some_and(|s| !s.is_empty())
    }

    fn primary_selection(&self) -> SelectionRange {
        self.selection
            .unwrap_or_else(|| SelectionRange::caret(TextPosition::default()))
    }

    fn overlay_rects(&self) -> Option<Vec<Rect>> {
        self.overlay.clone()
    }
}

impl CursorSurface for GridHost {
    fn cursor_style(&self) -> &str {
        &self.cursor
    }

    fn set_cursor_style(&mut self, style: &str) {
        self.cursor_writes += 1;
        self.cursor = style.to_string();
    }
}
