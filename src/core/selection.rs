// selection module for text positions and selection ranges
use std::cmp::Ordering;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TextPosition {
    pub line: usize,
    pub column: usize,
}

impl TextPosition {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

// Textual order: line first, then column
impl Ord for TextPosition {
    fn cmp(&self, other: &Self) -> Ordering {
        self.line
            .cmp(&other.line)
            .then(self.column.cmp(&other.column))
    }
}

impl PartialOrd for TextPosition {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectionRange {
    pub anchor: TextPosition, // Where selection started
    pub head: TextPosition,   // Where the gesture currently is
}

impl SelectionRange {
    pub fn new(anchor: TextPosition, head: TextPosition) -> Self {
        Self { anchor, head }
    }

    pub fn caret(pos: TextPosition) -> Self {
        Self {
            anchor: pos,
            head: pos,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.anchor == self.head
    }

    // Get ordered start and end (anchor might be after head)
    pub fn normalized(&self) -> (TextPosition, TextPosition) {
        if self.anchor <= self.head {
            (self.anchor, self.head)
        } else {
            (self.head, self.anchor)
        }
    }

    pub fn update_head(&mut self, new_pos: TextPosition) {
        self.head = new_pos;
    }

    // Whether `line` carries any part of the selection
    pub fn covers_line(&self, line: usize) -> bool {
        let (start, end) = self.normalized();
        line >= start.line && line <= end.line
    }
}
