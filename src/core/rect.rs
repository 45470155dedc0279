// rect module: viewport-space boxes used for hit testing

/// A position mapped to the viewport, anchored at a character boundary.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CharCoords {
    pub left: f32,
    pub top: f32,
    pub bottom: f32,
}

/// One visual span of selected text in viewport coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Rect {
    pub fn new(left: f32, right: f32, top: f32, bottom: f32) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    // Span from the start boundary to the left edge of the end boundary
    pub fn between(start: CharCoords, end: CharCoords) -> Self {
        Self {
            left: start.left,
            right: end.left,
            top: start.top,
            bottom: start.bottom,
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    // Inclusive on all four edges
    pub fn contains(&self, x: f32, y: f32) -> bool {
        self.left <= x && self.right >= x && self.top <= y && self.bottom >= y
    }
}
