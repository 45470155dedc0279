// host module: the capabilities an editor provides to the pointer tracker
use super::rect::{CharCoords, Rect};
use super::selection::{SelectionRange, TextPosition};

/// Maps logical text positions onto the viewport.
///
/// All calls made during one update pass must use the same reference frame,
/// so a host that scrolls has to report it through `on_scroll` before the
/// next pass.
pub trait CoordinateMapper {
    fn char_coords(&self, pos: TextPosition) -> CharCoords;

    // Length of a logical line's text content, in columns
    fn line_length(&self, line: usize) -> usize;
}

pub trait SelectionSource {
    fn has_non_empty_selection(&self) -> bool;

    fn primary_selection(&self) -> SelectionRange;

    /// Bounds of selection overlays the host already laid out, one per
    /// painted row. Hosts that do not paint overlays keep the default and
    /// the rectangles are derived from positions instead.
    fn overlay_rects(&self) -> Option<Vec<Rect>> {
        None
    }
}

/// The single cursor-style property the tracker writes to.
pub trait CursorSurface {
    fn cursor_style(&self) -> &str;

    fn set_cursor_style(&mut self, style: &str);
}

pub trait Host: CoordinateMapper + SelectionSource + CursorSurface {}

impl<T: CoordinateMapper + SelectionSource + CursorSurface> Host for T {}
