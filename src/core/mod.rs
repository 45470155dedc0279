// core module: selection geometry and pointer tracking, independent of any frontend
pub mod buffer;
pub mod geometry;
pub mod host;
pub mod option;
pub mod rect;
pub mod selection;
pub mod timer;
pub mod tracker;

#[cfg(test)]
pub(crate) mod test_host;

pub use buffer::Buffer;
pub use geometry::{compute_rects, resolve_rects};
pub use host::{CoordinateMapper, CursorSurface, Host, SelectionSource};
pub use option::{SelectionPointer, SelectionPointerOption, DEFAULT_STYLE};
pub use rect::{CharCoords, Rect};
pub use selection::{SelectionRange, TextPosition};
pub use timer::{Clock, DebounceTimer, ManualClock, ScheduledTask, SystemClock, DEFAULT_DELAY};
pub use tracker::{PointerHitTracker, PointerLeave, PointerMove, TrackerState};
