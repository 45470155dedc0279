//! Shows a drag pointer while the mouse hovers over a text selection.
//!
//! [`core`] holds the frontend-independent part: mapping a selection to
//! viewport rectangles and a debounced tracker that hit-tests the pointer
//! against them. [`tui`] and [`gui`] are complete hosts built on crossterm
//! and egui.
pub mod config;
pub mod core;
pub mod error;
pub mod gui;
pub mod logging;
pub mod tui;

pub use crate::core::{SelectionPointer, SelectionPointerOption};
pub use error::{Error, Result};
