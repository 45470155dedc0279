mod app;
mod editor;
mod state;

use crate::core::{Buffer, SelectionPointerOption};
use crate::error::{Error, Result};
pub use app::PointerApp;
pub use state::{cursor_icon, EditorState};
use std::time::Duration;

/// Entry point for GUI mode
pub fn run(
    buffer: Buffer,
    filename: Option<String>,
    option: SelectionPointerOption,
    delay: Duration,
) -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 700.0])
            .with_min_inner_size([480.0, 320.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Selection Pointer",
        options,
        Box::new(move |cc| {
            Ok(Box::new(PointerApp::new(cc, buffer, filename, option, delay)))
        }),
    )
    .map_err(|e| Error::Gui(e.to_string()))
}
