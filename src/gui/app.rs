// app module: eframe application wiring the editor panel to the selection pointer
use super::editor::EditorPanel;
use super::state::{cursor_icon, EditorState};
use crate::core::{Buffer, SelectionPointer, SelectionPointerOption, SystemClock};
use egui::Context;
use std::time::{Duration, Instant};
use tracing::info;

// Styles offered in the toolbar
const STYLES: [&str; 6] = ["default", "grab", "pointer", "move", "copy", "crosshair"];

pub struct PointerApp {
    state: EditorState,
    pointer: SelectionPointer,
    enabled: bool,
    style: String,
}

impl PointerApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        buffer: Buffer,
        filename: Option<String>,
        option: SelectionPointerOption,
        delay: Duration,
    ) -> Self {
        let mut state = EditorState::new(buffer, filename);
        let mut pointer = SelectionPointer::with_clock(delay, SystemClock);
        pointer.set_option(&option, &mut state);
        info!(?option, "gui frontend started");

        Self {
            state,
            pointer,
            enabled: option.is_enabled(),
            style: option.cursor_style().unwrap_or(crate::core::DEFAULT_STYLE).to_string(),
        }
    }

    fn current_option(&self) -> SelectionPointerOption {
        if !self.enabled {
            SelectionPointerOption::Disabled
        } else if self.style == crate::core::DEFAULT_STYLE {
            SelectionPointerOption::Enabled
        } else {
            SelectionPointerOption::Style(self.style.clone())
        }
    }

    fn tool_bar(&mut self, ctx: &Context) {
        let mut changed = false;

        egui::TopBottomPanel::top("tool_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                changed |= ui.checkbox(&mut self.enabled, "Selection pointer").changed();

                ui.add_enabled_ui(self.enabled, |ui| {
                    egui::ComboBox::from_label("Style")
                        .selected_text(self.style.as_str())
                        .show_ui(ui, |ui| {
                            for style in STYLES {
                                changed |= ui
                                    .selectable_value(&mut self.style, style.to_string(), style)
                                    .changed();
                            }
                        });
                });
            });
        });

        if changed {
            let option = self.current_option();
            self.pointer.set_option(&option, &mut self.state);
        }
    }

    fn status_bar(&self, ctx: &Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(self.state.filename.as_deref().unwrap_or("[welcome]"));
                ui.separator();
                match self.state.selection_text() {
                    Some(text) => ui.label(format!("Selection {}", text)),
                    None => ui.label("No selection"),
                };
                ui.separator();
                let inside = self.pointer.tracker().is_some_and(|t| t.is_inside());
                ui.label(if inside { "over selection" } else { "-" });
            });
        });
    }
}

impl eframe::App for PointerApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.tool_bar(ctx);
        self.status_bar(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            EditorPanel::new(&mut self.state, &mut self.pointer).show(ui);
        });

        // after painting, so the overlay rects match this frame
        self.pointer.poll(&mut self.state);

        // egui resets the icon every frame
        if !self.state.cursor_style.is_empty() {
            ctx.set_cursor_icon(cursor_icon(&self.state.cursor_style));
        }

        if let Some(deadline) = self.pointer.next_deadline() {
            ctx.request_repaint_after(deadline.saturating_duration_since(Instant::now()));
        }
    }
}
