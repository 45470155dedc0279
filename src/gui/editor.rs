// src/gui/editor.rs - text panel: drag selection, scrolling and pointer forwarding
use super::state::{EditorState, CHAR_WIDTH, MARGIN_WIDTH, ROW_HEIGHT};
use crate::core::{
    PointerLeave, PointerMove, Rect as HitRect, SelectionPointer, SelectionRange,
};
use egui::{Color32, FontId, Pos2, Rect, Response, Sense, Ui};

const WHEEL_LINES: isize = 3;

pub struct EditorPanel<'a> {
    state: &'a mut EditorState,
    pointer: &'a mut SelectionPointer,
}

impl<'a> EditorPanel<'a> {
    pub fn new(state: &'a mut EditorState, pointer: &'a mut SelectionPointer) -> Self {
        Self { state, pointer }
    }

    pub fn show(&mut self, ui: &mut Ui) -> Response {
        let available_rect = ui.available_rect_before_wrap();
        let response = ui.allocate_rect(available_rect, Sense::click_and_drag());

        // a moved panel shifts every glyph, same as a window scroll
        if self.state.set_origin(available_rect.min) {
            self.pointer.on_window_scroll();
        }

        self.handle_scroll(ui, &response);
        self.handle_selection(ui, &response);
        self.track_pointer(ui);
        self.render_content(ui, available_rect);

        response
    }

    fn handle_scroll(&mut self, ui: &Ui, response: &Response) {
        if !response.hovered() {
            return;
        }
        let dy = ui.input(|i| i.raw_scroll_delta.y);
        let lines = if dy > 0.0 {
            -WHEEL_LINES
        } else if dy < 0.0 {
            WHEEL_LINES
        } else {
            return;
        };
        if self.state.scroll_by(lines) {
            self.pointer.on_scroll();
        }
    }

    fn handle_selection(&mut self, ui: &Ui, response: &Response) {
        if response.drag_started() {
            let origin = ui.input(|i| i.pointer.press_origin());
            if let Some(pos) = origin.or_else(|| response.interact_pointer_pos()) {
                let text_pos = self.state.screen_pos_to_text_pos(pos);
                self.state.selection = Some(SelectionRange::caret(text_pos));
                self.state.is_dragging = true;
                self.pointer.on_selection_changed();
            }
        }

        if response.dragged() && self.state.is_dragging {
            if let Some(pos) = response.interact_pointer_pos() {
                let text_pos = self.state.screen_pos_to_text_pos(pos);
                if let Some(sel) = self.state.selection.as_mut() {
                    if sel.head != text_pos {
                        sel.update_head(text_pos);
                        self.pointer.on_selection_changed();
                    }
                }
            }
        }

        if response.drag_stopped() {
            self.state.is_dragging = false;
            if self.state.selection.is_some_and(|s| s.is_empty()) {
                self.state.selection = None;
                self.pointer.on_selection_changed();
            }
        }

        // a plain click drops the selection
        if response.clicked() && self.state.clear_selection() {
            self.pointer.on_selection_changed();
        }
    }

    fn track_pointer(&mut self, ui: &Ui) {
        let (hover, down) = ui.input(|i| (i.pointer.hover_pos(), i.pointer.any_down()));

        match hover {
            Some(pos) => {
                if self.state.last_pointer != Some((pos, down)) {
                    self.pointer.on_pointer_move(PointerMove {
                        x: pos.x,
                        y: pos.y,
                        buttons_down: down,
                    });
                }
            }
            None => {
                if self.state.last_pointer.is_some() {
                    self.pointer.on_pointer_leave(PointerLeave::outside());
                }
            }
        }
        self.state.last_pointer = hover.map(|pos| (pos, down));
    }

    fn render_content(&mut self, ui: &Ui, rect: Rect) {
        let painter = ui.painter();
        let font_id = FontId::monospace(14.0);
        let scroll_line = self.state.scroll_line;

        let visible_rows = (rect.height() / ROW_HEIGHT) as usize + 1;
        let end_line = (scroll_line + visible_rows).min(self.state.buffer.line_count());

        // Draw margin background
        let margin_rect = Rect::from_min_size(rect.min, egui::Vec2::new(MARGIN_WIDTH, rect.height()));
        painter.rect_filled(margin_rect, 0.0, Color32::from_rgb(38, 33, 28));

        let selection = self.state.selection.filter(|s| !s.is_empty());
        let mut overlay = Vec::new();

        for line_idx in scroll_line..end_line {
            let y_pos = self.state.row_y(line_idx);
            let line_len = self.state.buffer.line_len(line_idx);

            // Line number
            painter.text(
                Pos2::new(rect.left() + 5.0, y_pos),
                egui::Align2::LEFT_TOP,
                format!("{:>3}", line_idx + 1),
                FontId::monospace(12.0),
                Color32::from_rgb(200, 160, 100),
            );

            // Selection highlight behind the text
            if let Some(sel) = selection.filter(|s| s.covers_line(line_idx)) {
                let (start, end) = sel.normalized();
                let sel_start = if line_idx == start.line { start.column } else { 0 };
                let sel_end = if line_idx == end.line { end.column } else { line_len };

                let left = self.state.column_x(sel_start);
                let right = self.state.column_x(sel_end);
                let sel_rect = Rect::from_min_max(
                    Pos2::new(left, y_pos),
                    Pos2::new(right.max(left + CHAR_WIDTH / 2.0), y_pos + ROW_HEIGHT),
                );
                painter.rect_filled(sel_rect, 0.0, Color32::from_rgb(50, 100, 200));
                overlay.push(HitRect::new(left, right, y_pos, y_pos + ROW_HEIGHT));
            }

            if let Some(line) = self.state.buffer.line(line_idx) {
                painter.text(
                    Pos2::new(self.state.column_x(0), y_pos),
                    egui::Align2::LEFT_TOP,
                    line,
                    font_id.clone(),
                    Color32::WHITE,
                );
            }
        }

        // rows scrolled or resized into view change the hit area too
        if self.state.set_overlay(overlay) {
            self.pointer.on_window_scroll();
        }
    }
}
