// mouse module responsible for building selections from mouse gestures
use super::View;
use crate::core::SelectionRange;

pub fn handle_down(view: &mut View, screen_x: u16, screen_y: u16) -> bool {
    let pos = view.screen_to_text_pos(screen_x, screen_y);
    let had_selection = view.selection.is_some_and(|s| !s.is_empty());

    // Start new selection
    view.selection = Some(SelectionRange::caret(pos));
    view.is_dragging = true;
    view.needs_redraw = true;

    had_selection
}

pub fn handle_drag(view: &mut View, screen_x: u16, screen_y: u16) -> bool {
    if !view.is_dragging {
        return false;
    }

    let pos = view.screen_to_text_pos(screen_x, screen_y);

    match view.selection {
        Some(ref mut selection) if selection.head != pos => {
            selection.update_head(pos);
            view.needs_redraw = true;
            true
        }
        _ => false,
    }
}

pub fn handle_up(view: &mut View, screen_x: u16, screen_y: u16) -> bool {
    let changed = handle_drag(view, screen_x, screen_y);
    view.is_dragging = false;

    // If selection is empty (just a click), clear it
    if view.selection.is_some_and(|s| s.is_empty()) {
        view.selection = None;
        view.needs_redraw = true;
    }

    changed
}
