// shortcuts.rs resolves terminal key and mouse events into actions
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    // Mouse
    MouseDown(u16, u16),
    MouseDrag(u16, u16),
    MouseUp(u16, u16),
    MouseMove(u16, u16),
    ScrollUp,
    ScrollDown,

    // Keyboard
    LineUp,
    LineDown,
    PageUp,
    PageDown,
    SelectAll,
    ClearSelection,
    TogglePointer,
    Quit,
}

pub struct Shortcuts;

impl Shortcuts {
    /// THE ONE PLACE TO CHANGE SHORTCUTS
    /// Format: (KeyCode, Modifiers, Action, Description)
    fn get_mappings() -> Vec<(KeyCode, KeyModifiers, Action, &'static str)> {
        vec![
            (KeyCode::Char('q'), KeyModifiers::CONTROL, Action::Quit, "Quit program"),
            (KeyCode::Char('a'), KeyModifiers::CONTROL, Action::SelectAll, "Select all"),
            (KeyCode::Char('p'), KeyModifiers::CONTROL, Action::TogglePointer, "Toggle selection pointer"),
            (KeyCode::Char('q'), KeyModifiers::empty(), Action::Quit, "Quit program"),
            (KeyCode::Esc, KeyModifiers::empty(), Action::ClearSelection, "Clear selection"),
            (KeyCode::Up, KeyModifiers::empty(), Action::LineUp, "Scroll up one line"),
            (KeyCode::Down, KeyModifiers::empty(), Action::LineDown, "Scroll down one line"),
            (KeyCode::PageUp, KeyModifiers::empty(), Action::PageUp, "Scroll up one page"),
            (KeyCode::PageDown, KeyModifiers::empty(), Action::PageDown, "Scroll down one page"),
        ]
    }

    pub fn resolve(event: &KeyEvent) -> Option<Action> {
        // exact modifier match so Ctrl+Q does not also read as q
        Self::get_mappings()
            .into_iter()
            .find(|(code, mods, _, _)| event.code == *code && event.modifiers == *mods)
            .map(|(_, _, action, _)| action)
    }

    pub fn resolve_mouse(event: &MouseEvent) -> Option<Action> {
        let (x, y) = (event.column, event.row);
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => Some(Action::MouseDown(x, y)),
            MouseEventKind::Drag(MouseButton::Left) => Some(Action::MouseDrag(x, y)),
            MouseEventKind::Up(MouseButton::Left) => Some(Action::MouseUp(x, y)),
            // other buttons still count as held for the hover affordance
            MouseEventKind::Drag(_) => Some(Action::MouseDrag(x, y)),
            MouseEventKind::Moved => Some(Action::MouseMove(x, y)),
            MouseEventKind::ScrollUp => Some(Action::ScrollUp),
            MouseEventKind::ScrollDown => Some(Action::ScrollDown),
            _ => None,
        }
    }

    // one-line legend for the footer
    pub fn footer_hint() -> String {
        Self::get_mappings()
            .into_iter()
            .filter(|(_, mods, _, _)| mods.contains(KeyModifiers::CONTROL))
            .map(|(code, mods, _, desc)| format!("{} {}", Self::key_to_string(code, mods), desc))
            .collect::<Vec<_>>()
            .join(" | ")
    }

    fn key_to_string(code: KeyCode, mods: KeyModifiers) -> String {
        let mut s = String::new();
        if mods.contains(KeyModifiers::CONTROL) { s.push_str("Ctrl+"); }
        if mods.contains(KeyModifiers::ALT) { s.push_str("Alt+"); }
        if mods.contains(KeyModifiers::SHIFT) { s.push_str("Shift+"); }

        match code {
            KeyCode::Char(c) => s.push(c.to_ascii_uppercase()),
            KeyCode::Up => s.push_str("Up Arrow"),
            KeyCode::Down => s.push_str("Down Arrow"),
            KeyCode::PageUp => s.push_str("Page Up"),
            KeyCode::PageDown => s.push_str("Page Down"),
            KeyCode::Esc => s.push_str("Esc"),
            _ => s.push_str("Unknown"),
        }
        s
    }
}
