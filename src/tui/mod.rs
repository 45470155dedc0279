// tui module: the terminal frontend, driving the selection pointer from crossterm events
pub mod shortcuts;
pub mod terminal;
pub mod view;

use crate::core::{Buffer, PointerLeave, PointerMove, SelectionPointer, SelectionPointerOption};
use crate::error::Result;
use crossterm::event::{poll, read, Event, KeyEventKind};
use shortcuts::{Action, Shortcuts};
use std::time::{Duration, Instant};
use terminal::Terminal;
use tracing::{debug, info};
use view::View;

// Poll timeout when nothing is scheduled
const IDLE_POLL: Duration = Duration::from_millis(250);
const WHEEL_LINES: isize = 3;

pub struct TerminalEditor {
    view: View,
    pointer: SelectionPointer,
    option: SelectionPointerOption,
    quit_program: bool,
}

impl TerminalEditor {
    pub fn new(buffer: Buffer, option: SelectionPointerOption, delay: Duration) -> Self {
        Self {
            view: View::new(buffer, 80, 24),
            pointer: SelectionPointer::with_clock(delay, Default::default()),
            option,
            quit_program: false,
        }
    }

    pub fn set_filename(&mut self, filename: String) {
        self.view.set_filename(filename);
    }

    pub fn run(&mut self) -> Result<()> {
        Terminal::initialize()?;
        let result = self.main_loop();
        // always restore the terminal, but report the loop error first
        let restored = Terminal::terminate();
        result?;
        restored?;
        Ok(())
    }

    fn main_loop(&mut self) -> Result<()> {
        let size = Terminal::get_size()?;
        self.view.resize(size.width, size.height);
        let option = self.option.clone();
        self.apply_option(&option);
        info!(option = ?self.option, "terminal frontend started");

        loop {
            if poll(self.poll_timeout())? {
                match read()? {
                    Event::Key(event) if event.kind == KeyEventKind::Press => {
                        if let Some(action) = Shortcuts::resolve(&event) {
                            self.handle_action(action);
                        }
                    }
                    Event::Mouse(event) => {
                        if let Some(action) = Shortcuts::resolve_mouse(&event) {
                            self.handle_action(action);
                        }
                    }
                    Event::FocusLost => {
                        self.pointer.on_pointer_leave(PointerLeave::outside());
                    }
                    Event::Resize(width, height) => {
                        if self.view.resize(width, height) {
                            // the whole viewport moved under the text
                            self.pointer.on_window_scroll();
                        }
                    }
                    _ => {}
                }
            }

            self.pointer.poll(&mut self.view);

            if let Some(shape) = self.view.take_pointer_shape() {
                debug!(shape, "pointer shape changed");
                Terminal::set_pointer_shape(shape)?;
            }
            self.view.render_if_needed()?;

            if self.quit_program {
                break;
            }
        }

        self.pointer.deactivate(&mut self.view);
        Ok(())
    }

    fn poll_timeout(&self) -> Duration {
        self.pointer
            .next_deadline()
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
            .unwrap_or(IDLE_POLL)
    }

    fn apply_option(&mut self, option: &SelectionPointerOption) {
        self.pointer.set_option(option, &mut self.view);
        self.view.pointer_enabled = self.pointer.is_active();
        self.view.needs_redraw = true;
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::MouseDown(x, y) => {
                self.view.handle_mouse_down(x, y);
                self.pointer.on_selection_changed();
                self.pointer.on_pointer_move(drag_at(x, y));
            }
            Action::MouseDrag(x, y) => {
                if self.view.handle_mouse_drag(x, y) {
                    self.pointer.on_selection_changed();
                }
                self.pointer.on_pointer_move(drag_at(x, y));
            }
            Action::MouseUp(x, y) => {
                if self.view.handle_mouse_up(x, y) {
                    self.pointer.on_selection_changed();
                }
                self.pointer.on_pointer_move(hover_at(x, y));
            }
            Action::MouseMove(x, y) => {
                self.pointer.on_pointer_move(hover_at(x, y));
            }
            Action::ScrollUp => self.scroll(-WHEEL_LINES),
            Action::ScrollDown => self.scroll(WHEEL_LINES),
            Action::LineUp => self.scroll(-1),
            Action::LineDown => self.scroll(1),
            Action::PageUp => self.scroll(-self.view.page()),
            Action::PageDown => self.scroll(self.view.page()),
            Action::SelectAll => {
                if self.view.select_all() {
                    self.pointer.on_selection_changed();
                }
            }
            Action::ClearSelection => {
                if self.view.clear_selection() {
                    self.pointer.on_selection_changed();
                }
            }
            Action::TogglePointer => {
                // back on means the configured style, or the default one
                let next = if self.pointer.is_active() {
                    SelectionPointerOption::Disabled
                } else if self.option.is_enabled() {
                    self.option.clone()
                } else {
                    SelectionPointerOption::Enabled
                };
                self.apply_option(&next);
            }
            Action::Quit => {
                self.quit_program = true;
            }
        }
    }

    fn scroll(&mut self, delta: isize) {
        if self.view.scroll_by(delta) {
            self.pointer.on_scroll();
        }
    }
}

fn hover_at(x: u16, y: u16) -> PointerMove {
    let (px, py) = View::pointer_point(x, y);
    PointerMove::hover(px, py)
}

fn drag_at(x: u16, y: u16) -> PointerMove {
    let (px, py) = View::pointer_point(x, y);
    PointerMove::drag(px, py)
}
