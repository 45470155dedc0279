// option module: the editor option and the controller it switches on and off
use super::host::Host;
use super::timer::{Clock, SystemClock, DEFAULT_DELAY};
use super::tracker::{PointerHitTracker, PointerLeave, PointerMove};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::str::FromStr;
use std::time::{Duration, Instant};
use tracing::debug;

// Style used when the option is simply switched on
pub const DEFAULT_STYLE: &str = "default";

/// `false`, `true` or the name of the cursor style to show over a selection.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "RawOption", into = "RawOption")]
pub enum SelectionPointerOption {
    Disabled,
    #[default]
    Enabled,
    Style(String),
}

impl SelectionPointerOption {
    pub fn is_enabled(&self) -> bool {
        !matches!(self, Self::Disabled)
    }

    pub fn cursor_style(&self) -> Option<&str> {
        match self {
            Self::Disabled => None,
            Self::Enabled => Some(DEFAULT_STYLE),
            Self::Style(style) => Some(style),
        }
    }
}

// Wire shape: a JSON bool or string
#[derive(Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum RawOption {
    Flag(bool),
    Style(String),
}

impl From<RawOption> for SelectionPointerOption {
    fn from(raw: RawOption) -> Self {
        match raw {
            RawOption::Flag(false) => Self::Disabled,
            RawOption::Flag(true) => Self::Enabled,
            RawOption::Style(style) if style.is_empty() => Self::Disabled,
            RawOption::Style(style) => Self::Style(style),
        }
    }
}

impl From<SelectionPointerOption> for RawOption {
    fn from(option: SelectionPointerOption) -> Self {
        match option {
            SelectionPointerOption::Disabled => Self::Flag(false),
            SelectionPointerOption::Enabled => Self::Flag(true),
            SelectionPointerOption::Style(style) => Self::Style(style),
        }
    }
}

impl FromStr for SelectionPointerOption {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim() {
            "" | "false" => Self::Disabled,
            "true" => Self::Enabled,
            style => Self::Style(style.to_string()),
        })
    }
}

/// Owns the tracker of one editor instance while the option is on.
///
/// Every event method is a no-op while inactive, so a host may keep
/// forwarding events after switching the option off.
pub struct SelectionPointer<C: Clock + Clone = SystemClock> {
    tracker: Option<PointerHitTracker<C>>,
    delay: Duration,
    clock: C,
}

impl SelectionPointer<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(DEFAULT_DELAY, SystemClock)
    }
}

impl Default for SelectionPointer<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock + Clone> SelectionPointer<C> {
    pub fn with_clock(delay: Duration, clock: C) -> Self {
        Self {
            tracker: None,
            delay,
            clock,
        }
    }

    pub fn is_active(&self) -> bool {
        self.tracker.is_some()
    }

    pub fn tracker(&self) -> Option<&PointerHitTracker<C>> {
        self.tracker.as_ref()
    }

    // Tear down any previous tracker, then start a new one if enabled
    pub fn set_option<H: Host + ?Sized>(&mut self, option: &SelectionPointerOption, host: &mut H) {
        self.deactivate(host);
        if let Some(style) = option.cursor_style() {
            self.activate(style);
        }
    }

    fn activate(&mut self, style: &str) {
        self.tracker = Some(PointerHitTracker::with_clock(
            style,
            self.delay,
            self.clock.clone(),
        ));
    }

    pub fn deactivate<H: Host + ?Sized>(&mut self, host: &mut H) {
        // dropping the tracker also drops its pending task
        if self.tracker.take().is_none() {
            return;
        }
        if !host.cursor_style().is_empty() {
            host.set_cursor_style("");
        }
        debug!("selection pointer tracker deactivated");
    }

    pub fn on_pointer_move(&mut self, event: PointerMove) {
        if let Some(tracker) = self.tracker.as_mut() {
            tracker.on_pointer_move(event);
        }
    }

    pub fn on_pointer_leave(&mut self, event: PointerLeave) {
        if let Some(tracker) = self.tracker.as_mut() {
            tracker.on_pointer_leave(event);
        }
    }

    pub fn on_selection_changed(&mut self) {
        if let Some(tracker) = self.tracker.as_mut() {
            tracker.on_selection_changed();
        }
    }

    pub fn on_scroll(&mut self) {
        if let Some(tracker) = self.tracker.as_mut() {
            tracker.on_scroll();
        }
    }

    pub fn on_window_scroll(&mut self) {
        if let Some(tracker) = self.tracker.as_mut() {
            tracker.on_window_scroll();
        }
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.tracker.as_ref().and_then(|t| t.next_deadline())
    }

    pub fn poll<H: Host + ?Sized>(&mut self, host: &mut H) -> bool {
        match self.tracker.as_mut() {
            Some(tracker) => tracker.poll(host),
            None => false,
        }
    }
}
