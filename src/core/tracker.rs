// tracker module: debounced pointer hit testing against the selection
use super::geometry::resolve_rects;
use super::host::Host;
use super::rect::Rect;
use super::timer::{Clock, DebounceTimer, SystemClock};
use std::time::{Duration, Instant};
use tracing::{debug, trace};

/// Pointer motion over the tracked surface, in viewport coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerMove {
    pub x: f32,
    pub y: f32,
    pub buttons_down: bool,
}

impl PointerMove {
    pub fn hover(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            buttons_down: false,
        }
    }

    pub fn drag(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            buttons_down: true,
        }
    }
}

/// The pointer left some element of the surface. `related_inside` tells
/// whether it moved onto another element of the same surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PointerLeave {
    pub related_inside: bool,
}

impl PointerLeave {
    pub fn outside() -> Self {
        Self {
            related_inside: false,
        }
    }

    pub fn to_child() -> Self {
        Self {
            related_inside: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TrackerState {
    pub cursor_style: String,
    pub cached_rects: Option<Vec<Rect>>, // None = unknown
    pub pointer: Option<(f32, f32)>,
    pub update_pending: bool,
}

impl TrackerState {
    fn new(cursor_style: String) -> Self {
        Self {
            cursor_style,
            cached_rects: None,
            pointer: None,
            update_pending: false,
        }
    }

    fn invalidate(&mut self) {
        self.cached_rects = None;
    }

    fn hit(&self) -> bool {
        let Some((x, y)) = self.pointer else {
            return false;
        };
        self.cached_rects
            .as_deref()
            .unwrap_or_default()
            .iter()
            .any(|rect| rect.contains(x, y))
    }
}

pub struct PointerHitTracker<C: Clock = SystemClock> {
    state: TrackerState,
    timer: DebounceTimer,
    clock: C,
    inside: bool,
}

impl PointerHitTracker<SystemClock> {
    pub fn new(cursor_style: impl Into<String>) -> Self {
        Self::with_clock(cursor_style, super::timer::DEFAULT_DELAY, SystemClock)
    }
}

impl<C: Clock> PointerHitTracker<C> {
    pub fn with_clock(cursor_style: impl Into<String>, delay: Duration, clock: C) -> Self {
        let state = TrackerState::new(cursor_style.into());
        debug!(style = %state.cursor_style, ?delay, "selection pointer tracker activated");
        Self {
            state,
            timer: DebounceTimer::new(delay),
            clock,
            inside: false,
        }
    }

    pub fn state(&self) -> &TrackerState {
        &self.state
    }

    pub fn cursor_style(&self) -> &str {
        &self.state.cursor_style
    }

    // Result of the last hit test
    pub fn is_inside(&self) -> bool {
        self.inside
    }

    pub fn on_pointer_move(&mut self, event: PointerMove) {
        // No hover affordance while a button is held (drag or selection gesture)
        self.state.pointer = if event.buttons_down {
            None
        } else {
            Some((event.x, event.y))
        };
        self.schedule_update();
    }

    pub fn on_pointer_leave(&mut self, event: PointerLeave) {
        if event.related_inside {
            return;
        }
        self.state.pointer = None;
        self.schedule_update();
    }

    pub fn on_selection_changed(&mut self) {
        self.state.invalidate();
        self.schedule_update();
    }

    pub fn on_scroll(&mut self) {
        self.state.invalidate();
        self.schedule_update();
    }

    pub fn on_window_scroll(&mut self) {
        self.on_scroll();
    }

    pub fn schedule_update(&mut self) {
        if self.state.update_pending {
            return;
        }
        self.state.update_pending = true;
        self.timer.arm(self.clock.now());
        trace!(delay = ?self.timer.delay(), "selection pointer update scheduled");
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.timer.deadline()
    }

    // Run the pending update if its delay has elapsed
    pub fn poll<H: Host + ?Sized>(&mut self, host: &mut H) -> bool {
        if !self.timer.take_due(self.clock.now()) {
            return false;
        }
        self.run_update(host);
        true
    }

    pub fn run_update<H: Host + ?Sized>(&mut self, host: &mut H) {
        self.state.update_pending = false;

        if self.state.cached_rects.is_none()
            && self.state.pointer.is_some()
            && host.has_non_empty_selection()
        {
            let rects = resolve_rects(&*host);
            debug!(count = rects.len(), "selection rects recomputed");
            self.state.cached_rects = Some(rects);
        }

        self.inside = self.state.hit();
        trace!(inside = self.inside, pointer = ?self.state.pointer, "selection hit test");

        let cursor = if self.inside {
            self.state.cursor_style.as_str()
        } else {
            ""
        };
        if host.cursor_style() != cursor {
            host.set_cursor_style(cursor);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::test_host::GridHost;
    use crate::core::timer::{ManualClock, DEFAULT_DELAY};

    fn tracker(clock: &ManualClock) -> PointerHitTracker<ManualClock> {
        PointerHitTracker::with_clock("grab", DEFAULT_DELAY, clock.clone())
    }

    #[test]
    fn test_system_clock_constructor() {
        let tracker = PointerHitTracker::new("copy");
        assert_eq!(tracker.cursor_style(), "copy");
        assert!(!tracker.is_inside());
    }

    #[test]
    fn test_starts_unknown_and_idle() {
        let clock = ManualClock::new();
        let tracker = tracker(&clock);

        assert_eq!(tracker.state().cached_rects, None);
        assert_eq!(tracker.state().pointer, None);
        assert!(!tracker.state().update_pending);
        assert_eq!(tracker.next_deadline(), None);
    }

    #[test]
    fn test_debounce_collapses_moves_into_one_update() {
        let clock = ManualClock::new();
        let mut tracker = tracker(&clock);
        let mut host = GridHost::new(&[10, 10]);
        host.select((0, 0), (0, 5));

        for i in 0..5 {
            tracker.on_pointer_move(PointerMove::hover(100.0 + i as f32, 10.0));
            clock.advance(Duration::from_millis(5));
        }
        let (x, y) = host.cell_center(0, 2);
        tracker.on_pointer_move(PointerMove::hover(x, y));

        assert!(!tracker.poll(&mut host));
        clock.advance(DEFAULT_DELAY);
        assert!(tracker.poll(&mut host));
        assert!(!tracker.poll(&mut host));

        // the last recorded position is the one tested
        assert!(tracker.is_inside());
        assert_eq!(host.cursor, "grab");
        assert_eq!(host.cursor_writes, 1);
    }

    #[test]
    fn test_pending_flag_clears_after_update() {
        let clock = ManualClock::new();
        let mut tracker = tracker(&clock);
        let mut host = GridHost::new(&[10]);

        tracker.on_scroll();
        assert!(tracker.state().update_pending);
        clock.advance(DEFAULT_DELAY);
        tracker.poll(&mut host);
        assert!(!tracker.state().update_pending);

        tracker.on_scroll();
        assert!(tracker.next_deadline().is_some());
    }

    #[test]
    fn test_buttons_down_clears_pointer() {
        let clock = ManualClock::new();
        let mut tracker = tracker(&clock);
        let mut host = GridHost::new(&[10]);
        host.select((0, 0), (0, 9));
        let (x, y) = host.cell_center(0, 3);

        tracker.on_pointer_move(PointerMove::hover(x, y));
        tracker.run_update(&mut host);
        assert_eq!(host.cursor, "grab");

        tracker.on_pointer_move(PointerMove::drag(x, y));
        assert_eq!(tracker.state().pointer, None);
        tracker.run_update(&mut host);
        assert_eq!(host.cursor, "");
    }

    #[test]
    fn test_leave_to_child_is_ignored() {
        let clock = ManualClock::new();
        let mut tracker = tracker(&clock);

        tracker.on_pointer_move(PointerMove::hover(5.0, 5.0));
        tracker.state.update_pending = false;
        tracker.timer.cancel();

        tracker.on_pointer_leave(PointerLeave::to_child());
        assert_eq!(tracker.state().pointer, Some((5.0, 5.0)));
        assert!(!tracker.state().update_pending);

        tracker.on_pointer_leave(PointerLeave::outside());
        assert_eq!(tracker.state().pointer, None);
        assert!(tracker.state().update_pending);
    }

    #[test]
    fn test_absent_pointer_skips_recompute() {
        let clock = ManualClock::new();
        let mut tracker = tracker(&clock);
        let mut host = GridHost::new(&[10]);
        host.select((0, 0), (0, 4));

        tracker.on_selection_changed();
        tracker.run_update(&mut host);

        assert_eq!(host.coord_calls.get(), 0);
        assert_eq!(tracker.state().cached_rects, None);
        assert_eq!(host.cursor_writes, 0);
    }

    #[test]
    fn test_cache_is_reused_until_invalidated() {
        let clock = ManualClock::new();
        let mut tracker = tracker(&clock);
        let mut host = GridHost::new(&[10]);
        host.select((0, 0), (0, 4));
        let (x, y) = host.cell_center(0, 1);

        tracker.on_pointer_move(PointerMove::hover(x, y));
        tracker.run_update(&mut host);
        let calls = host.coord_calls.get();
        assert!(calls > 0);

        tracker.on_pointer_move(PointerMove::hover(x + 1.0, y));
        tracker.run_update(&mut host);
        assert_eq!(host.coord_calls.get(), calls);

        tracker.on_window_scroll();
        tracker.run_update(&mut host);
        assert!(host.coord_calls.get() > calls);
    }

    #[test]
    fn test_no_selection_keeps_cache_unknown() {
        let clock = ManualClock::new();
        let mut tracker = tracker(&clock);
        let mut host = GridHost::new(&[10]);

        tracker.on_pointer_move(PointerMove::hover(5.0, 5.0));
        tracker.run_update(&mut host);

        assert_eq!(tracker.state().cached_rects, None);
        assert!(!tracker.is_inside());
        assert_eq!(host.cursor_writes, 0);
    }

    #[test]
    fn test_unchanged_state_does_not_rewrite_cursor() {
        let clock = ManualClock::new();
        let mut tracker = tracker(&clock);
        let mut host = GridHost::new(&[10]);
        host.select((0, 2), (0, 8));
        let (x, y) = host.cell_center(0, 4);

        tracker.on_pointer_move(PointerMove::hover(x, y));
        tracker.run_update(&mut host);
        tracker.run_update(&mut host);
        assert_eq!(host.cursor_writes, 1);

        tracker.on_pointer_leave(PointerLeave::outside());
        tracker.run_update(&mut host);
        tracker.run_update(&mut host);
        assert_eq!(host.cursor, "");
        assert_eq!(host.cursor_writes, 2);
    }
}
