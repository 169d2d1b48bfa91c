//! Cosmetic UI effects as plain state machines.
//!
//! Both are driven by the view layer (scroll events, animation ticks) and
//! hold no reference to any other application state.

use crate::config::{NAVBAR_SCROLLED_THRESHOLD, SCROLL_TOP_THRESHOLD};

// =============================================================================
// Scroll position
// =============================================================================

/// Tracks whether the vertical offset is past a threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollWatcher {
    threshold: f64,
    visible: bool,
}

impl ScrollWatcher {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            visible: false,
        }
    }

    /// Watcher for the scroll-to-top control.
    pub fn scroll_to_top() -> Self {
        Self::new(SCROLL_TOP_THRESHOLD)
    }

    /// Watcher for the navbar backdrop.
    pub fn navbar() -> Self {
        Self::new(NAVBAR_SCROLLED_THRESHOLD)
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Feeds a new offset. Returns `true` if visibility changed.
    pub fn observe(&mut self, offset: f64) -> bool {
        let visible = offset > self.threshold;
        let changed = visible != self.visible;
        self.visible = visible;
        changed
    }
}

impl Default for ScrollWatcher {
    fn default() -> Self {
        Self::scroll_to_top()
    }
}

// =============================================================================
// Counter animation
// =============================================================================

/// One rendered step of a [`CounterAnimation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterFrame {
    pub value: u64,
    pub done: bool,
}

/// Linear count-up from 0 to `end` over `duration_ms`.
///
/// The first sample fixes the start time. Values never decrease, and once
/// the duration has elapsed the value is exactly `end`.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterAnimation {
    end: u64,
    duration_ms: u64,
    start: Option<f64>,
    last: u64,
}

impl CounterAnimation {
    pub fn new(end: u64, duration_ms: u64) -> Self {
        Self {
            end,
            duration_ms,
            start: None,
            last: 0,
        }
    }

    /// Last value produced (0 before the first sample).
    pub fn value(&self) -> u64 {
        self.last
    }

    /// Starts over from zero with new parameters.
    pub fn restart(&mut self, end: u64, duration_ms: u64) {
        *self = Self::new(end, duration_ms);
    }

    /// Advances to `timestamp_ms` (any monotonic clock).
    pub fn sample(&mut self, timestamp_ms: f64) -> CounterFrame {
        let start = *self.start.get_or_insert(timestamp_ms);
        let elapsed = (timestamp_ms - start).max(0.0);

        if self.duration_ms == 0 || elapsed >= self.duration_ms as f64 {
            self.last = self.end;
            return CounterFrame {
                value: self.end,
                done: true,
            };
        }

        let progress = (elapsed / self.duration_ms as f64).min(1.0);
        let value = (self.end as f64 * progress).floor() as u64;
        self.last = self.last.max(value.min(self.end));

        CounterFrame {
            value: self.last,
            done: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_threshold_edges() {
        let mut watcher = ScrollWatcher::scroll_to_top();
        assert!(!watcher.observe(400.0));
        assert!(!watcher.visible());

        assert!(watcher.observe(401.0));
        assert!(watcher.visible());
        assert!(!watcher.observe(900.0));

        assert!(watcher.observe(400.0));
        assert!(!watcher.visible());
    }

    #[test]
    fn test_navbar_watcher() {
        let mut watcher = ScrollWatcher::navbar();
        assert!(!watcher.observe(20.0));
        assert!(watcher.observe(20.5));
    }

    #[test]
    fn test_counter_reaches_end_exactly() {
        let mut counter = CounterAnimation::new(100, 1000);
        let mut previous = 0;
        let mut frames = Vec::new();

        let mut t = 5_000.0;
        loop {
            let frame = counter.sample(t);
            assert!(frame.value >= previous);
            previous = frame.value;
            frames.push(frame);
            if frame.done {
                break;
            }
            t += 16.0;
        }

        assert_eq!(frames[0].value, 0);
        assert_eq!(frames.last().unwrap().value, 100);
        assert!(frames.iter().all(|f| f.value <= 100));
    }

    #[test]
    fn test_counter_linear_midpoint() {
        let mut counter = CounterAnimation::new(13_534, 2000);
        counter.sample(0.0);
        assert_eq!(counter.sample(1000.0).value, 6767);
        assert_eq!(counter.sample(1999.0).value, 13_527);
        assert_eq!(
            counter.sample(2000.0),
            CounterFrame {
                value: 13_534,
                done: true
            }
        );
    }

    #[test]
    fn test_counter_clock_going_backwards() {
        let mut counter = CounterAnimation::new(10, 100);
        counter.sample(100.0);
        assert_eq!(counter.sample(150.0).value, 5);
        assert_eq!(counter.sample(120.0).value, 5);
    }

    #[test]
    fn test_restart_resets_value() {
        let mut counter = CounterAnimation::new(10, 100);
        counter.sample(0.0);
        counter.sample(200.0);
        assert_eq!(counter.value(), 10);

        counter.restart(20, 100);
        assert_eq!(counter.value(), 0);
        assert_eq!(counter.sample(50.0).value, 0);
        assert_eq!(counter.sample(150.0).value, 20);
    }

    #[test]
    fn test_zero_duration_finishes_immediately() {
        let mut counter = CounterAnimation::new(48, 0);
        assert_eq!(
            counter.sample(3.0),
            CounterFrame {
                value: 48,
                done: true
            }
        );
    }
}
