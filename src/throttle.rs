//! Rate limiting for resize-driven re-renders.
//!
//! Resize events can fire continuously during a drag; a full redraw per event
//! is wasted work. The gate admits at most one execution per window and keeps
//! at most one trigger pending; a pending trigger runs once the window
//! elapses. Time is passed in explicitly, so the behavior is independent of
//! any timer primitive and fully deterministic under test.

use std::time::{Duration, Instant};

/// Default window matching the page's 250 ms resize throttle.
pub const DEFAULT_WINDOW: Duration = Duration::from_millis(250);

#[derive(Debug, Clone)]
pub struct Throttle {
    window: Duration,
    last_run: Option<Instant>,
    pending: bool,
}

impl Throttle {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_run: None,
            pending: false,
        }
    }

    /// Report a trigger (e.g. a resize event) at `now`.
    ///
    /// Returns `true` when the caller should execute immediately. Otherwise
    /// the trigger joins the pending window; it is not lost. Callers must
    /// measure their inputs (such as the container width) only after an
    /// execution is admitted, never at trigger time.
    pub fn trigger(&mut self, now: Instant) -> bool {
        if self.window_open(now) {
            self.last_run = Some(now);
            self.pending = false;
            true
        } else {
            self.pending = true;
            false
        }
    }

    /// Drain a coalesced trigger. Returns `true` at most once per elapsed
    /// window, and only if some trigger was deferred since the last run.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.pending && self.window_open(now) {
            self.last_run = Some(now);
            self.pending = false;
            true
        } else {
            false
        }
    }

    fn window_open(&self, now: Instant) -> bool {
        match self.last_run {
            None => true,
            Some(last) => now.duration_since(last) >= self.window,
        }
    }
}

impl Default for Throttle {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn first_trigger_runs_immediately() {
        let mut t = Throttle::default();
        assert!(t.trigger(Instant::now()));
    }

    #[test]
    fn at_most_one_execution_per_window() {
        let start = Instant::now();
        let mut t = Throttle::new(ms(250));
        assert!(t.trigger(start));
        // a burst of events inside the window is coalesced
        assert!(!t.trigger(start + ms(10)));
        assert!(!t.trigger(start + ms(100)));
        assert!(!t.trigger(start + ms(249)));
        // nothing drains before the window elapses
        assert!(!t.poll(start + ms(249)));
        // the coalesced trigger runs exactly once afterwards
        assert!(t.poll(start + ms(250)));
        assert!(!t.poll(start + ms(251)));
    }

    #[test]
    fn trigger_after_idle_window_runs_again() {
        let start = Instant::now();
        let mut t = Throttle::new(ms(250));
        assert!(t.trigger(start));
        assert!(t.trigger(start + ms(300)));
    }

    #[test]
    fn poll_without_pending_trigger_is_inert() {
        let start = Instant::now();
        let mut t = Throttle::new(ms(250));
        assert!(t.trigger(start));
        assert!(!t.poll(start + ms(500)));
    }
}
