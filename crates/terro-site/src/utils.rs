//! Rate limiting helpers
//!
//! Throttle and debounce with the current time passed in by the caller.
//! They hold no global state; each behavior owns its own gate.

use std::time::Duration;

/// Leading-edge throttle gate
#[derive(Debug, Clone)]
pub struct Throttle {
    interval: Duration,
    last_run: Option<Duration>,
}

impl Throttle {
    /// Gate that has not run yet
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_run: None,
        }
    }

    /// Whether a call at `now` may run. A passing call restarts the window.
    pub fn ready(&mut self, now: Duration) -> bool {
        match self.last_run {
            Some(last) if now < last.saturating_add(self.interval) => false,
            _ => {
                self.last_run = Some(now);
                true
            }
        }
    }

    /// Minimum spacing between runs
    pub fn interval(&self) -> Duration {
        self.interval
    }
}

/// Trailing-edge debounce gate
#[derive(Debug, Clone)]
pub struct Debounce {
    wait: Duration,
    deadline: Option<Duration>,
}

impl Debounce {
    /// Idle gate with the given quiet period
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            deadline: None,
        }
    }

    /// Record a call, pushing the deadline out to `now + wait`
    pub fn call(&mut self, now: Duration) {
        self.deadline = Some(now.saturating_add(self.wait));
    }

    /// `true` exactly once when the quiet period has elapsed
    pub fn poll(&mut self, now: Duration) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Whether a call is waiting for its quiet period
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }
}

/// A function wrapped in a [`Throttle`]
#[derive(Debug, Clone)]
pub struct Throttled<F> {
    gate: Throttle,
    f: F,
}

/// Wrap `f` so it runs at most once per `interval`; dropped calls are not queued
pub fn throttle<F>(f: F, interval: Duration) -> Throttled<F> {
    Throttled {
        gate: Throttle::new(interval),
        f,
    }
}

impl<F> Throttled<F> {
    /// Invoke at `now`; `None` when the call was dropped
    pub fn call<A, R>(&mut self, now: Duration, arg: A) -> Option<R>
    where
        F: FnMut(A) -> R,
    {
        if self.gate.ready(now) {
            Some((self.f)(arg))
        } else {
            None
        }
    }
}

/// A function wrapped in a [`Debounce`], remembering the latest argument
#[derive(Debug, Clone)]
pub struct Debounced<F, A> {
    gate: Debounce,
    f: F,
    pending: Option<A>,
}

/// Wrap `f` so it runs once, `wait` after the last call
pub fn debounce<F, A>(f: F, wait: Duration) -> Debounced<F, A> {
    Debounced {
        gate: Debounce::new(wait),
        f,
        pending: None,
    }
}

impl<F, A> Debounced<F, A> {
    /// Record a call at `now`, replacing any pending argument
    pub fn call(&mut self, now: Duration, arg: A) {
        self.pending = Some(arg);
        self.gate.call(now);
    }

    /// Fire if the quiet period is over
    pub fn poll<R>(&mut self, now: Duration) -> Option<R>
    where
        F: FnMut(A) -> R,
    {
        if !self.gate.poll(now) {
            return None;
        }
        self.pending.take().map(|arg| (self.f)(arg))
    }

    /// Whether a call is waiting to fire
    pub fn is_pending(&self) -> bool {
        self.gate.is_pending()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn test_throttle_runs_leading_edge_once_per_window() {
        let mut runs = Vec::new();
        let mut throttled = throttle(|t: u64| runs.push(t), ms(100));

        for t in [0, 50, 100, 150] {
            throttled.call(ms(t), t);
        }
        drop(throttled);
        assert_eq!(runs, vec![0, 100]);
    }

    #[test]
    fn test_throttle_call_a_full_window_later_runs() {
        let mut runs = Vec::new();
        let mut throttled = throttle(|t: u64| runs.push(t), ms(100));

        for t in [0, 50, 100, 200] {
            throttled.call(ms(t), t);
        }
        drop(throttled);
        // 200 is a full interval after the run at 100, so it passes too
        assert_eq!(runs, vec![0, 100, 200]);
    }

    #[test]
    fn test_throttle_never_more_than_once_per_interval() {
        let mut gate = Throttle::new(ms(10));
        let passed: Vec<u64> = (0..100).filter(|t| gate.ready(ms(*t))).collect();
        assert_eq!(passed, vec![0, 10, 20, 30, 40, 50, 60, 70, 80, 90]);
    }

    #[test]
    fn test_debounce_fires_once_after_quiet_period() {
        let mut fired = Vec::new();
        let mut debounced = debounce(|label: &str| fired.push(label.to_string()), ms(100));

        debounced.call(ms(0), "first");
        debounced.call(ms(50), "second");

        assert_eq!(debounced.poll::<()>(ms(100)), None);
        assert_eq!(debounced.poll::<()>(ms(149)), None);
        assert!(debounced.poll::<()>(ms(150)).is_some());
        assert_eq!(debounced.poll::<()>(ms(400)), None);
        assert!(!debounced.is_pending());
        drop(debounced);

        assert_eq!(fired, vec!["second".to_string()]);
    }
}
