//! Scroll Behavior
//!
//! Vertical document scrolling with instant and smooth behaviors.

use std::time::Duration;

/// Length of a smooth scroll
pub const SMOOTH_SCROLL_DURATION: Duration = Duration::from_millis(300);

/// Scroll behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollBehavior {
    #[default]
    Auto,
    Smooth,
    Instant,
}

/// `window.scrollTo` options
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollOptions {
    pub top: f64,
    pub behavior: ScrollBehavior,
}

#[derive(Debug, Clone, Copy)]
struct SmoothScroll {
    from: f64,
    to: f64,
    started: Duration,
}

/// Scroll manager
#[derive(Debug, Default)]
pub struct ScrollManager {
    y: f64,
    max_y: Option<f64>,
    smooth: Option<SmoothScroll>,
}

impl ScrollManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current vertical offset (`window.scrollY`)
    pub fn scroll_y(&self) -> f64 {
        self.y
    }

    /// Limit scrolling to `0..=max_y`
    pub fn set_max_scroll(&mut self, max_y: Option<f64>) {
        self.max_y = max_y.map(|m| m.max(0.0));
        self.y = self.clamp(self.y);
    }

    fn clamp(&self, y: f64) -> f64 {
        let y = y.max(0.0);
        match self.max_y {
            Some(max) => y.min(max),
            None => y,
        }
    }

    /// Jump to `y`, cancelling any smooth scroll in flight
    pub fn set_scroll_y(&mut self, y: f64) {
        self.smooth = None;
        self.y = self.clamp(y);
    }

    pub fn scroll_to(&mut self, options: ScrollOptions, now: Duration) {
        let target = self.clamp(options.top);
        match options.behavior {
            ScrollBehavior::Instant | ScrollBehavior::Auto => self.set_scroll_y(target),
            ScrollBehavior::Smooth => {
                self.smooth = Some(SmoothScroll {
                    from: self.y,
                    to: target,
                    started: now,
                });
            }
        }
    }

    /// Advance a smooth scroll. Returns `true` when the position moved.
    pub fn update(&mut self, now: Duration) -> bool {
        let Some(anim) = self.smooth else {
            return false;
        };

        let elapsed = now.saturating_sub(anim.started).as_secs_f64();
        let progress = (elapsed / SMOOTH_SCROLL_DURATION.as_secs_f64()).min(1.0);
        let eased = 1.0 - (1.0 - progress).powi(3);

        let before = self.y;
        if progress >= 1.0 {
            self.y = anim.to;
            self.smooth = None;
        } else {
            self.y = anim.from + (anim.to - anim.from) * eased;
        }
        self.y != before
    }

    pub fn is_scrolling(&self) -> bool {
        self.smooth.is_some()
    }

    /// Destination of the smooth scroll in flight
    pub fn smooth_target(&self) -> Option<f64> {
        self.smooth.map(|s| s.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instant_scroll_is_clamped() {
        let mut mgr = ScrollManager::new();
        mgr.set_max_scroll(Some(1000.0));

        mgr.scroll_to(ScrollOptions { top: 200.0, behavior: ScrollBehavior::Instant }, Duration::ZERO);
        assert_eq!(mgr.scroll_y(), 200.0);

        mgr.set_scroll_y(5000.0);
        assert_eq!(mgr.scroll_y(), 1000.0);
        mgr.set_scroll_y(-20.0);
        assert_eq!(mgr.scroll_y(), 0.0);
    }

    #[test]
    fn test_smooth_scroll_reaches_target() {
        let mut mgr = ScrollManager::new();
        let start = Duration::from_millis(1000);
        mgr.scroll_to(ScrollOptions { top: 820.0, behavior: ScrollBehavior::Smooth }, start);
        assert!(mgr.is_scrolling());
        assert_eq!(mgr.smooth_target(), Some(820.0));

        let mut last = 0.0;
        for frame in 1..=18 {
            mgr.update(start + Duration::from_millis(frame * 16));
            assert!(mgr.scroll_y() >= last);
            last = mgr.scroll_y();
        }
        assert!(last > 700.0 && last < 820.0);

        assert!(mgr.update(start + SMOOTH_SCROLL_DURATION));
        assert_eq!(mgr.scroll_y(), 820.0);
        assert!(!mgr.is_scrolling());
        assert!(!mgr.update(start + SMOOTH_SCROLL_DURATION * 2));
    }
}
