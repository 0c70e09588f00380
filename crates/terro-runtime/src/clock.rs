//! Page clock
//!
//! Monotonic time is owned by the host and advanced explicitly.
//! `Sleep` futures park their waker here and are woken when the host
//! moves the clock past their deadline.

use std::cell::{Cell, RefCell};
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll, Waker};
use std::time::Duration;

/// Source of the current page time
pub trait Clock {
    fn now(&self) -> Duration;
}

/// Host-driven monotonic clock
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<Duration>,
    sleepers: RefCell<Vec<(Duration, Waker)>>,
}

impl ManualClock {
    /// Create a shared clock starting at zero
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Move the clock to `now`. Time never goes backwards.
    pub fn set(&self, now: Duration) {
        if now < self.now.get() {
            return;
        }
        self.now.set(now);
        self.wake_due(now);
    }

    pub fn advance(&self, dt: Duration) {
        self.set(self.now.get().saturating_add(dt));
    }

    /// Future that resolves once the clock has advanced by `duration`
    pub fn sleep(self: &Rc<Self>, duration: Duration) -> Sleep {
        Sleep {
            clock: Rc::clone(self),
            deadline: self.now.get().saturating_add(duration),
        }
    }

    /// Number of parked sleepers
    pub fn pending_sleepers(&self) -> usize {
        self.sleepers.borrow().len()
    }

    fn wake_due(&self, now: Duration) {
        let due: Vec<(Duration, Waker)> = {
            let mut sleepers = self.sleepers.borrow_mut();
            let (due, pending) = std::mem::take(&mut *sleepers)
                .into_iter()
                .partition(|(deadline, _)| *deadline <= now);
            *sleepers = pending;
            due
        };
        for (_, waker) in due {
            waker.wake();
        }
    }

    fn park(&self, deadline: Duration, waker: &Waker) {
        let mut sleepers = self.sleepers.borrow_mut();
        if !sleepers
            .iter()
            .any(|(d, w)| *d == deadline && w.will_wake(waker))
        {
            sleepers.push((deadline, waker.clone()));
        }
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

/// Timer future bound to a [`ManualClock`]
#[derive(Debug)]
pub struct Sleep {
    clock: Rc<ManualClock>,
    deadline: Duration,
}

impl Sleep {
    pub fn deadline(&self) -> Duration {
        self.deadline
    }
}

impl Future for Sleep {
    type Output = ();

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.clock.now() >= self.deadline {
            Poll::Ready(())
        } else {
            self.clock.park(self.deadline, cx.waker());
            Poll::Pending
        }
    }
}
