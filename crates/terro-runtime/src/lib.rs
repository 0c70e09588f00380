//! Terro Runtime
//!
//! The page host the site behaviors run inside. Nothing here reads the
//! wall clock or spawns threads: the embedder pushes events, scroll
//! positions and frame timestamps, which keeps every behavior
//! deterministic under test.

mod clock;
mod events;
mod location;
mod observer;
mod page;
mod scroll;

pub use clock::{Clock, ManualClock, Sleep};
pub use events::{Dispatch, Event, EventKind};
pub use location::Location;
pub use observer::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverOptions, RootMargin};
pub use page::Page;
pub use scroll::{ScrollBehavior, ScrollManager, ScrollOptions};

/// Runtime errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RuntimeError {
    #[error("invalid root margin `{0}`")]
    InvalidRootMargin(String),

    #[error("threshold {0} is outside 0.0..=1.0")]
    InvalidThreshold(f64),
}
