//! Behavior plumbing shared by every controller

use terro_runtime::{Dispatch, Event, Page};

/// One bound piece of site interactivity
pub trait Behavior {
    fn name(&self) -> &'static str;

    /// React to an event dispatched to the page
    fn handle_event(&mut self, _page: &mut Page, _event: &Event) -> Dispatch {
        Dispatch::Continue
    }

    /// Per-frame step, run after scrolling has settled for the frame
    fn on_frame(&mut self, _page: &mut Page) {}
}

/// Result of resolving a behavior's targets
#[derive(Debug)]
pub enum Binding<T> {
    Bound(T),
    /// Nothing to bind; the reason is logged
    Skipped(&'static str),
}

impl<T> Binding<T> {
    pub fn is_bound(&self) -> bool {
        matches!(self, Binding::Bound(_))
    }

    pub fn bound(self) -> Option<T> {
        match self {
            Binding::Bound(value) => Some(value),
            Binding::Skipped(_) => None,
        }
    }

    /// Unwrap a binding, logging the skip reason
    pub fn resolved(self, behavior: &'static str) -> Option<T> {
        match self {
            Binding::Bound(value) => {
                tracing::debug!(behavior, "bound");
                Some(value)
            }
            Binding::Skipped(reason) => {
                tracing::debug!(behavior, reason, "skipped");
                None
            }
        }
    }
}
