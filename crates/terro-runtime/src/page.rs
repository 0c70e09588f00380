//! Page - a loaded document plus its window state

use std::rc::Rc;
use std::time::Duration;

use terro_dom::{DOMRect, Document, NodeId};

use crate::{Clock, Location, ManualClock, ScrollManager, ScrollOptions};

/// A loaded page as the site behaviors see it
#[derive(Debug)]
pub struct Page {
    document: Document,
    location: Location,
    scroll: ScrollManager,
    clock: Rc<ManualClock>,
    viewport_width: f64,
    viewport_height: f64,
    focused: Option<NodeId>,
}

impl Page {
    /// Create a page with its own clock starting at zero
    pub fn new(document: Document, viewport_width: f64, viewport_height: f64) -> Self {
        Self::with_clock(document, viewport_width, viewport_height, ManualClock::new())
    }

    pub fn with_clock(
        document: Document,
        viewport_width: f64,
        viewport_height: f64,
        clock: Rc<ManualClock>,
    ) -> Self {
        let location = Location::parse(document.url());
        Self {
            document,
            location,
            scroll: ScrollManager::new(),
            clock,
            viewport_width,
            viewport_height,
            focused: None,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn clock(&self) -> &Rc<ManualClock> {
        &self.clock
    }

    /// `performance.now()`
    pub fn now(&self) -> Duration {
        self.clock.now()
    }

    /// Move page time forward, waking any due sleepers
    pub fn advance_to(&self, now: Duration) {
        self.clock.set(now);
    }

    // ------------------------------------------------------------------
    // Viewport and scrolling
    // ------------------------------------------------------------------

    pub fn viewport_rect(&self) -> DOMRect {
        DOMRect::new(0.0, 0.0, self.viewport_width, self.viewport_height)
    }

    /// Bound scrolling by the total document height
    pub fn set_document_height(&mut self, height: f64) {
        self.scroll
            .set_max_scroll(Some(height - self.viewport_height));
    }

    /// `window.scrollY`
    pub fn scroll_y(&self) -> f64 {
        self.scroll.scroll_y()
    }

    /// Jump to a scroll offset (user scroll reported by the host)
    pub fn set_scroll_y(&mut self, y: f64) {
        self.scroll.set_scroll_y(y);
    }

    /// `window.scrollTo`
    pub fn scroll_to(&mut self, options: ScrollOptions) {
        let now = self.now();
        self.scroll.scroll_to(options, now);
    }

    /// Advance smooth scrolling to the current time; `true` if it moved
    pub fn step_scroll(&mut self) -> bool {
        let now = self.now();
        self.scroll.update(now)
    }

    pub fn scroll_manager(&self) -> &ScrollManager {
        &self.scroll
    }

    /// `getBoundingClientRect()` for an element
    pub fn bounding_client_rect(&self, node: NodeId) -> Option<DOMRect> {
        self.document
            .layout(node)
            .map(|r| r.translated(0.0, -self.scroll_y()))
    }

    // ------------------------------------------------------------------
    // Focus
    // ------------------------------------------------------------------

    pub fn focus(&mut self, node: NodeId) {
        if self.document.tree().element(node).is_some() {
            tracing::trace!(?node, "focus");
            self.focused = Some(node);
        }
    }

    pub fn focused(&self) -> Option<NodeId> {
        self.focused
    }
}
