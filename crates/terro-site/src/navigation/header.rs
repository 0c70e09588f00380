//! Sticky header state

use terro_dom::NodeId;
use terro_runtime::{Event, EventKind, Page};

use crate::behavior::Binding;
use crate::config::HeaderConfig;
use crate::utils::Throttle;
use crate::SiteResult;

/// Adds `scrolled` to `.header` once the page has moved past the offset
#[derive(Debug)]
pub struct StickyHeader {
    header: NodeId,
    offset: f64,
    throttle: Throttle,
}

impl StickyHeader {
    /// Bind and evaluate the current scroll position once
    pub fn bind(page: &mut Page, config: &HeaderConfig) -> SiteResult<Binding<Self>> {
        let Some(header) = page.document().query_selector(".header")? else {
            return Ok(Binding::Skipped("no .header element"));
        };
        let sticky = Self {
            header,
            offset: config.scrolled_offset,
            throttle: Throttle::new(config.throttle()),
        };
        sticky.update(page);
        Ok(Binding::Bound(sticky))
    }

    pub fn element(&self) -> NodeId {
        self.header
    }

    pub fn handle_event(&mut self, page: &mut Page, event: &Event) {
        if event.kind == EventKind::Scroll && self.throttle.ready(page.now()) {
            self.update(page);
        }
    }

    fn update(&self, page: &mut Page) {
        let scrolled = page.scroll_y() > self.offset;
        page.document_mut()
            .toggle_class(self.header, "scrolled", Some(scrolled));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use terro_dom::Document;

    #[test]
    fn test_scrolled_class() {
        let mut doc = Document::new("https://terro.ai/");
        let header = doc.create_element("header", "header");
        doc.tree.append_child(doc.body(), header);
        let mut page = Page::new(doc, 1280.0, 800.0);
        page.set_scroll_y(300.0);

        // Evaluated at bind time, before any scroll event
        let mut sticky = StickyHeader::bind(&mut page, &HeaderConfig::default())
            .unwrap()
            .bound()
            .unwrap();
        assert!(page.document().has_class(header, "scrolled"));

        page.set_scroll_y(50.0);
        sticky.handle_event(&mut page, &Event::scroll());
        assert!(!page.document().has_class(header, "scrolled"));

        page.advance_to(Duration::from_millis(20));
        page.set_scroll_y(51.0);
        sticky.handle_event(&mut page, &Event::scroll());
        assert!(page.document().has_class(header, "scrolled"));
    }
}
