//! Smooth scrolling for in-page anchors

use terro_dom::NodeId;
use terro_runtime::{Event, EventKind, Page, ScrollBehavior, ScrollOptions};

use crate::behavior::Binding;
use crate::config::AnchorsConfig;
use crate::SiteResult;

/// `a[href^="#"]` links present when the page was bound
#[derive(Debug)]
pub struct AnchorScroll {
    anchors: Vec<NodeId>,
    header: Option<NodeId>,
    fallback_header_height: f64,
}

impl AnchorScroll {
    pub fn bind(
        page: &mut Page,
        header: Option<NodeId>,
        config: &AnchorsConfig,
    ) -> SiteResult<Binding<Self>> {
        let anchors = page.document().query_selector_all(r##"a[href^="#"]"##)?;
        if anchors.is_empty() {
            return Ok(Binding::Skipped("no in-page anchors"));
        }
        Ok(Binding::Bound(Self {
            anchors,
            header,
            fallback_header_height: config.fallback_header_height,
        }))
    }

    /// Start a smooth scroll for a click on one of the anchors.
    ///
    /// Returns the scroll target when the click was taken over; the caller
    /// must then prevent the default navigation.
    pub fn handle_event(&self, page: &mut Page, event: &Event) -> Option<f64> {
        if event.kind != EventKind::Click {
            return None;
        }
        let doc = page.document();
        let anchor = self.anchors.iter().copied().find(|a| event.reaches(doc, *a))?;
        let href = doc.get_attribute(anchor, "href")?;
        if href == "#" {
            return None;
        }
        let target = doc.get_element_by_id(href.strip_prefix('#')?)?;

        let top = doc.offset_top(target) - self.header_height(page);
        tracing::debug!(href, top, "anchor scroll");
        page.scroll_to(ScrollOptions {
            top,
            behavior: ScrollBehavior::Smooth,
        });
        Some(top)
    }

    fn header_height(&self, page: &Page) -> f64 {
        let height = self
            .header
            .map(|h| page.document().offset_height(h))
            .unwrap_or(0.0);
        if height > 0.0 {
            height
        } else {
            self.fallback_header_height
        }
    }
}
