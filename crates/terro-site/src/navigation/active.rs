//! Active navigation link highlighting

use terro_dom::{Document, NodeId};
use terro_runtime::{Event, EventKind, Page};

use crate::behavior::Binding;
use crate::config::ScrollSpyConfig;
use crate::utils::Throttle;
use crate::SiteResult;

const NAV_LINKS: &str = ".nav__link, .mobile-nav__link";
const ACTIVE: &str = "active";

/// Mark the links pointing at the current page as active and clear the rest
pub fn highlight_current_page(page: &mut Page) -> SiteResult<usize> {
    let current = page.location().current_page().to_string();
    let doc = page.document_mut();
    let links = doc.query_selector_all(NAV_LINKS)?;

    let mut active = 0;
    for link in links {
        let matches = doc
            .get_attribute(link, "href")
            .and_then(|href| href.rsplit('/').next())
            .is_some_and(|last| last == current);
        doc.toggle_class(link, ACTIVE, Some(matches));
        active += usize::from(matches);
    }
    tracing::debug!(page = %current, active, "highlighted current page");
    Ok(active)
}

/// Section-based highlighting for single-page layouts
#[derive(Debug)]
pub struct ScrollSpy {
    offset: f64,
    throttle: Throttle,
}

impl ScrollSpy {
    /// Bound only when the page has `section[id]` elements
    pub fn bind(page: &mut Page, config: &ScrollSpyConfig) -> SiteResult<Binding<Self>> {
        if page.document().query_selector("section[id]")?.is_none() {
            return Ok(Binding::Skipped("no section[id] elements"));
        }
        Ok(Binding::Bound(Self {
            offset: config.offset,
            throttle: Throttle::new(config.throttle()),
        }))
    }

    pub fn handle_event(&mut self, page: &mut Page, event: &Event) -> SiteResult<()> {
        if event.kind == EventKind::Scroll && self.throttle.ready(page.now()) {
            self.update(page)?;
        }
        Ok(())
    }

    /// Activate the links of the section under the probe line
    pub fn update(&self, page: &mut Page) -> SiteResult<()> {
        let probe = page.scroll_y() + self.offset;
        let doc = page.document_mut();
        let links = doc.query_selector_all(NAV_LINKS)?;

        for section in doc.query_selector_all("section[id]")? {
            let top = doc.offset_top(section);
            let inside = probe >= top && probe < top + doc.offset_height(section);
            let Some(id) = doc.get_attribute(section, "id") else {
                continue;
            };
            let href = format!("#{id}");
            for link in links_to(doc, &links, &href) {
                doc.toggle_class(link, ACTIVE, Some(inside));
            }
        }
        Ok(())
    }
}

fn links_to(doc: &Document, links: &[NodeId], href: &str) -> Vec<NodeId> {
    links
        .iter()
        .copied()
        .filter(|l| doc.get_attribute(*l, "href") == Some(href))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use terro_dom::DOMRect;

    fn nav_page(url: &str, hrefs: &[&str]) -> (Page, Vec<NodeId>) {
        let mut doc = Document::new(url);
        let nav = doc.create_element("nav", "nav");
        doc.tree.append_child(doc.body(), nav);
        let links = hrefs
            .iter()
            .map(|href| {
                let link = doc.create_element("a", "nav__link active");
                doc.set_attribute(link, "href", href);
                doc.tree.append_child(nav, link);
                link
            })
            .collect();
        (Page::new(doc, 1280.0, 800.0), links)
    }

    #[test]
    fn test_current_page_links() {
        let (mut page, links) = nav_page(
            "https://terro.ai/pages/pricing.html",
            &["../index.html", "pricing.html", "/pages/pricing.html", "#faq"],
        );
        assert_eq!(highlight_current_page(&mut page).unwrap(), 2);
        let active: Vec<bool> = links
            .iter()
            .map(|l| page.document().has_class(*l, ACTIVE))
            .collect();
        assert_eq!(active, vec![false, true, true, false]);
    }

    #[test]
    fn test_root_path_is_index() {
        let (mut page, links) = nav_page("https://terro.ai/", &["index.html", "about.html"]);
        highlight_current_page(&mut page).unwrap();
        assert!(page.document().has_class(links[0], ACTIVE));
        assert!(!page.document().has_class(links[1], ACTIVE));
    }

    #[test]
    fn test_scroll_spy_probe_line() {
        let (mut page, links) = nav_page("https://terro.ai/", &["#features", "#pricing"]);
        let doc = page.document_mut();
        for (i, id) in ["features", "pricing"].iter().enumerate() {
            let section = doc.create_element("section", "");
            doc.set_attribute(section, "id", id);
            let body = doc.body();
            doc.tree.append_child(body, section);
            doc.set_layout(section, DOMRect::new(0.0, 800.0 + 1000.0 * i as f64, 1280.0, 1000.0));
        }

        let mut spy = ScrollSpy::bind(&mut page, &ScrollSpyConfig::default())
            .unwrap()
            .bound()
            .unwrap();

        page.set_scroll_y(1700.0);
        spy.handle_event(&mut page, &Event::scroll()).unwrap();
        assert!(!page.document().has_class(links[0], ACTIVE));
        assert!(page.document().has_class(links[1], ACTIVE));

        // Throttled: the next scroll inside 100ms is dropped
        page.set_scroll_y(800.0);
        spy.handle_event(&mut page, &Event::scroll()).unwrap();
        assert!(page.document().has_class(links[1], ACTIVE));

        spy.update(&mut page).unwrap();
        assert!(page.document().has_class(links[0], ACTIVE));
        assert!(!page.document().has_class(links[1], ACTIVE));
    }

    #[test]
    fn test_spy_skipped_without_sections() {
        let (mut page, _) = nav_page("https://terro.ai/", &["#a"]);
        assert!(!ScrollSpy::bind(&mut page, &ScrollSpyConfig::default()).unwrap().is_bound());
    }
}
