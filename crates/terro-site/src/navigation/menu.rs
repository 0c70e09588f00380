//! Mobile navigation drawer

use terro_dom::NodeId;
use terro_runtime::{Event, EventKind, Page};

use crate::behavior::Binding;
use crate::SiteResult;

const OPEN: &str = "open";

/// Menu button, slide-in panel and backdrop
#[derive(Debug)]
pub struct MobileMenu {
    button: Option<NodeId>,
    panel: Option<NodeId>,
    overlay: Option<NodeId>,
    links: Vec<NodeId>,
}

impl MobileMenu {
    pub fn bind(page: &mut Page) -> SiteResult<Binding<Self>> {
        let doc = page.document();
        let menu = Self {
            button: doc.query_selector(".header__menu-btn")?,
            panel: doc.query_selector(".mobile-nav")?,
            overlay: doc.query_selector(".mobile-nav-overlay")?,
            links: doc.query_selector_all(".mobile-nav__link")?,
        };
        if menu.button.is_none() && menu.panel.is_none() && menu.overlay.is_none() {
            return Ok(Binding::Skipped("no mobile menu markup"));
        }
        Ok(Binding::Bound(menu))
    }

    /// Open state lives in the panel's class list
    pub fn is_open(&self, page: &Page) -> bool {
        self.panel
            .is_some_and(|panel| page.document().has_class(panel, OPEN))
    }

    pub fn toggle(&self, page: &mut Page) {
        let open = !self.is_open(page);
        self.set_open(page, open);
    }

    /// Close the menu; closing a closed menu is a no-op
    pub fn close(&self, page: &mut Page) {
        self.set_open(page, false);
    }

    fn set_open(&self, page: &mut Page, open: bool) {
        tracing::trace!(open, "mobile menu");
        let doc = page.document_mut();
        if let Some(button) = self.button {
            doc.toggle_class(button, "active", Some(open));
        }
        if let Some(panel) = self.panel {
            doc.toggle_class(panel, OPEN, Some(open));
        }
        if let Some(overlay) = self.overlay {
            doc.toggle_class(overlay, OPEN, Some(open));
        }
        let body = doc.body();
        doc.toggle_class(body, "menu-open", Some(open));
    }

    pub fn handle_event(&self, page: &mut Page, event: &Event) {
        let doc = page.document();
        match event.kind {
            EventKind::Click => {
                if self.button.is_some_and(|b| event.reaches(doc, b)) {
                    self.toggle(page);
                } else if self.overlay.is_some_and(|o| event.reaches(doc, o))
                    || self.links.iter().any(|l| event.reaches(doc, *l))
                {
                    self.close(page);
                }
            }
            EventKind::KeyDown => {
                if event.key.as_deref() == Some("Escape") && self.is_open(page) {
                    self.close(page);
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use terro_dom::Document;

    struct Fixture {
        page: Page,
        button: NodeId,
        panel: NodeId,
        overlay: NodeId,
        link: NodeId,
    }

    fn fixture() -> Fixture {
        let mut doc = Document::new("https://terro.ai/");
        let body = doc.body();
        let button = doc.create_element("button", "header__menu-btn");
        let panel = doc.create_element("nav", "mobile-nav");
        let overlay = doc.create_element("div", "mobile-nav-overlay");
        let link = doc.create_element("a", "mobile-nav__link");
        doc.tree.append_child(body, button);
        doc.tree.append_child(body, panel);
        doc.tree.append_child(panel, link);
        doc.tree.append_child(body, overlay);
        Fixture {
            page: Page::new(doc, 375.0, 700.0),
            button,
            panel,
            overlay,
            link,
        }
    }

    #[test]
    fn test_toggle_and_close_paths() {
        let Fixture { mut page, button, panel, overlay, link } = fixture();
        let menu = MobileMenu::bind(&mut page).unwrap().bound().unwrap();
        let body = page.document().body();

        menu.handle_event(&mut page, &Event::click(button));
        assert!(menu.is_open(&page));
        let doc = page.document();
        assert!(doc.has_class(button, "active"));
        assert!(doc.has_class(overlay, "open"));
        assert!(doc.has_class(body, "menu-open"));

        menu.handle_event(&mut page, &Event::click(overlay));
        assert!(!menu.is_open(&page));
        assert!(!page.document().has_class(body, "menu-open"));

        menu.handle_event(&mut page, &Event::click(button));
        menu.handle_event(&mut page, &Event::click(link));
        assert!(!page.document().has_class(panel, "open"));

        menu.handle_event(&mut page, &Event::click(button));
        menu.handle_event(&mut page, &Event::key_down("Enter"));
        assert!(menu.is_open(&page));
        menu.handle_event(&mut page, &Event::key_down("Escape"));
        assert!(!menu.is_open(&page));

        // Closing twice leaves the same state
        menu.close(&mut page);
        assert!(!page.document().has_class(button, "active"));
    }

    #[test]
    fn test_button_click_toggles_closed() {
        let Fixture { mut page, button, .. } = fixture();
        let menu = MobileMenu::bind(&mut page).unwrap().bound().unwrap();
        menu.handle_event(&mut page, &Event::click(button));
        menu.handle_event(&mut page, &Event::click(button));
        assert!(!menu.is_open(&page));
    }
}
