//! Navigation controller
//!
//! Mobile menu, sticky header, smooth anchor scrolling and active-link
//! highlighting. Parts bind independently against whatever markup the
//! page has.

mod active;
mod anchors;
mod header;
mod menu;

pub use active::{highlight_current_page, ScrollSpy};
pub use anchors::AnchorScroll;
pub use header::StickyHeader;
pub use menu::MobileMenu;

use terro_runtime::{Dispatch, Event, Page};

use crate::behavior::{Behavior, Binding};
use crate::config::SiteConfig;
use crate::SiteResult;

#[derive(Debug)]
pub struct Navigation {
    menu: Option<MobileMenu>,
    header: Option<StickyHeader>,
    anchors: Option<AnchorScroll>,
    spy: Option<ScrollSpy>,
}

impl Navigation {
    pub fn bind(page: &mut Page, config: &SiteConfig) -> SiteResult<Binding<Self>> {
        let menu = MobileMenu::bind(page)?.resolved("mobile menu");
        let header = StickyHeader::bind(page, &config.header)?.resolved("sticky header");
        let header_el = header.as_ref().map(StickyHeader::element);
        let anchors = AnchorScroll::bind(page, header_el, &config.anchors)?.resolved("anchors");
        let highlighted = highlight_current_page(page)?;
        let spy = ScrollSpy::bind(page, &config.scroll_spy)?.resolved("scroll spy");

        if menu.is_none() && header.is_none() && anchors.is_none() && spy.is_none() && highlighted == 0 {
            return Ok(Binding::Skipped("no navigation markup"));
        }
        Ok(Binding::Bound(Self {
            menu,
            header,
            anchors,
            spy,
        }))
    }

    pub fn menu(&self) -> Option<&MobileMenu> {
        self.menu.as_ref()
    }
}

impl Behavior for Navigation {
    fn name(&self) -> &'static str {
        "navigation"
    }

    fn handle_event(&mut self, page: &mut Page, event: &Event) -> Dispatch {
        if let Some(menu) = &self.menu {
            menu.handle_event(page, event);
        }
        if let Some(header) = &mut self.header {
            header.handle_event(page, event);
        }

        let mut dispatch = Dispatch::Continue;
        if let Some(anchors) = &self.anchors {
            if anchors.handle_event(page, event).is_some() {
                dispatch = Dispatch::PreventDefault;
                if let Some(menu) = &self.menu {
                    menu.close(page);
                }
            }
        }

        if let Some(spy) = &mut self.spy {
            if let Err(err) = spy.handle_event(page, event) {
                tracing::warn!(%err, "scroll spy update failed");
            }
        }
        dispatch
    }
}
