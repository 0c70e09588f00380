//! Reveal-on-scroll
//!
//! `.animate-on-scroll` elements get `is-visible` the first time they
//! enter the (bottom-inset) viewport. Siblings are staggered through
//! `data-delay`, which the stylesheet turns into transition delays.

use terro_dom::NodeId;
use terro_runtime::{IntersectionObserver, IntersectionObserverOptions, Page};

use crate::behavior::Binding;
use crate::config::RevealConfig;
use crate::SiteResult;

const SELECTOR: &str = ".animate-on-scroll";
const VISIBLE_CLASS: &str = "is-visible";

#[derive(Debug)]
pub struct Reveal {
    observer: IntersectionObserver,
}

impl Reveal {
    pub fn bind(page: &mut Page, config: &RevealConfig) -> SiteResult<Binding<Self>> {
        let doc = page.document_mut();
        let targets = doc.query_selector_all(SELECTOR)?;
        if targets.is_empty() {
            return Ok(Binding::Skipped("no .animate-on-scroll elements"));
        }

        let options = IntersectionObserverOptions::new(&config.root_margin, &[config.threshold])?;
        let mut observer = IntersectionObserver::new(options);

        for el in targets {
            if !doc.has_attribute(el, "data-delay") {
                if let Some(index) = stagger_index(doc, el)? {
                    if (1..=config.max_stagger).contains(&index) {
                        doc.set_attribute(el, "data-delay", &index.to_string());
                    }
                }
            }
            observer.observe(el);
        }

        tracing::debug!(targets = observer.len(), "reveal observer armed");
        Ok(Binding::Bound(Self { observer }))
    }

    /// Elements still waiting to be revealed
    pub fn pending(&self) -> usize {
        self.observer.len()
    }

    pub fn on_frame(&mut self, page: &mut Page) {
        for entry in self.observer.check(page) {
            if !entry.is_intersecting {
                continue;
            }
            tracing::debug!(node = ?entry.target, "revealed");
            page.document_mut().add_class(entry.target, VISIBLE_CLASS);
            self.observer.unobserve(entry.target);
        }
    }
}

/// Position of `el` among the animated descendants of its parent, when it has any siblings there
fn stagger_index(doc: &terro_dom::Document, el: NodeId) -> SiteResult<Option<usize>> {
    let Some(parent) = doc.parent_element(el) else {
        return Ok(None);
    };
    let siblings = doc.query_selector_all_in(parent, SELECTOR)?;
    if siblings.len() <= 1 {
        return Ok(None);
    }
    Ok(siblings.iter().position(|s| *s == el))
}
