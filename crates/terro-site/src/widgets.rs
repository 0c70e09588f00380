//! Expand/collapse widgets: FAQ accordions and use-case cards

use terro_dom::NodeId;
use terro_runtime::{Dispatch, Event, EventKind, Page};

use crate::behavior::{Behavior, Binding};
use crate::SiteResult;

const OPEN: &str = "open";

#[derive(Debug)]
struct AccordionItem {
    item: NodeId,
    header: NodeId,
}

/// Every `.accordion` on the page; at most one item per accordion is open
#[derive(Debug)]
pub struct Accordions {
    groups: Vec<Vec<AccordionItem>>,
}

impl Accordions {
    pub fn bind(page: &mut Page) -> SiteResult<Binding<Self>> {
        let doc = page.document();
        let mut groups = Vec::new();
        for accordion in doc.query_selector_all(".accordion")? {
            let mut items = Vec::new();
            for item in doc.query_selector_all_in(accordion, ".accordion__item")? {
                if let Some(header) = doc.query_selector_in(item, ".accordion__header")? {
                    items.push(AccordionItem { item, header });
                }
            }
            groups.push(items);
        }
        if groups.is_empty() {
            return Ok(Binding::Skipped("no .accordion elements"));
        }
        Ok(Binding::Bound(Self { groups }))
    }

    fn toggle(page: &mut Page, group: &[AccordionItem], clicked: NodeId) {
        let doc = page.document_mut();
        let was_open = doc.has_class(clicked, OPEN);
        for entry in group {
            doc.remove_class(entry.item, OPEN);
        }
        if !was_open {
            doc.add_class(clicked, OPEN);
        }
    }
}

impl Behavior for Accordions {
    fn name(&self) -> &'static str {
        "accordions"
    }

    fn handle_event(&mut self, page: &mut Page, event: &Event) -> Dispatch {
        if event.kind != EventKind::Click {
            return Dispatch::Continue;
        }
        for group in &self.groups {
            let clicked = group
                .iter()
                .find(|entry| event.reaches(page.document(), entry.header))
                .map(|entry| entry.item);
            if let Some(item) = clicked {
                Self::toggle(page, group, item);
            }
        }
        Dispatch::Continue
    }
}

/// `.use-case-card` elements whose header toggles `open`
#[derive(Debug)]
pub struct UseCaseCards {
    cards: Vec<(NodeId, NodeId)>,
}

impl UseCaseCards {
    pub fn bind(page: &mut Page) -> SiteResult<Binding<Self>> {
        let doc = page.document();
        let mut cards = Vec::new();
        for card in doc.query_selector_all(".use-case-card")? {
            if let Some(header) = doc.query_selector_in(card, ".use-case-card__header")? {
                cards.push((card, header));
            }
        }
        if cards.is_empty() {
            return Ok(Binding::Skipped("no .use-case-card headers"));
        }
        Ok(Binding::Bound(Self { cards }))
    }
}

impl Behavior for UseCaseCards {
    fn name(&self) -> &'static str {
        "use-case cards"
    }

    fn handle_event(&mut self, page: &mut Page, event: &Event) -> Dispatch {
        if event.kind != EventKind::Click {
            return Dispatch::Continue;
        }
        for &(card, header) in &self.cards {
            if event.reaches(page.document(), header) {
                page.document_mut().toggle_class(card, OPEN, None);
            }
        }
        Dispatch::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use terro_dom::Document;

    #[test]
    fn test_accordion_single_open() {
        let mut doc = Document::new("https://terro.ai/faq.html");
        let accordion = doc.create_element("div", "accordion");
        doc.tree.append_child(doc.body(), accordion);
        let mut headers = Vec::new();
        let mut items = Vec::new();
        for _ in 0..3 {
            let item = doc.create_element("div", "accordion__item");
            let header = doc.create_element("button", "accordion__header");
            let label = doc.create_element("span", "accordion__title");
            doc.tree.append_child(accordion, item);
            doc.tree.append_child(item, header);
            doc.tree.append_child(header, label);
            items.push(item);
            headers.push(label);
        }
        let mut page = Page::new(doc, 1280.0, 800.0);
        let mut accordions = Accordions::bind(&mut page).unwrap().bound().unwrap();
        let open = |page: &Page| -> Vec<bool> {
            items.iter().map(|i| page.document().has_class(*i, OPEN)).collect()
        };

        accordions.handle_event(&mut page, &Event::click(headers[0]));
        assert_eq!(open(&page), vec![true, false, false]);

        accordions.handle_event(&mut page, &Event::click(headers[2]));
        assert_eq!(open(&page), vec![false, false, true]);

        accordions.handle_event(&mut page, &Event::click(headers[2]));
        assert_eq!(open(&page), vec![false, false, false]);
    }

    #[test]
    fn test_use_case_card_toggle() {
        let mut doc = Document::new("https://terro.ai/");
        let card = doc.create_element("article", "use-case-card");
        let header = doc.create_element("div", "use-case-card__header");
        let body = doc.create_element("div", "use-case-card__body");
        doc.tree.append_child(doc.body(), card);
        doc.tree.append_child(card, header);
        doc.tree.append_child(card, body);
        let mut page = Page::new(doc, 1280.0, 800.0);
        let mut cards = UseCaseCards::bind(&mut page).unwrap().bound().unwrap();

        cards.handle_event(&mut page, &Event::click(header));
        assert!(page.document().has_class(card, OPEN));
        cards.handle_event(&mut page, &Event::click(body));
        assert!(page.document().has_class(card, OPEN));
        cards.handle_event(&mut page, &Event::click(header));
        assert!(!page.document().has_class(card, OPEN));
    }
}
