//! Parallax backgrounds for `[data-parallax]`

use terro_dom::NodeId;
use terro_runtime::{Event, EventKind, Page};

use super::{format_number, parse_float};
use crate::behavior::Binding;
use crate::config::ParallaxConfig;
use crate::utils::Throttle;
use crate::SiteResult;

#[derive(Debug)]
pub struct Parallax {
    elements: Vec<NodeId>,
    throttle: Throttle,
    default_speed: f64,
}

impl Parallax {
    pub fn bind(page: &mut Page, config: &ParallaxConfig) -> SiteResult<Binding<Self>> {
        let elements = page.document().query_selector_all("[data-parallax]")?;
        if elements.is_empty() {
            return Ok(Binding::Skipped("no [data-parallax] elements"));
        }
        Ok(Binding::Bound(Self {
            elements,
            throttle: Throttle::new(config.throttle()),
            default_speed: config.default_speed,
        }))
    }

    pub fn handle_event(&mut self, page: &mut Page, event: &Event) {
        if event.kind == EventKind::Scroll && self.throttle.ready(page.now()) {
            self.update(page);
        }
    }

    /// Translate every element by `scrollY * speed`. Speeds are re-read on
    /// each update so markup changes take effect on the next scroll.
    pub fn update(&self, page: &mut Page) {
        let scroll_y = page.scroll_y();
        let doc = page.document_mut();
        for &el in &self.elements {
            let speed = doc
                .get_attribute(el, "data-parallax")
                .and_then(parse_float)
                .filter(|s| *s != 0.0 && !s.is_nan())
                .unwrap_or(self.default_speed);
            let transform = format!("translateY({}px)", format_number(scroll_y * speed));
            doc.set_style_property(el, "transform", &transform);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use terro_dom::Document;

    fn transform(page: &Page, el: NodeId) -> Option<String> {
        page.document()
            .style(el)
            .and_then(|s| s.get_property_value("transform"))
            .map(str::to_string)
    }

    #[test]
    fn test_speed_and_throttle() {
        let mut doc = Document::new("https://terro.ai/");
        let slow = doc.create_element("div", "bg");
        let plain = doc.create_element("div", "bg");
        doc.tree.append_child(doc.body(), slow);
        doc.tree.append_child(doc.body(), plain);
        doc.set_attribute(slow, "data-parallax", "0.2");
        doc.set_attribute(plain, "data-parallax", "");

        let mut page = Page::new(doc, 1280.0, 800.0);
        let mut parallax = Parallax::bind(&mut page, &ParallaxConfig::default())
            .unwrap()
            .bound()
            .unwrap();

        page.set_scroll_y(100.0);
        parallax.handle_event(&mut page, &Event::scroll());
        assert_eq!(transform(&page, slow).as_deref(), Some("translateY(20px)"));
        assert_eq!(transform(&page, plain).as_deref(), Some("translateY(50px)"));

        // Inside the 10ms window: dropped
        page.advance_to(Duration::from_millis(5));
        page.set_scroll_y(200.0);
        parallax.handle_event(&mut page, &Event::scroll());
        assert_eq!(transform(&page, plain).as_deref(), Some("translateY(50px)"));

        page.advance_to(Duration::from_millis(10));
        parallax.handle_event(&mut page, &Event::scroll());
        assert_eq!(transform(&page, plain).as_deref(), Some("translateY(100px)"));
    }
}
