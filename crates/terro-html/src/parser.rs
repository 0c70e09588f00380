//! HTML5 Parser implementation
//!
//! Uses html5ever's RcDom and converts it to the arena DOM.

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData as RcNodeData, RcDom};
use terro_dom::{Document, DomTree, NodeId};

use crate::ParseError;

/// HTML5 parser
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlParser;

impl HtmlParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse HTML string into a Document
    pub fn parse(&self, html: &str) -> Result<Document, ParseError> {
        self.parse_with_url(html, "about:blank")
    }

    /// Parse HTML with the URL the page was served from
    pub fn parse_with_url(&self, html: &str, url: &str) -> Result<Document, ParseError> {
        tracing::debug!("Parsing HTML document: {}", url);

        let dom = parse_document(RcDom::default(), Default::default())
            .from_utf8()
            .read_from(&mut html.as_bytes())?;

        let mut document = Document::empty(url);
        let root = document.tree().root();
        Self::convert_node(&dom.document, document.tree_mut(), root);
        document.finalize();

        Ok(document)
    }

    fn convert_node(handle: &Handle, tree: &mut DomTree, parent: NodeId) {
        match &handle.data {
            RcNodeData::Document => {
                for child in handle.children.borrow().iter() {
                    Self::convert_node(child, tree, parent);
                }
            }
            RcNodeData::Doctype { name, .. } => {
                let id = tree.create_doctype(name);
                tree.append_child(parent, id);
            }
            RcNodeData::Text { contents } => {
                let text = contents.borrow();
                if !text.trim().is_empty() {
                    let id = tree.create_text(&text);
                    tree.append_child(parent, id);
                }
            }
            RcNodeData::Comment { contents } => {
                let id = tree.create_comment(contents);
                tree.append_child(parent, id);
            }
            RcNodeData::Element { name, attrs, .. } => {
                let id = tree.create_element(&name.local);
                if let Some(el) = tree.element_mut(id) {
                    for attr in attrs.borrow().iter() {
                        el.set_attr(&attr.name.local, &attr.value);
                    }
                }
                tree.append_child(parent, id);

                for child in handle.children.borrow().iter() {
                    Self::convert_node(child, tree, id);
                }
            }
            RcNodeData::ProcessingInstruction { .. } => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let html = "<html><head><title>Test</title></head><body><p class=\"lead\">Hello</p></body></html>";
        let doc = HtmlParser::new().parse(html).unwrap();

        assert!(doc.body().is_valid());
        let p = doc.query_selector(".lead").unwrap().unwrap();
        assert_eq!(doc.text_content(p), "Hello");
    }

    #[test]
    fn test_parse_fragment_gets_skeleton() {
        let doc = HtmlParser::new().parse("<div id=\"x\"><span>Text</span></div>").unwrap();
        assert!(doc.head().is_valid());
        assert!(doc.get_element_by_id("x").is_some());
    }

    #[test]
    fn test_form_values_seeded() {
        let html = r#"
            <form id="contact-form">
                <input id="name" value="Ada">
                <textarea id="message">Hello there, Terro</textarea>
                <select id="inquiry-type">
                    <option value="">Select one</option>
                    <option value="demo" selected>Demo</option>
                </select>
            </form>
        "#;
        let doc = HtmlParser::new()
            .parse_with_url(html, "https://terro.ai/contact.html")
            .unwrap();

        let value_of = |id: &str| doc.value(doc.get_element_by_id(id).unwrap()).unwrap().to_string();
        assert_eq!(value_of("name"), "Ada");
        assert_eq!(value_of("message"), "Hello there, Terro");
        assert_eq!(value_of("inquiry-type"), "demo");
        assert_eq!(doc.url(), "https://terro.ai/contact.html");
    }
}
