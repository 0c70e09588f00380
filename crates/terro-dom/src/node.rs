//! DOM Node
//!
//! Nodes link to each other through `NodeId`s into the tree arena.

use crate::{DOMRect, DOMTokenList, NodeId, StyleDeclaration};

/// DOM Node - Core structure
#[derive(Debug)]
pub struct Node {
    /// Parent node (NONE if root or detached)
    pub parent: NodeId,
    /// First child
    pub first_child: NodeId,
    /// Last child (for O(1) append)
    pub last_child: NodeId,
    /// Previous sibling
    pub prev_sibling: NodeId,
    /// Next sibling
    pub next_sibling: NodeId,
    /// Node-specific data
    pub data: NodeData,
}

impl Node {
    pub(crate) fn new(data: NodeData) -> Self {
        Self {
            parent: NodeId::NONE,
            first_child: NodeId::NONE,
            last_child: NodeId::NONE,
            prev_sibling: NodeId::NONE,
            next_sibling: NodeId::NONE,
            data,
        }
    }

    #[inline]
    pub fn as_element(&self) -> Option<&ElementData> {
        match &self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    #[inline]
    pub fn as_element_mut(&mut self) -> Option<&mut ElementData> {
        match &mut self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match &self.data {
            NodeData::Text(t) => Some(t),
            _ => None,
        }
    }
}

/// Node-specific data
#[derive(Debug)]
pub enum NodeData {
    /// Document root
    Document,
    /// DOCTYPE
    Doctype { name: String },
    /// Element
    Element(ElementData),
    /// Text content
    Text(String),
    /// Comment
    Comment(String),
}

/// Attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

/// Element-specific data
///
/// `class` and `style` are kept structured in `classes` and `style` and are
/// not duplicated in `attrs`.
#[derive(Debug)]
pub struct ElementData {
    /// Lowercase tag name
    pub tag: String,
    pub attrs: Vec<Attribute>,
    /// Cached id attribute
    pub id: Option<String>,
    pub classes: DOMTokenList,
    pub style: StyleDeclaration,
    /// Layout box in document coordinates, written by the host
    pub layout: DOMRect,
    /// Current value of a form control
    pub value: String,
    /// Value restored by a form reset
    pub default_value: String,
    pub disabled: bool,
}

impl ElementData {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            attrs: Vec::new(),
            id: None,
            classes: DOMTokenList::new(),
            style: StyleDeclaration::new(),
            layout: DOMRect::default(),
            value: String::new(),
            default_value: String::new(),
            disabled: false,
        }
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    pub fn has_attr(&self, name: &str) -> bool {
        match name {
            "class" => !self.classes.is_empty(),
            "style" => !self.style.is_empty(),
            _ => self.attrs.iter().any(|a| a.name == name),
        }
    }

    /// Set an attribute, keeping the cached id/class/style/disabled in sync
    pub fn set_attr(&mut self, name: &str, value: &str) {
        let name = name.to_ascii_lowercase();
        match name.as_str() {
            "class" => {
                self.classes = DOMTokenList::from_string(value);
                return;
            }
            "style" => {
                self.style = StyleDeclaration::parse(value);
                return;
            }
            "id" => self.id = Some(value.to_string()),
            "disabled" => self.disabled = true,
            _ => {}
        }

        match self.attrs.iter_mut().find(|a| a.name == name) {
            Some(attr) => attr.value = value.to_string(),
            None => self.attrs.push(Attribute {
                name,
                value: value.to_string(),
            }),
        }
    }

    pub fn remove_attr(&mut self, name: &str) -> bool {
        match name {
            "class" => {
                self.classes = DOMTokenList::new();
                return true;
            }
            "style" => {
                self.style = StyleDeclaration::new();
                return true;
            }
            "id" => self.id = None,
            "disabled" => self.disabled = false,
            _ => {}
        }
        let before = self.attrs.len();
        self.attrs.retain(|a| a.name != name);
        before != self.attrs.len()
    }

    /// input, textarea, select or button
    pub fn is_form_control(&self) -> bool {
        matches!(self.tag.as_str(), "input" | "textarea" | "select" | "button")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cached_attributes() {
        let mut el = ElementData::new("DIV");
        assert_eq!(el.tag, "div");

        el.set_attr("id", "hero");
        el.set_attr("class", "hero hero--dark");
        el.set_attr("data-count", "150");

        assert_eq!(el.id.as_deref(), Some("hero"));
        assert_eq!(el.get_attr("id"), Some("hero"));
        assert!(el.classes.contains("hero--dark"));
        assert!(el.get_attr("class").is_none());
        assert!(el.has_attr("class"));
        assert_eq!(el.get_attr("data-count"), Some("150"));
    }

    #[test]
    fn test_disabled_tracks_attribute() {
        let mut el = ElementData::new("button");
        el.set_attr("disabled", "");
        assert!(el.disabled);
        assert!(el.remove_attr("disabled"));
        assert!(!el.disabled);
        assert!(el.is_form_control());
    }
}
