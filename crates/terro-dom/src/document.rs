//! Document - High-level document API

use crate::{
    DOMRect, DOMTokenList, DomResult, DomTree, ElementData, NodeId, SelectorList,
    StyleDeclaration,
};

/// HTML Document
#[derive(Debug)]
pub struct Document {
    /// The DOM tree
    pub tree: DomTree,
    /// Document URL
    url: String,
    html_element: NodeId,
    head_element: NodeId,
    body_element: NodeId,
}

impl Document {
    /// Create a document with an empty html/head/body skeleton
    pub fn new(url: &str) -> Self {
        let mut tree = DomTree::new();
        let html = tree.create_element("html");
        let head = tree.create_element("head");
        let body = tree.create_element("body");
        tree.append_child(tree.root(), html);
        tree.append_child(html, head);
        tree.append_child(html, body);

        Self {
            tree,
            url: url.to_string(),
            html_element: html,
            head_element: head,
            body_element: body,
        }
    }

    /// Create a document with no structure; call [`Document::finalize`]
    /// after filling the tree.
    pub fn empty(url: &str) -> Self {
        Self {
            tree: DomTree::new(),
            url: url.to_string(),
            html_element: NodeId::NONE,
            head_element: NodeId::NONE,
            body_element: NodeId::NONE,
        }
    }

    /// Locate html/head/body and seed form control values from markup
    pub fn finalize(&mut self) {
        let root = self.tree.root();
        self.html_element = self
            .tree
            .children(root)
            .find(|&id| self.tag_name(id) == Some("html"))
            .unwrap_or(NodeId::NONE);

        let (mut head, mut body) = (NodeId::NONE, NodeId::NONE);
        if self.html_element.is_valid() {
            for child in self.tree.children(self.html_element) {
                match self.tag_name(child) {
                    Some("head") => head = child,
                    Some("body") => body = child,
                    _ => {}
                }
            }
        }
        self.head_element = head;
        self.body_element = body;

        let controls: Vec<NodeId> = self
            .tree
            .descendants(root)
            .filter(|&id| {
                matches!(self.tag_name(id), Some("input" | "textarea" | "select"))
            })
            .collect();
        for id in controls {
            let initial = self.initial_value(id);
            if let Some(el) = self.tree.element_mut(id) {
                el.default_value = initial.clone();
                el.value = initial;
            }
        }

        tracing::debug!(
            url = %self.url,
            nodes = self.tree.len(),
            "document finalized"
        );
    }

    fn initial_value(&self, id: NodeId) -> String {
        match self.tag_name(id) {
            Some("textarea") => self.tree.text_content(id),
            Some("select") => {
                let options: Vec<NodeId> = self
                    .tree
                    .descendants(id)
                    .filter(|&o| self.tag_name(o) == Some("option"))
                    .collect();
                let chosen = options
                    .iter()
                    .copied()
                    .find(|&o| self.has_attribute(o, "selected"))
                    .or_else(|| options.first().copied());
                chosen
                    .map(|o| match self.get_attribute(o, "value") {
                        Some(v) => v.to_string(),
                        None => self.tree.text_content(o).trim().to_string(),
                    })
                    .unwrap_or_default()
            }
            _ => self.get_attribute(id, "value").unwrap_or_default().to_string(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn document_element(&self) -> NodeId {
        self.html_element
    }

    pub fn head(&self) -> NodeId {
        self.head_element
    }

    pub fn body(&self) -> NodeId {
        self.body_element
    }

    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }

    fn element(&self, id: NodeId) -> Option<&ElementData> {
        self.tree.element(id)
    }

    fn element_mut(&mut self, id: NodeId) -> Option<&mut ElementData> {
        self.tree.element_mut(id)
    }

    pub fn tag_name(&self, id: NodeId) -> Option<&str> {
        self.element(id).map(|e| e.tag.as_str())
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.tree
            .descendants(self.tree.root())
            .find(|&n| self.element(n).is_some_and(|e| e.id.as_deref() == Some(id)))
    }

    /// First element in the document matching `selectors`
    pub fn query_selector(&self, selectors: &str) -> DomResult<Option<NodeId>> {
        self.query_selector_in(self.tree.root(), selectors)
    }

    /// All elements in the document matching `selectors`, in tree order
    pub fn query_selector_all(&self, selectors: &str) -> DomResult<Vec<NodeId>> {
        self.query_selector_all_in(self.tree.root(), selectors)
    }

    /// First descendant of `scope` matching `selectors`
    pub fn query_selector_in(&self, scope: NodeId, selectors: &str) -> DomResult<Option<NodeId>> {
        let list = SelectorList::parse(selectors)?;
        Ok(self
            .tree
            .descendants(scope)
            .find(|&n| self.element(n).is_some_and(|e| list.matches(e))))
    }

    /// Descendants of `scope` matching `selectors`, in tree order
    pub fn query_selector_all_in(&self, scope: NodeId, selectors: &str) -> DomResult<Vec<NodeId>> {
        let list = SelectorList::parse(selectors)?;
        Ok(self
            .tree
            .descendants(scope)
            .filter(|&n| self.element(n).is_some_and(|e| list.matches(e)))
            .collect())
    }

    /// Whether `ancestor` contains (or is) `node`
    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        self.tree.is_inclusive_ancestor(ancestor, node)
    }

    pub fn parent_element(&self, id: NodeId) -> Option<NodeId> {
        self.tree.parent_element(id)
    }

    // ------------------------------------------------------------------
    // Attributes and classes
    // ------------------------------------------------------------------

    pub fn get_attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.element(id).and_then(|e| e.get_attr(name))
    }

    pub fn has_attribute(&self, id: NodeId, name: &str) -> bool {
        self.element(id).is_some_and(|e| e.has_attr(name))
    }

    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) {
        if let Some(el) = self.element_mut(id) {
            el.set_attr(name, value);
        }
    }

    pub fn class_list(&self, id: NodeId) -> Option<&DOMTokenList> {
        self.element(id).map(|e| &e.classes)
    }

    pub fn class_list_mut(&mut self, id: NodeId) -> Option<&mut DOMTokenList> {
        self.element_mut(id).map(|e| &mut e.classes)
    }

    /// `classList.contains`; false for non-elements
    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.class_list(id).is_some_and(|c| c.contains(class))
    }

    pub fn add_class(&mut self, id: NodeId, class: &str) {
        if let Some(classes) = self.class_list_mut(id) {
            classes.add(class);
        }
    }

    pub fn remove_class(&mut self, id: NodeId, class: &str) {
        if let Some(classes) = self.class_list_mut(id) {
            classes.remove(class);
        }
    }

    /// `classList.toggle`; `None` for non-elements
    pub fn toggle_class(&mut self, id: NodeId, class: &str, force: Option<bool>) -> Option<bool> {
        self.class_list_mut(id).map(|c| c.toggle(class, force))
    }

    // ------------------------------------------------------------------
    // Style, text, layout, form state
    // ------------------------------------------------------------------

    pub fn style(&self, id: NodeId) -> Option<&StyleDeclaration> {
        self.element(id).map(|e| &e.style)
    }

    pub fn set_style_property(&mut self, id: NodeId, name: &str, value: &str) {
        if let Some(el) = self.element_mut(id) {
            el.style.set_property(name, value);
        }
    }

    pub fn text_content(&self, id: NodeId) -> String {
        self.tree.text_content(id)
    }

    pub fn set_text_content(&mut self, id: NodeId, text: &str) {
        self.tree.set_text_content(id, text);
    }

    /// Layout box in document coordinates
    pub fn layout(&self, id: NodeId) -> Option<DOMRect> {
        self.element(id).map(|e| e.layout)
    }

    pub fn set_layout(&mut self, id: NodeId, rect: DOMRect) {
        if let Some(el) = self.element_mut(id) {
            el.layout = rect;
        }
    }

    /// `offsetTop` relative to the document
    pub fn offset_top(&self, id: NodeId) -> f64 {
        self.layout(id).map_or(0.0, |r| r.y)
    }

    pub fn offset_height(&self, id: NodeId) -> f64 {
        self.layout(id).map_or(0.0, |r| r.height)
    }

    pub fn value(&self, id: NodeId) -> Option<&str> {
        self.element(id).map(|e| e.value.as_str())
    }

    pub fn set_value(&mut self, id: NodeId, value: &str) {
        if let Some(el) = self.element_mut(id) {
            el.value = value.to_string();
        }
    }

    pub fn is_disabled(&self, id: NodeId) -> bool {
        self.element(id).is_some_and(|e| e.disabled)
    }

    pub fn set_disabled(&mut self, id: NodeId, disabled: bool) {
        if let Some(el) = self.element_mut(id) {
            if disabled {
                el.set_attr("disabled", "");
            } else {
                el.remove_attr("disabled");
            }
        }
    }

    /// Restore every form control under `form` to its default value
    pub fn reset_form(&mut self, form: NodeId) {
        let controls: Vec<NodeId> = self.tree.descendants(form).collect();
        for id in controls {
            if let Some(el) = self.element_mut(id) {
                if matches!(el.tag.as_str(), "input" | "textarea" | "select") {
                    el.value = el.default_value.clone();
                }
            }
        }
    }

    /// Create a detached element with the given classes
    pub fn create_element(&mut self, tag: &str, class: &str) -> NodeId {
        let id = self.tree.create_element(tag);
        self.set_attribute(id, "class", class);
        id
    }

    /// Remove an element from its parent
    pub fn remove(&mut self, id: NodeId) {
        self.tree.detach(id);
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new("about:blank")
    }
}
