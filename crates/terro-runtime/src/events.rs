//! DOM events pushed in by the host

use terro_dom::{Document, NodeId};

/// Event types the site behaviors listen for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    Input,
    Blur,
    Submit,
    KeyDown,
    Scroll,
}

/// A dispatched event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub kind: EventKind,
    /// Innermost element the event was fired at
    pub target: Option<NodeId>,
    /// `KeyboardEvent.key` for key events
    pub key: Option<String>,
}

impl Event {
    fn at(kind: EventKind, target: NodeId) -> Self {
        Self {
            kind,
            target: Some(target),
            key: None,
        }
    }

    pub fn click(target: NodeId) -> Self {
        Self::at(EventKind::Click, target)
    }

    pub fn input(target: NodeId) -> Self {
        Self::at(EventKind::Input, target)
    }

    pub fn blur(target: NodeId) -> Self {
        Self::at(EventKind::Blur, target)
    }

    pub fn submit(form: NodeId) -> Self {
        Self::at(EventKind::Submit, form)
    }

    /// Document-level key press
    pub fn key_down(key: &str) -> Self {
        Self {
            kind: EventKind::KeyDown,
            target: None,
            key: Some(key.to_string()),
        }
    }

    /// Window scroll
    pub fn scroll() -> Self {
        Self {
            kind: EventKind::Scroll,
            target: None,
            key: None,
        }
    }

    /// Whether a listener on `node` sees this event while it bubbles
    pub fn reaches(&self, doc: &Document, node: NodeId) -> bool {
        self.target.is_some_and(|t| doc.contains(node, t))
    }

    /// Event of `kind` that bubbles through `node`
    pub fn is(&self, kind: EventKind, doc: &Document, node: NodeId) -> bool {
        self.kind == kind && self.reaches(doc, node)
    }
}

/// Outcome of a listener
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dispatch {
    #[default]
    Continue,
    PreventDefault,
}

impl Dispatch {
    /// Combine two listener outcomes; prevention is sticky
    pub fn merge(self, other: Dispatch) -> Dispatch {
        if self == Dispatch::PreventDefault || other == Dispatch::PreventDefault {
            Dispatch::PreventDefault
        } else {
            Dispatch::Continue
        }
    }

    pub fn default_prevented(self) -> bool {
        self == Dispatch::PreventDefault
    }
}
