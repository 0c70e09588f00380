//! Terro DOM - Document Object Model
//!
//! Arena-backed DOM tree that the site behaviors read and mutate.
//! The host supplies layout boxes; everything else (classes, attributes,
//! inline style, text, form values) lives here.

mod classlist;
mod document;
mod geometry;
mod node;
mod selector;
mod style;
mod tree;

pub use classlist::DOMTokenList;
pub use document::Document;
pub use geometry::DOMRect;
pub use node::{Attribute, ElementData, Node, NodeData};
pub use selector::{Selector, SelectorList};
pub use style::StyleDeclaration;
pub use tree::DomTree;

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Root node ID
    pub const ROOT: NodeId = NodeId(0);
    /// Sentinel for "no node"
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Whether this id points at a node
    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::NONE
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// DOM errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    #[error("invalid selector `{selector}`: {reason}")]
    InvalidSelector { selector: String, reason: &'static str },
}

/// Result type for DOM operations
pub type DomResult<T> = Result<T, DomError>;
