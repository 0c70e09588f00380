//! Terro HTML Parser
//!
//! HTML5 parsing built on html5ever. Pages are parsed into an `RcDom`
//! and converted into the arena-backed `terro_dom::Document`.

mod parser;

pub use parser::HtmlParser;

use terro_dom::Document;

/// Parse an HTML string into a finalized document
pub fn parse(html: &str) -> Result<Document, ParseError> {
    HtmlParser::new().parse(html)
}

/// Parse error
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("failed to read HTML input: {0}")]
    Io(#[from] std::io::Error),
}
