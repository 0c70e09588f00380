//! Site errors

use terro_dom::DomError;
use terro_html::ParseError;
use terro_runtime::RuntimeError;

/// Errors raised while setting up the site behaviors
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("DOM error: {0}")]
    Dom(#[from] DomError),

    #[error("runtime error: {0}")]
    Runtime(#[from] RuntimeError),

    #[error("HTML parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("invalid site configuration: {0}")]
    Config(#[from] serde_json::Error),
}

pub type SiteResult<T> = Result<T, SiteError>;
