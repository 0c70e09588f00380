//! Terro AI site behaviors
//!
//! The interactive layer of the marketing site: scroll-driven animations,
//! navigation, the contact form and expandable widgets, running against a
//! host-driven [`Page`].
//!
//! ```ignore
//! let mut page = terro_site::load_page(html, "https://terro.ai/", 1280.0, 800.0)?;
//! let mut site = Site::with_simulated_submission(&mut page, &SiteConfig::default())?;
//! site.tick(&mut page, Duration::from_millis(16));
//! ```

pub mod animation;
pub mod behavior;
pub mod config;
pub mod error;
pub mod forms;
pub mod logging;
pub mod navigation;
pub mod site;
pub mod utils;
pub mod widgets;

pub use behavior::{Behavior, Binding};
pub use config::SiteConfig;
pub use error::{SiteError, SiteResult};
pub use site::Site;

pub use terro_runtime::{Dispatch, Event, EventKind, Page};

use terro_html::HtmlParser;

/// Parse `html` served from `url` into a page with the given viewport
pub fn load_page(html: &str, url: &str, width: f64, height: f64) -> SiteResult<Page> {
    let document = HtmlParser::new().parse_with_url(html, url)?;
    Ok(Page::new(document, width, height))
}
