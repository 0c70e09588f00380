//! `window.location`

use url::Url;

/// Parsed document location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    href: String,
    pathname: String,
}

impl Location {
    /// Parse a document URL. Unparseable input is treated as a bare path.
    pub fn parse(href: &str) -> Self {
        let pathname = match Url::parse(href) {
            Ok(url) => url.path().to_string(),
            Err(err) => {
                tracing::debug!(%href, %err, "document URL is not absolute");
                let path = href.split(['?', '#']).next().unwrap_or_default();
                if path.starts_with('/') { path.to_string() } else { format!("/{path}") }
            }
        };
        Self {
            href: href.to_string(),
            pathname,
        }
    }

    pub fn href(&self) -> &str {
        &self.href
    }

    pub fn pathname(&self) -> &str {
        &self.pathname
    }

    /// Final path segment, with the site root mapped to `index.html`
    pub fn current_page(&self) -> &str {
        match self.pathname.rsplit('/').next() {
            Some("") | None => "index.html",
            Some(page) => page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_page() {
        assert_eq!(Location::parse("https://terro.ai/about.html").current_page(), "about.html");
        assert_eq!(Location::parse("https://terro.ai/").current_page(), "index.html");
        assert_eq!(Location::parse("https://terro.ai/docs/").current_page(), "index.html");
        assert_eq!(
            Location::parse("https://terro.ai/use-cases.html?ref=nav#pricing").current_page(),
            "use-cases.html"
        );
    }

    #[test]
    fn test_relative_href() {
        let loc = Location::parse("technology.html#stack");
        assert_eq!(loc.pathname(), "/technology.html");
        assert_eq!(loc.current_page(), "technology.html");
    }
}
