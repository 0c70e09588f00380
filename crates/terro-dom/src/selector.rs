//! Selectors
//!
//! The subset the site behaviors query with: comma-separated compound
//! selectors built from a tag (or `*`), `.class`, `#id`, `[attr]`,
//! `[attr=value]` and `[attr^=value]`. Combinators are rejected.

use crate::{DomError, DomResult, ElementData};

#[derive(Debug, Clone, PartialEq, Eq)]
enum AttrOp {
    Exists,
    Equals(String),
    Prefix(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct AttrSelector {
    name: String,
    op: AttrOp,
}

/// One compound selector, e.g. `button[type="submit"]`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selector {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attrs: Vec<AttrSelector>,
}

impl Selector {
    pub fn matches(&self, el: &ElementData) -> bool {
        if let Some(tag) = &self.tag {
            if *tag != el.tag {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if el.id.as_deref() != Some(id.as_str()) {
                return false;
            }
        }
        if !self.classes.iter().all(|c| el.classes.contains(c)) {
            return false;
        }
        self.attrs.iter().all(|attr| {
            let value = match attr.name.as_str() {
                "class" if !el.classes.is_empty() => Some(el.classes.value()),
                _ => el.get_attr(&attr.name).map(str::to_string),
            };
            match (&attr.op, value) {
                (_, None) => false,
                (AttrOp::Exists, Some(_)) => true,
                (AttrOp::Equals(want), Some(v)) => v == *want,
                (AttrOp::Prefix(want), Some(v)) => !want.is_empty() && v.starts_with(want.as_str()),
            }
        })
    }
}

/// Comma-separated selector group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorList {
    selectors: Vec<Selector>,
}

impl SelectorList {
    pub fn parse(input: &str) -> DomResult<Self> {
        let selectors = input
            .split(',')
            .map(|part| Parser::new(input, part.trim()).parse_compound())
            .collect::<DomResult<Vec<_>>>()?;
        Ok(Self { selectors })
    }

    pub fn matches(&self, el: &ElementData) -> bool {
        self.selectors.iter().any(|s| s.matches(el))
    }
}

struct Parser<'a> {
    source: &'a str,
    chars: std::iter::Peekable<std::str::Chars<'a>>,
}

impl<'a> Parser<'a> {
    fn new(source: &'a str, part: &'a str) -> Self {
        Self {
            source,
            chars: part.chars().peekable(),
        }
    }

    fn error(&self, reason: &'static str) -> DomError {
        DomError::InvalidSelector {
            selector: self.source.to_string(),
            reason,
        }
    }

    fn parse_compound(mut self) -> DomResult<Selector> {
        let mut selector = Selector::default();
        let mut empty = true;

        match self.chars.peek() {
            Some('*') => {
                self.chars.next();
                empty = false;
            }
            Some(c) if is_ident_char(*c) => {
                selector.tag = Some(self.ident()?.to_ascii_lowercase());
                empty = false;
            }
            _ => {}
        }

        while let Some(c) = self.chars.next() {
            match c {
                '.' => selector.classes.push(self.ident()?),
                '#' => selector.id = Some(self.ident()?),
                '[' => selector.attrs.push(self.attribute()?),
                c if c.is_whitespace() || c == '>' || c == '+' || c == '~' => {
                    return Err(self.error("combinators are not supported"));
                }
                _ => return Err(self.error("unexpected character")),
            }
            empty = false;
        }

        if empty {
            return Err(self.error("empty selector"));
        }
        Ok(selector)
    }

    fn ident(&mut self) -> DomResult<String> {
        let mut out = String::new();
        while let Some(&c) = self.chars.peek() {
            if !is_ident_char(c) {
                break;
            }
            out.push(c);
            self.chars.next();
        }
        if out.is_empty() {
            return Err(self.error("expected identifier"));
        }
        Ok(out)
    }

    fn attribute(&mut self) -> DomResult<AttrSelector> {
        let name = self.ident()?.to_ascii_lowercase();
        let op = match self.chars.next() {
            Some(']') => return Ok(AttrSelector { name, op: AttrOp::Exists }),
            Some('=') => AttrOp::Equals(self.value()?),
            Some('^') if self.chars.next() == Some('=') => AttrOp::Prefix(self.value()?),
            _ => return Err(self.error("unsupported attribute operator")),
        };
        if self.chars.next() != Some(']') {
            return Err(self.error("unterminated attribute selector"));
        }
        Ok(AttrSelector { name, op })
    }

    fn value(&mut self) -> DomResult<String> {
        match self.chars.peek().copied() {
            Some(quote @ ('"' | '\'')) => {
                self.chars.next();
                let mut out = String::new();
                loop {
                    match self.chars.next() {
                        Some(c) if c == quote => return Ok(out),
                        Some(c) => out.push(c),
                        None => return Err(self.error("unterminated string")),
                    }
                }
            }
            _ => self.ident(),
        }
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_'
}
