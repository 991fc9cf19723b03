//! Trigger selector grammar
//!
//! The menu accepts a small subset of CSS: compound selectors made of an
//! optional tag (or `*`) followed by `.class` / `#id` parts, joined by the
//! descendant combinator (whitespace). Anything else (attribute brackets,
//! pseudo-classes, `>` `+` `~` combinators, selector lists) is rejected.

use crate::shared::errors::{MenuError, Result};

/// One compound selector such as `a.toggle` or `#go`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Compound {
    pub tag: Option<String>,
    pub ids: Vec<String>,
    pub classes: Vec<String>,
}

impl Compound {
    /// Check an element described by its tag, id and classes
    pub fn matches(&self, tag: &str, id: Option<&str>, classes: &[String]) -> bool {
        if let Some(expected) = &self.tag {
            if !expected.eq_ignore_ascii_case(tag) {
                return false;
            }
        }
        if !self.ids.iter().all(|expected| id == Some(expected.as_str())) {
            return false;
        }
        self.classes.iter().all(|expected| classes.contains(expected))
    }
}

/// Descendant chain of compounds, outermost first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    parts: Vec<Compound>,
}

impl Selector {
    pub fn parse(input: &str) -> Result<Self> {
        let parts = input
            .split_whitespace()
            .map(|part| parse_compound(input, part))
            .collect::<Result<Vec<_>>>()?;

        if parts.is_empty() {
            return Err(MenuError::InvalidConfig(
                "trigger_selector must not be empty".to_string(),
            ));
        }
        Ok(Self { parts })
    }

    pub fn parts(&self) -> &[Compound] {
        &self.parts
    }

    /// The compound the matched element itself must satisfy
    pub fn subject(&self) -> &Compound {
        // parse() guarantees at least one part
        &self.parts[self.parts.len() - 1]
    }

    /// Ancestor compounds, outermost first
    pub fn ancestors(&self) -> &[Compound] {
        &self.parts[..self.parts.len() - 1]
    }
}

fn parse_compound(input: &str, part: &str) -> Result<Compound> {
    let invalid = || MenuError::InvalidConfig(format!("unsupported trigger_selector: {:?}", input));

    let mut compound = Compound::default();
    let mut rest = part;

    let tag_len = rest.find(['.', '#']).unwrap_or(rest.len());
    let (tag, tail) = rest.split_at(tag_len);
    if tag == "*" {
        // universal: no tag constraint
    } else if !tag.is_empty() {
        if !is_ident(tag) {
            return Err(invalid());
        }
        compound.tag = Some(tag.to_lowercase());
    }
    rest = tail;

    while let Some(marker) = rest.chars().next() {
        let body = &rest[1..];
        let len = body.find(['.', '#']).unwrap_or(body.len());
        let name = &body[..len];
        if !is_ident(name) {
            return Err(invalid());
        }
        match marker {
            '.' => compound.classes.push(name.to_string()),
            _ => compound.ids.push(name.to_string()),
        }
        rest = &body[len..];
    }

    Ok(compound)
}

fn is_ident(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with(|c: char| c.is_ascii_digit())
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
