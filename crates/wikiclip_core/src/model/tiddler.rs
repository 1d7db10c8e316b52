//! Tiddler domain model and per-capture context.
//!
//! # Responsibility
//! - Define the wire-shaped tiddler record shared by capture and store code.
//! - Define the ephemeral source-tab context consumed by the recoders.
//!
//! # Invariants
//! - `title` is the tiddler identity; store code refuses empty titles.
//! - Appending to `text` never rewrites or reorders existing content.

use serde::{Deserialize, Serialize};

/// A wiki record in TiddlyWeb JSON shape.
///
/// Only the fields the capture flow reads or writes are modeled; the remote
/// store may attach more (revision, bag, timestamps) and they round-trip
/// outside this struct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tiddler {
    /// Unique identity of the record within the store.
    pub title: String,
    /// Full body text. Captures are appended to the end.
    #[serde(default)]
    pub text: String,
    /// Space-separated tag string, TiddlyWiki style.
    #[serde(default)]
    pub tags: String,
}

impl Tiddler {
    /// Creates an empty tiddler carrying only its identity.
    pub fn blank(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: String::new(),
            tags: String::new(),
        }
    }

    /// Appends already-composed text to the end of the body.
    pub fn append_text(&mut self, composed: &str) {
        self.text.push_str(composed);
    }
}

/// Source-tab metadata for one capture invocation.
///
/// Created fresh per capture and never persisted. Either field may be absent
/// when the browser could not supply it (detached devtools, special pages).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabInfo {
    pub title: Option<String>,
    pub url: Option<String>,
}

impl TabInfo {
    pub fn new(title: Option<String>, url: Option<String>) -> Self {
        Self { title, url }
    }

    /// Returns the title, treating empty strings as absent.
    pub fn title_or_none(&self) -> Option<&str> {
        self.title.as_deref().filter(|value| !value.is_empty())
    }

    /// Returns the URL, treating empty strings as absent.
    pub fn url_or_none(&self) -> Option<&str> {
        self.url.as_deref().filter(|value| !value.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::{TabInfo, Tiddler};

    #[test]
    fn append_preserves_existing_body() {
        let mut tiddler = Tiddler::blank("Inbox");
        tiddler.append_text("first");
        tiddler.append_text("\nsecond");
        assert_eq!(tiddler.text, "first\nsecond");
    }

    #[test]
    fn empty_strings_count_as_absent() {
        let tab = TabInfo::new(Some(String::new()), Some("http://x".to_string()));
        assert_eq!(tab.title_or_none(), None);
        assert_eq!(tab.url_or_none(), Some("http://x"));
    }
}
