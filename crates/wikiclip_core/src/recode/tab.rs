//! Tab/source token resolver.
//!
//! # Responsibility
//! - Replace source-reference tokens with values from the capturing tab.
//! - Degrade to documented fallback labels when tab metadata is partial.
//!
//! # Invariants
//! - Without a tab context every token in this domain renders empty.
//! - Empty title/url strings are treated the same as absent fields.
//! - Unrecognized names pass through untouched.

use crate::model::TabInfo;

/// One recognized tab-token name.
///
/// `SourceLink` is the trailing-attribution variant; it renders exactly like
/// `Link` but keeps its own delimiter so suffix templates read distinctly
/// from inline body templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabToken {
    Link,
    Url,
    Title,
    SourceLink,
}

impl TabToken {
    pub const ALL: &'static [TabToken] = &[Self::Link, Self::Url, Self::Title, Self::SourceLink];

    /// Full delimited token as it appears in templates.
    pub fn token(self) -> &'static str {
        match self {
            Self::Link => "{[LINK]}",
            Self::Url => "{[URL]}",
            Self::Title => "{[TITLE]}",
            Self::SourceLink => "{[T|SOURCE_LINK]}",
        }
    }

    /// Renders this token against the capturing tab, if any.
    fn render(self, tab_info: Option<&TabInfo>) -> String {
        let Some(tab) = tab_info else {
            return String::new();
        };
        match self {
            Self::Link | Self::SourceLink => render_link(tab),
            Self::Url => tab
                .url_or_none()
                .unwrap_or("Unknown URL")
                .to_string(),
            Self::Title => tab
                .title_or_none()
                .unwrap_or("Unknown Page Title")
                .to_string(),
        }
    }
}

/// Wiki-markup hyperlink with graceful fallbacks for partial tab metadata.
fn render_link(tab: &TabInfo) -> String {
    match (tab.url_or_none(), tab.title_or_none()) {
        (Some(url), Some(title)) => format!("[[{title}|{url}]]"),
        (Some(url), None) => format!("[[Source|{url}]]"),
        (None, Some(title)) => title.to_string(),
        (None, None) => "Unknown Source".to_string(),
    }
}

/// Replaces every recognized tab token in `text`.
pub fn resolve(text: &str, tab_info: Option<&TabInfo>) -> String {
    let mut out = text.to_string();
    for token in TabToken::ALL {
        let needle = token.token();
        if out.contains(needle) {
            out = out.replace(needle, &token.render(tab_info));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::resolve;
    use crate::model::TabInfo;

    fn tab(title: Option<&str>, url: Option<&str>) -> TabInfo {
        TabInfo::new(title.map(str::to_string), url.map(str::to_string))
    }

    #[test]
    fn without_tab_every_token_vanishes() {
        let text = "{[LINK]} {[URL]} {[TITLE]} {[T|SOURCE_LINK]}";
        assert_eq!(resolve(text, None), "   ");
    }

    #[test]
    fn full_metadata_renders_wiki_link() {
        let tab = tab(Some("Foo"), Some("http://x"));
        assert_eq!(resolve("{[LINK]}", Some(&tab)), "[[Foo|http://x]]");
        assert_eq!(resolve("{[T|SOURCE_LINK]}", Some(&tab)), "[[Foo|http://x]]");
    }

    #[test]
    fn link_fallbacks_follow_partial_metadata() {
        let url_only = tab(None, Some("http://x"));
        assert_eq!(resolve("{[LINK]}", Some(&url_only)), "[[Source|http://x]]");

        let title_only = tab(Some("Foo"), None);
        assert_eq!(resolve("{[LINK]}", Some(&title_only)), "Foo");

        let neither = tab(None, None);
        assert_eq!(resolve("{[LINK]}", Some(&neither)), "Unknown Source");
    }

    #[test]
    fn url_and_title_tokens_have_their_own_fallbacks() {
        let neither = tab(None, None);
        assert_eq!(resolve("{[URL]}", Some(&neither)), "Unknown URL");
        assert_eq!(resolve("{[TITLE]}", Some(&neither)), "Unknown Page Title");
    }

    #[test]
    fn empty_strings_behave_like_absent_fields() {
        let tab = tab(Some(""), Some("http://x"));
        assert_eq!(resolve("{[LINK]}", Some(&tab)), "[[Source|http://x]]");
    }

    #[test]
    fn replacement_is_global_within_one_call() {
        let tab = tab(Some("Foo"), Some("http://x"));
        assert_eq!(
            resolve("{[URL]} and {[URL]}", Some(&tab)),
            "http://x and http://x"
        );
    }
}
