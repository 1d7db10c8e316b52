//! Template token substitution ("recoding").
//!
//! # Responsibility
//! - Run every domain resolver over a template string, in one pass each.
//! - Report token-like substrings no domain recognizes, for settings checks.
//!
//! # Invariants
//! - Domains own disjoint token names; resolver order cannot change output.
//! - Resolvers are total: malformed or unknown tokens never raise errors.
//! - Unrecognized tokens survive the full chain byte-for-byte.

use crate::model::TabInfo;
use once_cell::sync::Lazy;
use regex::Regex;

pub mod date;
pub mod fragment;
pub mod tab;

pub use date::DateToken;
pub use fragment::FragmentToken;
pub use tab::TabToken;

static TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\[[^{}]*\]\}").expect("valid token regex"));

/// Runs all three domain resolvers over `text`.
///
/// This is the full substitution pass applied to template prefixes, captured
/// bodies, suffixes and destination titles alike.
pub fn recode(text: &str, tab_info: Option<&TabInfo>) -> String {
    let resolved = date::resolve(text);
    let resolved = tab::resolve(&resolved, tab_info);
    fragment::resolve(&resolved)
}

/// Returns whether `token` (full delimited form) belongs to any domain.
pub fn is_recognized_token(token: &str) -> bool {
    TabToken::ALL.iter().any(|t| t.token() == token)
        || FragmentToken::ALL.iter().any(|t| t.token() == token)
        || DateToken::ALL.iter().any(|t| t.token() == token)
}

/// Scans `text` for token-like substrings no resolver recognizes.
///
/// Used to flag typos in user-edited templates before they silently ride
/// through capture output. Order of first appearance, deduplicated.
pub fn unresolved_tokens(text: &str) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();
    for candidate in TOKEN_RE.find_iter(text) {
        let token = candidate.as_str();
        if !is_recognized_token(token) && !found.iter().any(|seen| seen == token) {
            found.push(token.to_string());
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use super::{is_recognized_token, recode, unresolved_tokens};
    use crate::model::TabInfo;

    #[test]
    fn chain_resolves_all_three_domains() {
        let tab = TabInfo::new(Some("Foo".to_string()), Some("http://x".to_string()));
        let out = recode("{[F|BR]}{[T|SOURCE_LINK]}{[F|BR]}", Some(&tab));
        assert_eq!(out, "\n[[Foo|http://x]]\n");
    }

    #[test]
    fn unknown_tokens_survive_the_full_chain() {
        let text = "{[Z|WHAT]} and {[D|NOPE]}";
        assert_eq!(recode(text, None), text);
    }

    #[test]
    fn scanner_reports_only_unknown_tokens_once() {
        let text = "{[D|YYYY]} {[Z|WHAT]} {[F|BR]} {[Z|WHAT]} {[D|NOPE]}";
        assert_eq!(unresolved_tokens(text), vec!["{[Z|WHAT]}", "{[D|NOPE]}"]);
    }

    #[test]
    fn recognizer_covers_every_domain() {
        assert!(is_recognized_token("{[D|0MM]}"));
        assert!(is_recognized_token("{[T|SOURCE_LINK]}"));
        assert!(is_recognized_token("{[LINK]}"));
        assert!(is_recognized_token("{[F|BR]}"));
        assert!(!is_recognized_token("{[F|HR]}"));
    }
}
