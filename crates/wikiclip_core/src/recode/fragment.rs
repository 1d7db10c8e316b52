//! Literal-fragment token resolver.
//!
//! Fragments are context-free typographic tokens; `{[F|BR]}` exists so
//! single-line settings inputs can express multi-line prefixes and suffixes.

/// One recognized fragment-token name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentToken {
    LineBreak,
}

impl FragmentToken {
    pub const ALL: &'static [FragmentToken] = &[Self::LineBreak];

    /// Full delimited token as it appears in templates.
    pub fn token(self) -> &'static str {
        match self {
            Self::LineBreak => "{[F|BR]}",
        }
    }

    /// Fixed literal replacement.
    pub fn literal(self) -> &'static str {
        match self {
            Self::LineBreak => "\n",
        }
    }
}

/// Replaces every recognized fragment token in `text`.
pub fn resolve(text: &str) -> String {
    let mut out = text.to_string();
    for token in FragmentToken::ALL {
        let needle = token.token();
        if out.contains(needle) {
            out = out.replace(needle, token.literal());
        }
    }
    out
}
