//! Settings key-value storage contracts and seeded defaults.
//!
//! # Responsibility
//! - Name every settings key the capture flow reads.
//! - Seed first-run defaults matching shipped template behavior.
//! - Flag unknown tokens in user-edited templates.
//!
//! # Invariants
//! - Templates are read fresh per capture; edits apply on the next capture.
//! - This layer never interprets template tokens; it only stores text.

use crate::db::DbError;
use crate::recode::unresolved_tokens;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod store;

pub use store::SqliteConfigStorage;

/// Well-known settings keys.
pub mod keys {
    pub const SERVER_URL: &str = "server_url";
    pub const SERVER_USERNAME: &str = "server_username";
    pub const SERVER_PASSWORD: &str = "server_password";
    pub const INBOX_TIDDLER_TITLE: &str = "inbox_tiddler_title";
    pub const JOURNAL_TIDDLER_TITLE: &str = "journal_tiddler_title";
    pub const JOURNAL_TIDDLER_TAGS: &str = "journal_tiddler_tags";
    pub const BOOKMARK_PREFIX: &str = "bookmark_prefix";
    pub const BOOKMARK_MARKDOWN: &str = "bookmark_markdown";
    pub const BOOKMARK_SUFFIX: &str = "bookmark_suffix";

    /// Derived key holding the prefix template for one block type.
    pub fn block_prefix(block_type: &str) -> String {
        format!("block_{block_type}_prefix")
    }

    /// Derived key holding the suffix template for one block type.
    pub fn block_suffix(block_type: &str) -> String {
        format!("block_{block_type}_suffix")
    }
}

/// First-run defaults, seeded once and then owned by the user.
///
/// Titles and block templates are template strings themselves; the journal
/// title is commonly replaced with a dated template like
/// `{[D|YYYY]}-{[D|0MM]}-{[D|0DD]}`.
pub const SETTINGS_DEFAULTS: &[(&str, &str)] = &[
    (keys::SERVER_URL, ""),
    (keys::SERVER_USERNAME, ""),
    (keys::SERVER_PASSWORD, ""),
    (keys::INBOX_TIDDLER_TITLE, "Inbox"),
    (keys::JOURNAL_TIDDLER_TITLE, "Journal"),
    (keys::JOURNAL_TIDDLER_TAGS, "journal"),
    ("block_quickadd_inbox_prefix", "{[F|BR]}{[F|BR]}"),
    ("block_quickadd_inbox_suffix", "{[F|BR]}{[F|BR]}"),
    ("block_quickadd_journal_prefix", "{[F|BR]}{[F|BR]}"),
    ("block_quickadd_journal_suffix", "{[F|BR]}{[F|BR]}"),
    ("block_selection_inbox_prefix", "{[F|BR]}{[F|BR]}<<<{[F|BR]}"),
    (
        "block_selection_inbox_suffix",
        "{[F|BR]}<<<{[T|SOURCE_LINK]}{[F|BR]}{[F|BR]}",
    ),
    (
        "block_selection_journal_prefix",
        "{[F|BR]}{[F|BR]}<<<{[F|BR]}",
    ),
    (
        "block_selection_journal_suffix",
        "{[F|BR]}<<<{[T|SOURCE_LINK]}{[F|BR]}{[F|BR]}",
    ),
    (keys::BOOKMARK_PREFIX, "{[F|BR]}{[F|BR]}"),
    (keys::BOOKMARK_MARKDOWN, "{[LINK]}"),
    (keys::BOOKMARK_SUFFIX, "{[F|BR]}"),
];

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Settings-layer error for storage interaction.
#[derive(Debug)]
pub enum ConfigError {
    Db(DbError),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
        }
    }
}

impl From<DbError> for ConfigError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for ConfigError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Key-value settings storage consumed by the capture flow.
pub trait ConfigStorage {
    /// Returns the value at `key`, or `None` when the key was never written.
    fn get(&self, key: &str) -> ConfigResult<Option<String>>;

    /// Returns every stored key/value pair.
    fn get_all(&self) -> ConfigResult<BTreeMap<String, String>>;

    /// Writes one key/value pair, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> ConfigResult<()>;

    /// Whether server url, username and password are all non-empty.
    fn is_server_configured(&self) -> ConfigResult<bool> {
        let all = self.get_all()?;
        Ok([keys::SERVER_URL, keys::SERVER_USERNAME, keys::SERVER_PASSWORD]
            .iter()
            .all(|key| all.get(*key).is_some_and(|value| !value.is_empty())))
    }
}

/// One template key holding token-like substrings no resolver recognizes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateWarning {
    pub key: String,
    pub unknown_tokens: Vec<String>,
}

/// Scans every template-bearing setting for unknown tokens.
///
/// Unknown tokens are not errors at capture time (they pass through on
/// purpose), but they are almost always typos worth surfacing when the user
/// edits settings.
pub fn check_templates(storage: &dyn ConfigStorage) -> ConfigResult<Vec<TemplateWarning>> {
    let mut warnings = Vec::new();
    for (key, value) in storage.get_all()? {
        if !is_template_key(&key) {
            continue;
        }
        let unknown_tokens = unresolved_tokens(&value);
        if !unknown_tokens.is_empty() {
            warnings.push(TemplateWarning {
                key,
                unknown_tokens,
            });
        }
    }
    Ok(warnings)
}

fn is_template_key(key: &str) -> bool {
    key.starts_with("block_")
        || key.starts_with("bookmark_")
        || key.ends_with("_tiddler_title")
}
