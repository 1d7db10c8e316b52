//! Capture composition and append use-cases.
//!
//! # Responsibility
//! - Build final appended text from configured prefix/suffix templates.
//! - Drive the populate/append/submit lifecycle for capture destinations.
//!
//! # Invariants
//! - Composition order is fixed: prefix, body, suffix. Never reordered.
//! - Missing template keys fail loudly; blank prefixes are never substituted.
//! - Appends require a destination title before any store interaction.

use crate::config::{keys, ConfigError, ConfigStorage};
use crate::model::TabInfo;
use crate::recode::{recode, unresolved_tokens};
use crate::store::StoreError;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

mod draft;

pub use draft::{CaptureDraft, Destination};

pub type CaptureResult<T> = Result<T, CaptureError>;

/// Capture-flow error for composition preconditions and collaborators.
#[derive(Debug)]
pub enum CaptureError {
    /// A required template key is absent from settings.
    MissingTemplateKey(String),
    /// The destination document identity was never set.
    MissingTiddlerTitle,
    /// Settings storage failure.
    Config(ConfigError),
    /// Document store failure.
    Store(StoreError),
}

impl Display for CaptureError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingTemplateKey(key) => {
                write!(f, "required template setting `{key}` is missing")
            }
            Self::MissingTiddlerTitle => {
                write!(f, "no destination tiddler title has been set")
            }
            Self::Config(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CaptureError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ConfigError> for CaptureError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<StoreError> for CaptureError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Composes the text appended for one captured block.
///
/// Fetches the prefix/suffix templates configured for `block_type`, runs
/// prefix, captured body and suffix each through the full resolver chain,
/// and concatenates them in fixed order with no separators.
///
/// # Errors
/// - `MissingTemplateKey` when either template key is absent.
pub fn compose(
    config: &dyn ConfigStorage,
    captured_text: &str,
    block_type: &str,
    tab_info: Option<&TabInfo>,
) -> CaptureResult<String> {
    let prefix = require_template(config, &keys::block_prefix(block_type))?;
    let suffix = require_template(config, &keys::block_suffix(block_type))?;

    let composed = [prefix.as_str(), captured_text, suffix.as_str()]
        .map(|piece| recode(piece, tab_info))
        .concat();

    info!(
        "event=compose module=capture status=ok block_type={block_type} composed_len={}",
        composed.len()
    );
    Ok(composed)
}

/// Fetches a template setting, warning about unknown tokens it carries.
pub(crate) fn require_template(
    config: &dyn ConfigStorage,
    key: &str,
) -> CaptureResult<String> {
    let template = config
        .get(key)?
        .ok_or_else(|| CaptureError::MissingTemplateKey(key.to_string()))?;

    let unknown = unresolved_tokens(&template);
    if !unknown.is_empty() {
        warn!(
            "event=compose module=capture status=warn key={key} unknown_tokens={}",
            unknown.join(",")
        );
    }
    Ok(template)
}
