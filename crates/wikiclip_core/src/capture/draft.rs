//! Capture destinations and the per-capture document draft.
//!
//! # Responsibility
//! - Resolve destination identity (and tags) from settings per capture.
//! - Carry one document through populate, append and submit.
//!
//! # Invariants
//! - Destination titles are template strings, resolved without tab context.
//! - Populate never overwrites an existing document body.
//! - Submit refuses drafts whose title is empty.

use super::{compose, require_template, CaptureError, CaptureResult};
use crate::config::{keys, ConfigStorage};
use crate::model::{TabInfo, Tiddler};
use crate::recode::recode;
use crate::store::{DocumentStore, StoreError};
use log::info;

/// Where a capture lands.
///
/// Inbox and journal read their identity from settings; custom destinations
/// are picked per capture (the original exposes recently used tiddlers in a
/// context menu) and carry an explicit title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Inbox,
    Journal,
    Custom(String),
}

impl Destination {
    /// Resolves the destination title template and tags from settings.
    ///
    /// The title is itself run through the resolver chain, so a journal
    /// configured as `{[D|YYYY]}-{[D|0MM]}-{[D|0DD]}` lands on a fresh
    /// tiddler each day.
    fn resolve(&self, config: &dyn ConfigStorage) -> CaptureResult<(String, String)> {
        let (title_template, tags) = match self {
            Self::Inbox => (
                config.get(keys::INBOX_TIDDLER_TITLE)?.unwrap_or_default(),
                String::new(),
            ),
            Self::Journal => (
                config.get(keys::JOURNAL_TIDDLER_TITLE)?.unwrap_or_default(),
                config.get(keys::JOURNAL_TIDDLER_TAGS)?.unwrap_or_default(),
            ),
            Self::Custom(title) => (title.clone(), String::new()),
        };

        let title = recode(&title_template, None);
        if title.is_empty() {
            return Err(CaptureError::MissingTiddlerTitle);
        }
        Ok((title, tags))
    }
}

/// One capture in flight: a destination identity plus the document to push.
#[derive(Debug, Clone)]
pub struct CaptureDraft {
    title: String,
    tags: String,
    tiddler: Tiddler,
}

impl CaptureDraft {
    /// Creates a draft for `destination`, resolving its templated title.
    ///
    /// # Errors
    /// - `MissingTiddlerTitle` when the resolved title is empty.
    pub fn for_destination(
        config: &dyn ConfigStorage,
        destination: &Destination,
    ) -> CaptureResult<Self> {
        let (title, tags) = destination.resolve(config)?;
        let tiddler = Tiddler::blank(&title);
        Ok(Self {
            title,
            tags,
            tiddler,
        })
    }

    /// Fetches the destination document, creating a blank one on not-found.
    ///
    /// Existing body text is taken as-is; any other store failure
    /// propagates unchanged.
    pub fn populate(&mut self, store: &dyn DocumentStore) -> CaptureResult<()> {
        match store.get_document(&self.title) {
            Ok(tiddler) => {
                self.tiddler = tiddler;
            }
            Err(StoreError::NotFound(_)) => {
                self.tiddler = Tiddler::blank(&self.title);
                if !self.tags.is_empty() {
                    self.tiddler.tags = self.tags.clone();
                }
                info!(
                    "event=populate module=capture status=created title_len={}",
                    self.title.len()
                );
            }
            Err(err) => return Err(err.into()),
        }
        Ok(())
    }

    /// Composes and appends one captured block to the draft body.
    ///
    /// # Errors
    /// - `MissingTiddlerTitle` before any settings or store interaction
    ///   when the draft identity is unset.
    /// - `MissingTemplateKey` from composition.
    pub fn append_text(
        &mut self,
        config: &dyn ConfigStorage,
        captured_text: &str,
        block_type: &str,
        tab_info: Option<&TabInfo>,
    ) -> CaptureResult<()> {
        self.require_title()?;
        let composed = compose(config, captured_text, block_type, tab_info)?;
        self.tiddler.append_text(&composed);
        Ok(())
    }

    /// Composes and appends a bookmark block for the capturing tab.
    ///
    /// The bookmark body is itself a template (`bookmark_markdown`,
    /// typically `{[LINK]}`) rather than captured text.
    pub fn append_bookmark(
        &mut self,
        config: &dyn ConfigStorage,
        tab_info: Option<&TabInfo>,
    ) -> CaptureResult<()> {
        self.require_title()?;
        let prefix = require_template(config, keys::BOOKMARK_PREFIX)?;
        let body = require_template(config, keys::BOOKMARK_MARKDOWN)?;
        let suffix = require_template(config, keys::BOOKMARK_SUFFIX)?;

        let composed = [prefix, body, suffix]
            .map(|piece| recode(&piece, tab_info))
            .concat();
        self.tiddler.append_text(&composed);
        Ok(())
    }

    /// Pushes the draft document to the store.
    pub fn submit(&self, store: &dyn DocumentStore) -> CaptureResult<()> {
        self.require_title()?;
        store.put_document(&self.tiddler)?;
        info!(
            "event=submit module=capture status=ok text_len={}",
            self.tiddler.text.len()
        );
        Ok(())
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn tiddler(&self) -> &Tiddler {
        &self.tiddler
    }

    fn require_title(&self) -> CaptureResult<()> {
        if self.title.is_empty() || self.tiddler.title.is_empty() {
            return Err(CaptureError::MissingTiddlerTitle);
        }
        Ok(())
    }
}
