//! Core domain logic for wikiclip: capture web content into a
//! TiddlyWiki-style document store through user-configured templates.
//! This crate is the single source of truth for template semantics.

pub mod capture;
pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod recode;
pub mod store;

pub use capture::{compose, CaptureDraft, CaptureError, CaptureResult, Destination};
pub use config::{
    check_templates, ConfigError, ConfigResult, ConfigStorage, SqliteConfigStorage,
    TemplateWarning, SETTINGS_DEFAULTS,
};
pub use logging::{init_logging, logging_status};
pub use model::{TabInfo, Tiddler};
pub use recode::{recode, unresolved_tokens, DateToken, FragmentToken, TabToken};
pub use store::{DocumentStore, InMemoryDocumentStore, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
