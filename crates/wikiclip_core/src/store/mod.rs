//! Document-store boundary contracts.
//!
//! # Responsibility
//! - Define the get/put surface the capture flow persists through.
//! - Keep remote-outcome shape (status + message) visible to callers.
//!
//! # Invariants
//! - Documents with an empty title are refused before any put.
//! - Not-found is a distinct outcome so capture can create blank documents.

use crate::model::Tiddler;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod memory;

pub use memory::InMemoryDocumentStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-layer error for document fetch/persist operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No document exists under this title.
    NotFound(String),
    /// A document without a title cannot be addressed in the store.
    MissingTitle,
    /// The backing store rejected or failed the request.
    Remote {
        status: Option<u16>,
        message: String,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(title) => write!(f, "document not found: `{title}`"),
            Self::MissingTitle => write!(f, "document has no title"),
            Self::Remote { status, message } => match status {
                Some(code) => write!(f, "store request failed ({code}): {message}"),
                None => write!(f, "store request failed: {message}"),
            },
        }
    }
}

impl Error for StoreError {}

/// Capability surface for one document destination store.
///
/// Implementations own transport and authentication entirely; the capture
/// flow only ever addresses documents by title and pushes whole records.
pub trait DocumentStore {
    /// Fetches the document stored under `title`.
    fn get_document(&self, title: &str) -> StoreResult<Tiddler>;

    /// Persists `doc`, replacing any record under the same title.
    fn put_document(&self, doc: &Tiddler) -> StoreResult<()>;
}
