//! In-memory document store used by tests and the CLI probe.

use super::{DocumentStore, StoreError, StoreResult};
use crate::model::Tiddler;
use std::cell::RefCell;
use std::collections::BTreeMap;

/// Title-keyed document store with no transport behind it.
#[derive(Debug, Default)]
pub struct InMemoryDocumentStore {
    docs: RefCell<BTreeMap<String, Tiddler>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored documents.
    pub fn len(&self) -> usize {
        self.docs.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.borrow().is_empty()
    }
}

impl DocumentStore for InMemoryDocumentStore {
    fn get_document(&self, title: &str) -> StoreResult<Tiddler> {
        self.docs
            .borrow()
            .get(title)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(title.to_string()))
    }

    fn put_document(&self, doc: &Tiddler) -> StoreResult<()> {
        if doc.title.is_empty() {
            return Err(StoreError::MissingTitle);
        }
        self.docs
            .borrow_mut()
            .insert(doc.title.clone(), doc.clone());
        Ok(())
    }
}
