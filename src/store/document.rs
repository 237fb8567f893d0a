//! # Document Records
//!
//! The `estate-documents` map: document metadata keyed by id. The trait keeps
//! the registry independent of the backing map so external readers can swap
//! in a durable implementation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::identity::Principal;

use super::errors::{StoreError, StoreResult};

/// Document identifier, assigned once, never reused
pub type DocId = u64;

/// Mutable document fields, replaced as a unit by update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentFields {
    pub title: String,
    pub filesize: u64,
    pub description: String,
    /// Insertion order preserved; duplicates permitted
    pub tags: Vec<String>,
}

/// A registered document record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocId,
    pub owner: Principal,
    /// Block height current at creation; immutable after insert
    pub registered_at: u64,
    #[serde(flatten)]
    pub fields: DocumentFields,
}

/// Trait for document record persistence
pub trait DocumentStore {
    /// Insert a new record; the id must not be present
    fn create(&mut self, document: Document) -> StoreResult<()>;

    /// Get a record by id
    fn get(&self, id: DocId) -> Option<&Document>;

    /// Whether a record exists for the id
    fn exists(&self, id: DocId) -> bool;

    /// Replace title/filesize/description/tags in place, preserving
    /// id, owner, and registration height
    fn update_fields(&mut self, id: DocId, fields: DocumentFields) -> StoreResult<()>;

    /// Replace the owner only
    fn set_owner(&mut self, id: DocId, new_owner: Principal) -> StoreResult<()>;

    /// Delete the record. Permission entries for the id are not touched.
    fn remove(&mut self, id: DocId) -> StoreResult<()>;

    /// Number of live records
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory document store.
///
/// `BTreeMap` keeps iteration in id order for external readers.
#[derive(Debug, Default)]
pub struct InMemoryDocumentStore {
    documents: BTreeMap<DocId, Document>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self {
            documents: BTreeMap::new(),
        }
    }
}

impl DocumentStore for InMemoryDocumentStore {
    fn create(&mut self, document: Document) -> StoreResult<()> {
        if self.documents.contains_key(&document.id) {
            return Err(StoreError::DocumentAlreadyExists(document.id));
        }
        self.documents.insert(document.id, document);
        Ok(())
    }

    fn get(&self, id: DocId) -> Option<&Document> {
        self.documents.get(&id)
    }

    fn exists(&self, id: DocId) -> bool {
        self.documents.contains_key(&id)
    }

    fn update_fields(&mut self, id: DocId, fields: DocumentFields) -> StoreResult<()> {
        let document = self
            .documents
            .get_mut(&id)
            .ok_or(StoreError::DocumentNotFound(id))?;
        document.fields = fields;
        Ok(())
    }

    fn set_owner(&mut self, id: DocId, new_owner: Principal) -> StoreResult<()> {
        let document = self
            .documents
            .get_mut(&id)
            .ok_or(StoreError::DocumentNotFound(id))?;
        document.owner = new_owner;
        Ok(())
    }

    fn remove(&mut self, id: DocId) -> StoreResult<()> {
        self.documents
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::DocumentNotFound(id))
    }

    fn len(&self) -> usize {
        self.documents.len()
    }
}
