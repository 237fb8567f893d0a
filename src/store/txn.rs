//! # Multi-Map Transactions
//!
//! Staged writes against the document and permission maps, committed as one
//! unit. Every precondition is checked against current state before any write
//! is applied, so a rejected transaction leaves both maps untouched.

use crate::identity::Principal;

use super::document::{DocId, Document, DocumentFields, DocumentStore};
use super::errors::{StoreError, StoreResult};
use super::permission::PermissionStore;

/// A single staged write
#[derive(Debug, Clone)]
pub enum StagedWrite {
    InsertDocument(Document),
    UpdateFields(DocId, DocumentFields),
    SetOwner(DocId, Principal),
    RemoveDocument(DocId),
    GrantView(DocId, Principal),
}

/// An ordered batch of staged writes
#[derive(Debug, Clone, Default)]
pub struct Transaction {
    writes: Vec<StagedWrite>,
}

impl Transaction {
    pub fn new() -> Self {
        Self { writes: Vec::new() }
    }

    pub fn insert_document(mut self, document: Document) -> Self {
        self.writes.push(StagedWrite::InsertDocument(document));
        self
    }

    pub fn update_fields(mut self, id: DocId, fields: DocumentFields) -> Self {
        self.writes.push(StagedWrite::UpdateFields(id, fields));
        self
    }

    pub fn set_owner(mut self, id: DocId, new_owner: Principal) -> Self {
        self.writes.push(StagedWrite::SetOwner(id, new_owner));
        self
    }

    pub fn remove_document(mut self, id: DocId) -> Self {
        self.writes.push(StagedWrite::RemoveDocument(id));
        self
    }

    pub fn grant_view(mut self, id: DocId, viewer: Principal) -> Self {
        self.writes.push(StagedWrite::GrantView(id, viewer));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.writes.is_empty()
    }

    /// Check every precondition, then apply every write.
    ///
    /// The check walks the batch in order, tracking ids inserted or removed
    /// by earlier staged writes, so a batch may reference its own inserts.
    /// Returns before any mutation on the first violated precondition.
    pub fn commit<D, P>(self, documents: &mut D, permissions: &mut P) -> StoreResult<()>
    where
        D: DocumentStore,
        P: PermissionStore,
    {
        self.check(documents)?;

        for write in self.writes {
            match write {
                StagedWrite::InsertDocument(document) => documents.create(document)?,
                StagedWrite::UpdateFields(id, fields) => documents.update_fields(id, fields)?,
                StagedWrite::SetOwner(id, new_owner) => documents.set_owner(id, new_owner)?,
                StagedWrite::RemoveDocument(id) => documents.remove(id)?,
                StagedWrite::GrantView(id, viewer) => permissions.grant(id, viewer),
            }
        }
        Ok(())
    }

    fn check<D: DocumentStore>(&self, documents: &D) -> StoreResult<()> {
        let mut staged_present: Vec<DocId> = Vec::new();
        let mut staged_absent: Vec<DocId> = Vec::new();

        let present = |id: DocId, staged_present: &[DocId], staged_absent: &[DocId], d: &D| {
            if staged_absent.contains(&id) {
                false
            } else {
                staged_present.contains(&id) || d.exists(id)
            }
        };

        for write in &self.writes {
            match write {
                StagedWrite::InsertDocument(document) => {
                    if present(document.id, &staged_present, &staged_absent, documents) {
                        return Err(StoreError::DocumentAlreadyExists(document.id));
                    }
                    staged_absent.retain(|&id| id != document.id);
                    staged_present.push(document.id);
                }
                StagedWrite::UpdateFields(id, _) | StagedWrite::SetOwner(id, _) => {
                    if !present(*id, &staged_present, &staged_absent, documents) {
                        return Err(StoreError::DocumentNotFound(*id));
                    }
                }
                StagedWrite::RemoveDocument(id) => {
                    if !present(*id, &staged_present, &staged_absent, documents) {
                        return Err(StoreError::DocumentNotFound(*id));
                    }
                    staged_present.retain(|&p| p != *id);
                    staged_absent.push(*id);
                }
                StagedWrite::GrantView(_, _) => {}
            }
        }
        Ok(())
    }
}
