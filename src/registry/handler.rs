//! Registry operations: register, update, transfer, delete.
//!
//! Each operation runs validation and the ownership check first, then
//! commits a single transaction against the stores. The counter advances
//! only after a successful commit.

use crate::identity::{CallContext, Principal};
use crate::store::{
    DocId, Document, DocumentFields, DocumentStore, InMemoryDocumentStore,
    InMemoryPermissionStore, PermissionStore, Transaction,
};
use crate::validation::validate_fields;

use super::counter::DocumentCounter;
use super::errors::{RegistryError, RegistryResult};

/// The document registry: document map, permission map, and id counter.
pub struct Registry {
    documents: InMemoryDocumentStore,
    permissions: InMemoryPermissionStore,
    counter: DocumentCounter,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            documents: InMemoryDocumentStore::new(),
            permissions: InMemoryPermissionStore::new(),
            counter: DocumentCounter::new(),
        }
    }

    /// Register a new document owned by the caller.
    ///
    /// Flow:
    /// 1. Validate all four fields
    /// 2. Reserve the next id
    /// 3. Commit document insert + creator view grant as one transaction
    /// 4. Advance the counter
    pub fn register(&mut self, ctx: &CallContext, fields: DocumentFields) -> RegistryResult<DocId> {
        validate_fields(&fields)?;

        let id = self.counter.peek_next();
        let document = Document {
            id,
            owner: ctx.principal,
            registered_at: ctx.block_height,
            fields,
        };

        Transaction::new()
            .insert_document(document)
            .grant_view(id, ctx.principal)
            .commit(&mut self.documents, &mut self.permissions)?;

        self.counter.advance_to(id);
        Ok(id)
    }

    /// Replace the mutable fields of a document the caller owns.
    ///
    /// Id, owner, and registration height are preserved.
    pub fn update(
        &mut self,
        ctx: &CallContext,
        id: DocId,
        fields: DocumentFields,
    ) -> RegistryResult<()> {
        self.require_owner(ctx, id)?;
        validate_fields(&fields)?;

        Transaction::new()
            .update_fields(id, fields)
            .commit(&mut self.documents, &mut self.permissions)?;
        Ok(())
    }

    /// Transfer ownership to another principal.
    ///
    /// The new owner is taken as a well-formed identity value; it need not
    /// differ from the current owner nor have been seen before.
    pub fn transfer_ownership(
        &mut self,
        ctx: &CallContext,
        id: DocId,
        new_owner: Principal,
    ) -> RegistryResult<()> {
        self.require_owner(ctx, id)?;

        Transaction::new()
            .set_owner(id, new_owner)
            .commit(&mut self.documents, &mut self.permissions)?;
        Ok(())
    }

    /// Delete a document the caller owns.
    ///
    /// Permanent: the id is never reassigned. Permission entries for the id
    /// are left in place.
    pub fn delete(&mut self, ctx: &CallContext, id: DocId) -> RegistryResult<()> {
        self.require_owner(ctx, id)?;

        Transaction::new()
            .remove_document(id)
            .commit(&mut self.documents, &mut self.permissions)?;
        Ok(())
    }

    fn require_owner(&self, ctx: &CallContext, id: DocId) -> RegistryResult<()> {
        let document = self
            .documents
            .get(id)
            .ok_or(crate::store::StoreError::DocumentNotFound(id))?;
        if document.owner != ctx.principal {
            return Err(RegistryError::NotDocumentOwner {
                id,
                caller: ctx.principal,
            });
        }
        Ok(())
    }

    // Read-only surface for external readers

    pub fn document(&self, id: DocId) -> Option<&Document> {
        self.documents.get(id)
    }

    pub fn exists(&self, id: DocId) -> bool {
        self.documents.exists(id)
    }

    /// Stored view flag; written at registration, not consulted as a gate
    /// by any operation.
    pub fn can_view(&self, id: DocId, viewer: Principal) -> bool {
        self.permissions.can_view(id, viewer)
    }

    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    pub fn last_id(&self) -> u64 {
        self.counter.last_id()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
