//! # Registry Stores
//!
//! Keyed maps backing the registry: document records by id, viewer
//! permissions by (id, principal). Multi-map mutations go through the
//! transaction wrapper so a failed operation never leaves one map updated
//! and the other not.
//!
//! ## Invariants
//! - ST-IMMUT: a record's id and registration height never change after insert
//! - ST-OWNER: owner changes only through `set_owner`
//! - ST-TXN: a committed transaction applies all staged writes or none

mod document;
mod errors;
mod permission;
mod txn;

pub use document::{DocId, Document, DocumentFields, DocumentStore, InMemoryDocumentStore};
pub use errors::{StoreError, StoreResult};
pub use permission::{InMemoryPermissionStore, Permission, PermissionStore};
pub use txn::{StagedWrite, Transaction};
