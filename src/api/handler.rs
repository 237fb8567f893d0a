//! Registry handler for the JSON operation surface.
//!
//! Orchestrates the registry behind a single global mutex and records one
//! log line plus one audit record per operation attempt.

use std::sync::{Mutex, PoisonError};

use serde_json::json;

use crate::identity::{CallContext, Principal};
use crate::observability::{AuditAction, AuditLog, AuditRecord, Logger, MemoryAuditLog};
use crate::registry::Registry;
use crate::store::{DocId, Document};

use super::errors::{ApiError, ApiResult};
use super::request::Request;
use super::response::Response;

/// API handler with global execution lock
pub struct RegistryHandler {
    /// Global mutex for serialized execution
    registry: Mutex<Registry>,
    audit: MemoryAuditLog,
}

impl RegistryHandler {
    pub fn new() -> Self {
        Self {
            registry: Mutex::new(Registry::new()),
            audit: MemoryAuditLog::new(),
        }
    }

    /// Handle a raw JSON request string on behalf of the given context
    pub fn handle(&self, json_request: &str, ctx: &CallContext) -> Response {
        // Acquire global lock at request entry; held for the whole operation
        let mut registry = self
            .registry
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let request = match Request::parse(json_request) {
            Ok(r) => r,
            Err(e) => {
                Logger::warn("REQUEST_REJECTED", &[("code", e.code())]);
                return Response::error(&e);
            }
        };

        let (action, doc_id, result) = match request {
            Request::Register(r) => {
                let result = registry
                    .register(ctx, r.into_fields())
                    .map_err(ApiError::from);
                let id = result.as_ref().ok().copied();
                (
                    AuditAction::Registered,
                    id,
                    result.map(|id| json!({ "registered": id })),
                )
            }
            Request::Update(r) => {
                let id = r.doc_id;
                let result = registry
                    .update(ctx, id, r.into_fields())
                    .map_err(ApiError::from)
                    .map(|_| json!({ "updated": id }));
                (AuditAction::Updated, Some(id), result)
            }
            Request::Transfer(r) => {
                let result = registry
                    .transfer_ownership(ctx, r.doc_id, r.new_owner)
                    .map_err(ApiError::from)
                    .map(|_| json!({ "transferred": r.doc_id }));
                (AuditAction::Transferred, Some(r.doc_id), result)
            }
            Request::Delete(r) => {
                let result = registry
                    .delete(ctx, r.doc_id)
                    .map_err(ApiError::from)
                    .map(|_| json!({ "deleted": r.doc_id }));
                (AuditAction::Deleted, Some(r.doc_id), result)
            }
        };

        drop(registry);
        self.observe(action, doc_id, ctx, &result);

        match result {
            Ok(data) => Response::success(data),
            Err(e) => Response::error(&e),
        }
    }

    fn observe(
        &self,
        action: AuditAction,
        doc_id: Option<DocId>,
        ctx: &CallContext,
        result: &ApiResult<serde_json::Value>,
    ) {
        let principal = ctx.principal.to_string();
        let height = ctx.block_height.to_string();
        let id = doc_id.map(|id| id.to_string()).unwrap_or_default();

        match result {
            Ok(_) => {
                Logger::info(
                    action.as_str(),
                    &[("doc_id", &id), ("height", &height), ("principal", &principal)],
                );
                if let Some(doc_id) = doc_id {
                    self.audit.append(AuditRecord::success(
                        action,
                        doc_id,
                        ctx.principal,
                        ctx.block_height,
                    ));
                }
            }
            Err(e) => {
                Logger::warn(
                    action.as_str(),
                    &[
                        ("code", e.code()),
                        ("doc_id", &id),
                        ("height", &height),
                        ("principal", &principal),
                    ],
                );
                self.audit.append(AuditRecord::rejected(
                    action,
                    doc_id,
                    ctx.principal,
                    ctx.block_height,
                    e.code(),
                ));
            }
        }
    }

    /// The audit trail
    pub fn audit(&self) -> &MemoryAuditLog {
        &self.audit
    }

    // Read-only snapshots for external readers

    pub fn document(&self, id: DocId) -> Option<Document> {
        self.registry
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .document(id)
            .cloned()
    }

    pub fn can_view(&self, id: DocId, viewer: Principal) -> bool {
        self.registry
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .can_view(id, viewer)
    }

    pub fn last_id(&self) -> u64 {
        self.registry
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last_id()
    }
}

impl Default for RegistryHandler {
    fn default() -> Self {
        Self::new()
    }
}
