//! # Observability
//!
//! Structured logging and an append-only audit trail for registry
//! operations.
//!
//! # Principles
//!
//! 1. Observability is read-only with respect to registry state
//! 2. No side effects on execution; a log failure never fails an operation
//! 3. No async or background threads
//! 4. Deterministic output ordering

mod audit;
mod logger;

pub use audit::{AuditAction, AuditLog, AuditOutcome, AuditRecord, MemoryAuditLog};
pub use logger::{Logger, Severity};
