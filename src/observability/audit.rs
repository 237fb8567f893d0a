//! Audit trail for registry operations.
//!
//! - Every operation attempt and its outcome is recorded
//! - The log is append-only; no purging or retention policies here
//! - Recording never fails the operation being audited

use std::fmt;
use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::identity::Principal;
use crate::store::DocId;

/// Audited operation kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuditAction {
    Registered,
    Updated,
    Transferred,
    Deleted,
}

impl AuditAction {
    /// Returns the action name string
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditAction::Registered => "REGISTERED",
            AuditAction::Updated => "UPDATED",
            AuditAction::Transferred => "TRANSFERRED",
            AuditAction::Deleted => "DELETED",
        }
    }
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome of an audited operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuditOutcome {
    Success,
    Rejected,
}

impl AuditOutcome {
    /// Returns the outcome string
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditOutcome::Success => "SUCCESS",
            AuditOutcome::Rejected => "REJECTED",
        }
    }
}

impl fmt::Display for AuditOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One audit record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditRecord {
    pub action: AuditAction,
    pub outcome: AuditOutcome,
    /// None when the operation failed before an id was known
    pub doc_id: Option<DocId>,
    pub principal: Principal,
    pub block_height: u64,
    /// Error code for rejected operations
    pub error_code: Option<String>,
    /// Wall-clock time the record was written
    pub recorded_at: DateTime<Utc>,
}

impl AuditRecord {
    /// Record for a successful operation
    pub fn success(
        action: AuditAction,
        doc_id: DocId,
        principal: Principal,
        block_height: u64,
    ) -> Self {
        Self {
            action,
            outcome: AuditOutcome::Success,
            doc_id: Some(doc_id),
            principal,
            block_height,
            error_code: None,
            recorded_at: Utc::now(),
        }
    }

    /// Record for a rejected operation
    pub fn rejected(
        action: AuditAction,
        doc_id: Option<DocId>,
        principal: Principal,
        block_height: u64,
        error_code: impl Into<String>,
    ) -> Self {
        Self {
            action,
            outcome: AuditOutcome::Rejected,
            doc_id,
            principal,
            block_height,
            error_code: Some(error_code.into()),
            recorded_at: Utc::now(),
        }
    }
}

/// Trait for audit sinks
pub trait AuditLog: Send {
    /// Append a record. Must not fail the audited operation.
    fn append(&self, record: AuditRecord);
}

/// In-memory audit log
#[derive(Debug, Default)]
pub struct MemoryAuditLog {
    records: Mutex<Vec<AuditRecord>>,
}

impl MemoryAuditLog {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of all records in append order
    pub fn records(&self) -> Vec<AuditRecord> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl AuditLog for MemoryAuditLog {
    fn append(&self, record: AuditRecord) {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_order_preserved() {
        let log = MemoryAuditLog::new();
        let p = Principal::new();

        log.append(AuditRecord::success(AuditAction::Registered, 1, p, 10));
        log.append(AuditRecord::rejected(
            AuditAction::Updated,
            Some(1),
            p,
            11,
            "DEED_NOT_DOCUMENT_OWNER",
        ));

        let records = log.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].action, AuditAction::Registered);
        assert_eq!(records[0].outcome, AuditOutcome::Success);
        assert_eq!(records[1].outcome, AuditOutcome::Rejected);
        assert_eq!(
            records[1].error_code.as_deref(),
            Some("DEED_NOT_DOCUMENT_OWNER")
        );
    }

    #[test]
    fn test_rejected_without_id() {
        let log = MemoryAuditLog::new();
        let record = AuditRecord::rejected(
            AuditAction::Registered,
            None,
            Principal::new(),
            5,
            "DEED_TITLE_FORMAT",
        );
        log.append(record.clone());
        assert_eq!(log.records()[0].doc_id, None);
    }

    #[test]
    fn test_action_strings() {
        assert_eq!(AuditAction::Registered.as_str(), "REGISTERED");
        assert_eq!(AuditAction::Transferred.as_str(), "TRANSFERRED");
        assert_eq!(AuditOutcome::Rejected.as_str(), "REJECTED");
    }
}
