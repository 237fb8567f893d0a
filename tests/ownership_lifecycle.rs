//! Ownership Lifecycle Tests
//!
//! End-to-end coverage of the owner-gated lifecycle: register, update,
//! transfer, delete, including the full Deed123 scenario through the JSON
//! operation surface.

use deedbook::api::RegistryHandler;
use deedbook::identity::{CallContext, Principal};
use deedbook::observability::{AuditAction, AuditOutcome};
use deedbook::registry::Registry;
use deedbook::store::DocumentFields;

// =============================================================================
// Helper Functions
// =============================================================================

fn fields(title: &str, filesize: u64, description: &str, tags: &[&str]) -> DocumentFields {
    DocumentFields {
        title: title.to_string(),
        filesize,
        description: description.to_string(),
        tags: tags.iter().map(|s| s.to_string()).collect(),
    }
}

// =============================================================================
// Ownership Gate Tests
// =============================================================================

/// Every mutating operation by a non-owner fails with the ownership error
/// and leaves the record untouched.
#[test]
fn test_non_owner_cannot_mutate() {
    let mut registry = Registry::new();
    let owner_ctx = CallContext::new(Principal::new(), 1);
    let id = registry
        .register(&owner_ctx, fields("Deed123", 5000, "Lot 7 deed", &["deed"]))
        .unwrap();
    let before = registry.document(id).unwrap().clone();

    let intruder = CallContext::new(Principal::new(), 2);

    let err = registry
        .update(&intruder, id, fields("x", 1, "y", &["z"]))
        .unwrap_err();
    assert_eq!(err.code(), "DEED_NOT_DOCUMENT_OWNER");

    let err = registry
        .transfer_ownership(&intruder, id, intruder.principal)
        .unwrap_err();
    assert_eq!(err.code(), "DEED_NOT_DOCUMENT_OWNER");

    let err = registry.delete(&intruder, id).unwrap_err();
    assert_eq!(err.code(), "DEED_NOT_DOCUMENT_OWNER");

    assert_eq!(registry.document(id).unwrap(), &before);
}

/// Transfer hands over the full mutating capability set and strips it from
/// the previous owner.
#[test]
fn test_transfer_swaps_capabilities() {
    let mut registry = Registry::new();
    let alice = Principal::new();
    let bob = Principal::new();
    let alice_ctx = CallContext::new(alice, 1);
    let bob_ctx = CallContext::new(bob, 2);

    let id = registry
        .register(&alice_ctx, fields("Deed123", 5000, "Lot 7 deed", &["deed"]))
        .unwrap();

    registry.transfer_ownership(&alice_ctx, id, bob).unwrap();

    // Alice lost update, transfer, and delete
    assert_eq!(
        registry
            .update(&alice_ctx, id, fields("t", 1, "d", &["g"]))
            .unwrap_err()
            .code(),
        "DEED_NOT_DOCUMENT_OWNER"
    );
    assert_eq!(
        registry
            .transfer_ownership(&alice_ctx, id, alice)
            .unwrap_err()
            .code(),
        "DEED_NOT_DOCUMENT_OWNER"
    );
    assert_eq!(
        registry.delete(&alice_ctx, id).unwrap_err().code(),
        "DEED_NOT_DOCUMENT_OWNER"
    );

    // Bob gained all three
    registry
        .update(&bob_ctx, id, fields("t", 1, "d", &["g"]))
        .unwrap();
    registry.transfer_ownership(&bob_ctx, id, bob).unwrap();
    registry.delete(&bob_ctx, id).unwrap();
}

/// Operations on missing documents fail with not-found regardless of caller.
#[test]
fn test_missing_document_operations() {
    let mut registry = Registry::new();
    let ctx = CallContext::new(Principal::new(), 1);

    assert_eq!(
        registry
            .update(&ctx, 7, fields("t", 1, "d", &["g"]))
            .unwrap_err()
            .code(),
        "DEED_DOC_NOT_FOUND"
    );
    assert_eq!(
        registry
            .transfer_ownership(&ctx, 7, Principal::new())
            .unwrap_err()
            .code(),
        "DEED_DOC_NOT_FOUND"
    );
    assert_eq!(registry.delete(&ctx, 7).unwrap_err().code(), "DEED_DOC_NOT_FOUND");
    assert!(registry.document(7).is_none());
}

// =============================================================================
// Deed123 Scenario
// =============================================================================

/// The full scenario, register through final delete, exercised directly
/// against the registry.
#[test]
fn test_deed123_scenario() {
    let mut registry = Registry::new();
    let caller = Principal::new();
    let b = Principal::new();
    let caller_ctx = CallContext::new(caller, 10);
    let b_ctx = CallContext::new(b, 20);

    // register("Deed123", 5000, "Lot 7 deed", ["deed","lot7"]) -> id 1
    let id = registry
        .register(
            &caller_ctx,
            fields("Deed123", 5000, "Lot 7 deed", &["deed", "lot7"]),
        )
        .unwrap();
    assert_eq!(id, 1);
    assert_eq!(registry.document(1).unwrap().owner, caller);

    // update by caller succeeds
    registry
        .update(
            &caller_ctx,
            1,
            fields("Deed123-v2", 5200, "Lot 7 deed revised", &["deed"]),
        )
        .unwrap();
    assert_eq!(registry.document(1).unwrap().fields.title, "Deed123-v2");

    // update by a different caller fails
    let err = registry
        .update(&b_ctx, 1, fields("x", 1, "y", &["z"]))
        .unwrap_err();
    assert_eq!(err.code(), "DEED_NOT_DOCUMENT_OWNER");

    // transfer to B by caller succeeds
    registry.transfer_ownership(&caller_ctx, 1, b).unwrap();

    // delete by caller (no longer owner) fails
    let err = registry.delete(&caller_ctx, 1).unwrap_err();
    assert_eq!(err.code(), "DEED_NOT_DOCUMENT_OWNER");

    // delete by B succeeds; record is gone for good
    registry.delete(&b_ctx, 1).unwrap();
    assert!(registry.document(1).is_none());
    assert_eq!(registry.delete(&b_ctx, 1).unwrap_err().code(), "DEED_DOC_NOT_FOUND");
}

/// The same scenario through the JSON surface, with the audit trail
/// recording every attempt in order.
#[test]
fn test_deed123_scenario_over_api() {
    let handler = RegistryHandler::new();
    let caller = Principal::new();
    let b = Principal::new();

    let register = r#"{
        "op": "register",
        "title": "Deed123",
        "filesize": 5000,
        "description": "Lot 7 deed",
        "tags": ["deed", "lot7"]
    }"#;
    let resp = handler.handle(register, &CallContext::new(caller, 1));
    assert_eq!(resp.to_json()["data"]["registered"], 1);

    let update = r#"{
        "op": "update",
        "doc_id": 1,
        "title": "Deed123-v2",
        "filesize": 5200,
        "description": "Lot 7 deed revised",
        "tags": ["deed"]
    }"#;
    assert!(handler.handle(update, &CallContext::new(caller, 2)).is_success());
    assert_eq!(handler.document(1).unwrap().fields.title, "Deed123-v2");

    let resp = handler.handle(update, &CallContext::new(b, 3));
    assert_eq!(resp.error_code(), Some("DEED_NOT_DOCUMENT_OWNER"));

    let transfer = format!(r#"{{"op": "transfer", "doc_id": 1, "new_owner": "{}"}}"#, b);
    assert!(handler
        .handle(&transfer, &CallContext::new(caller, 4))
        .is_success());

    let delete = r#"{"op": "delete", "doc_id": 1}"#;
    let resp = handler.handle(delete, &CallContext::new(caller, 5));
    assert_eq!(resp.error_code(), Some("DEED_NOT_DOCUMENT_OWNER"));

    assert!(handler.handle(delete, &CallContext::new(b, 6)).is_success());
    assert!(handler.document(1).is_none());

    let records = handler.audit().records();
    let actions: Vec<(AuditAction, AuditOutcome)> =
        records.iter().map(|r| (r.action, r.outcome)).collect();
    assert_eq!(
        actions,
        vec![
            (AuditAction::Registered, AuditOutcome::Success),
            (AuditAction::Updated, AuditOutcome::Success),
            (AuditAction::Updated, AuditOutcome::Rejected),
            (AuditAction::Transferred, AuditOutcome::Success),
            (AuditAction::Deleted, AuditOutcome::Rejected),
            (AuditAction::Deleted, AuditOutcome::Success),
        ]
    );
}
