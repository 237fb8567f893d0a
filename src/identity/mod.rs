//! # Caller Identity
//!
//! Opaque principal identities and the per-call context supplied by the host
//! environment.
//!
//! ## Invariants
//! - ID-EQ: ownership comparison is value equality on `Principal`
//! - ID-HEIGHT: `block_height` is monotonically non-decreasing across calls,
//!   guaranteed by the host, not re-verified here

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An opaque, immutable caller identity.
///
/// Compared by value; the registry never inspects the inner bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Principal(Uuid);

impl Principal {
    /// Create a fresh random principal (demo and test convenience)
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Parse from the canonical hyphenated form
    pub fn parse_str(s: &str) -> Result<Self, uuid::Error> {
        Uuid::parse_str(s).map(Self)
    }
}

impl Default for Principal {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Host-supplied context carried with each operation.
///
/// The host serializes calls and supplies the invoking principal together
/// with the block height current at submission time.
#[derive(Debug, Clone, Copy)]
pub struct CallContext {
    /// The identity invoking the current operation
    pub principal: Principal,

    /// Monotonically non-decreasing ordering marker
    pub block_height: u64,

    /// Whether the caller is the admin principal.
    /// Declared for the admin concept; no operation consults it.
    pub is_admin: bool,
}

impl CallContext {
    /// Context for an ordinary caller
    pub fn new(principal: Principal, block_height: u64) -> Self {
        Self {
            principal,
            block_height,
            is_admin: false,
        }
    }

    /// Context for the admin principal
    pub fn admin(principal: Principal, block_height: u64) -> Self {
        Self {
            principal,
            block_height,
            is_admin: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_principal_value_equality() {
        let id = Uuid::new_v4();
        assert_eq!(Principal::from_uuid(id), Principal::from_uuid(id));
        assert_ne!(Principal::new(), Principal::new());
    }

    #[test]
    fn test_principal_parse_roundtrip() {
        let p = Principal::new();
        let parsed = Principal::parse_str(&p.to_string()).unwrap();
        assert_eq!(p, parsed);
    }

    #[test]
    fn test_context_constructors() {
        let p = Principal::new();
        let ctx = CallContext::new(p, 42);
        assert_eq!(ctx.principal, p);
        assert_eq!(ctx.block_height, 42);
        assert!(!ctx.is_admin);

        let admin = CallContext::admin(p, 42);
        assert!(admin.is_admin);
    }

    #[test]
    fn test_principal_serde_transparent() {
        let p = Principal::new();
        let json = serde_json::to_string(&p).unwrap();
        // Serializes as a bare UUID string, not a wrapper object
        assert!(json.starts_with('"'));
        let back: Principal = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }
}
