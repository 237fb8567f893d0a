//! deedbook - A strict, deterministic registry for real-estate document records
//!
//! Documents are metadata entries (title, filesize, description, tags) keyed
//! by a strictly increasing id. Every mutating operation is gated by an
//! ownership check and field validation, and commits atomically against the
//! document and permission maps.

pub mod api;
pub mod cli;
pub mod identity;
pub mod observability;
pub mod registry;
pub mod store;
pub mod validation;
