//! # Document Registry
//!
//! The orchestrator behind every public operation. Each call sequences
//! validation, then the ownership check, then one atomic transaction against
//! the stores.
//!
//! ## Invariants
//! - REG-ID: ids are assigned by the private counter, strictly increasing by
//!   exactly 1 per successful registration, starting at 1, never reused
//! - REG-ATOMIC: a failed operation leaves no observable state change
//! - REG-OWNER: update, transfer, and delete require the current owner
//! - REG-GRANT: register never commits a document without its creator grant

mod counter;
mod errors;
mod handler;

pub use counter::DocumentCounter;
pub use errors::{RegistryError, RegistryResult};
pub use handler::Registry;
