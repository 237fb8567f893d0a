//! # API Layer
//!
//! Raw-JSON operation surface over the registry, serialized behind a single
//! global lock.
//!
//! # Design Principles
//!
//! - Single global mutex for all operations
//! - Strict request handling flow: parse, dispatch, convert
//! - Registry error codes passed through unchanged
//! - One log line and one audit record per operation attempt
//!
//! # Supported Operations
//!
//! - register
//! - update
//! - transfer
//! - delete

mod errors;
mod handler;
mod request;
mod response;

pub use errors::{ApiError, ApiResult};
pub use handler::RegistryHandler;
pub use request::{DeleteRequest, RegisterRequest, Request, TransferRequest, UpdateRequest};
pub use response::{ErrorBody, Response};
