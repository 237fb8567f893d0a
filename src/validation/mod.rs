//! # Field Validation
//!
//! Pure predicate checks for document fields, applied before any store
//! mutation.
//!
//! ## Invariants
//! - VAL-PURE: no side effects, no state
//! - VAL-FIRST: validation runs before any write is staged
//! - VAL-DET: the same input fails or passes the same way every time

mod errors;
mod rules;

pub use errors::{ValidationError, ValidationResult};
pub use rules::{
    validate_description, validate_fields, validate_filesize, validate_tags, validate_title,
    DESCRIPTION_MAX_LEN, FILESIZE_CEILING, TAGS_MAX, TAG_MAX_LEN, TITLE_MAX_LEN,
};
