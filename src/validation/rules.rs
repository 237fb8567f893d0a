//! Length and bound checks for document fields.
//!
//! Bounds are measured in bytes; fields are declared printable ASCII, where
//! bytes and characters coincide. The validator checks bounds only; it does
//! not inspect content.

use crate::store::DocumentFields;

use super::errors::{ValidationError, ValidationResult};

/// Maximum title length
pub const TITLE_MAX_LEN: usize = 64;

/// Maximum description length
pub const DESCRIPTION_MAX_LEN: usize = 128;

/// Exclusive filesize upper bound; lower bound is 1
pub const FILESIZE_CEILING: u64 = 1_000_000_000;

/// Maximum number of tags per document
pub const TAGS_MAX: usize = 10;

/// Maximum length of a single tag
pub const TAG_MAX_LEN: usize = 32;

/// Succeeds iff the title length is in `[1, 64]`
pub fn validate_title(title: &str) -> ValidationResult<()> {
    if title.is_empty() || title.len() > TITLE_MAX_LEN {
        return Err(ValidationError::TitleFormat(format!(
            "title length {} outside [1, {}]",
            title.len(),
            TITLE_MAX_LEN
        )));
    }
    Ok(())
}

/// Succeeds iff the description length is in `[1, 128]`
pub fn validate_description(description: &str) -> ValidationResult<()> {
    if description.is_empty() || description.len() > DESCRIPTION_MAX_LEN {
        return Err(ValidationError::TitleFormat(format!(
            "description length {} outside [1, {}]",
            description.len(),
            DESCRIPTION_MAX_LEN
        )));
    }
    Ok(())
}

/// Succeeds iff `1 <= filesize < 1_000_000_000`
pub fn validate_filesize(filesize: u64) -> ValidationResult<()> {
    if filesize == 0 || filesize >= FILESIZE_CEILING {
        return Err(ValidationError::FilesizeLimit(filesize));
    }
    Ok(())
}

/// Succeeds iff the list holds 1 to 10 tags, each 1 to 32 bytes long.
/// Order is preserved and not itself validated; duplicates are permitted.
pub fn validate_tags(tags: &[String]) -> ValidationResult<()> {
    if tags.is_empty() || tags.len() > TAGS_MAX {
        return Err(ValidationError::TagValidation(format!(
            "tag count {} outside [1, {}]",
            tags.len(),
            TAGS_MAX
        )));
    }
    for (i, tag) in tags.iter().enumerate() {
        if tag.is_empty() || tag.len() > TAG_MAX_LEN {
            return Err(ValidationError::TagValidation(format!(
                "tag[{}] length {} outside [1, {}]",
                i,
                tag.len(),
                TAG_MAX_LEN
            )));
        }
    }
    Ok(())
}

/// Validates all four fields in order: title, filesize, description, tags.
/// The first failure wins.
pub fn validate_fields(fields: &DocumentFields) -> ValidationResult<()> {
    validate_title(&fields.title)?;
    validate_filesize(fields.filesize)?;
    validate_description(&fields.description)?;
    validate_tags(&fields.tags)?;
    Ok(())
}
