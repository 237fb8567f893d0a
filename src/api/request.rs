//! Request parsing for the JSON operation surface.

use serde::Deserialize;

use crate::identity::Principal;
use crate::store::{DocId, DocumentFields};

use super::errors::{ApiError, ApiResult};

/// A parsed operation request, dispatched on the `op` field
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Request {
    Register(RegisterRequest),
    Update(UpdateRequest),
    Transfer(TransferRequest),
    Delete(DeleteRequest),
}

impl Request {
    /// Parse a raw JSON request string
    pub fn parse(json: &str) -> ApiResult<Self> {
        serde_json::from_str(json).map_err(|e| ApiError::invalid_request(e.to_string()))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub title: String,
    pub filesize: u64,
    pub description: String,
    pub tags: Vec<String>,
}

impl RegisterRequest {
    pub fn into_fields(self) -> DocumentFields {
        DocumentFields {
            title: self.title,
            filesize: self.filesize,
            description: self.description,
            tags: self.tags,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateRequest {
    pub doc_id: DocId,
    pub title: String,
    pub filesize: u64,
    pub description: String,
    pub tags: Vec<String>,
}

impl UpdateRequest {
    pub fn into_fields(self) -> DocumentFields {
        DocumentFields {
            title: self.title,
            filesize: self.filesize,
            description: self.description,
            tags: self.tags,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TransferRequest {
    pub doc_id: DocId,
    pub new_owner: Principal,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeleteRequest {
    pub doc_id: DocId,
}
