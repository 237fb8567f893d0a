//! # Viewer Permissions
//!
//! The `viewer-permissions` map: a can-view flag keyed by (document id,
//! principal). Written at registration, never read as a gate by any registry
//! operation; the map exists as a foundation for a permission-gated read
//! path. Absence of an entry means no explicit grant was recorded, which is
//! distinct from an explicit `false`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::identity::Principal;

use super::document::DocId;

/// A recorded view grant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permission {
    pub can_view: bool,
}

/// Trait for permission persistence
pub trait PermissionStore {
    /// Insert or overwrite a can-view grant for the pair
    fn grant(&mut self, id: DocId, viewer: Principal);

    /// Overwrite with an explicit no-view entry.
    /// Not called by any registry operation.
    fn revoke(&mut self, id: DocId, viewer: Principal);

    /// Stored flag, or the no-access default when no entry exists
    fn can_view(&self, id: DocId, viewer: Principal) -> bool;

    /// Whether an explicit entry exists for the pair
    fn has_entry(&self, id: DocId, viewer: Principal) -> bool;
}

/// In-memory permission store
#[derive(Debug, Default)]
pub struct InMemoryPermissionStore {
    permissions: HashMap<(DocId, Principal), Permission>,
}

impl InMemoryPermissionStore {
    pub fn new() -> Self {
        Self {
            permissions: HashMap::new(),
        }
    }
}

impl PermissionStore for InMemoryPermissionStore {
    fn grant(&mut self, id: DocId, viewer: Principal) {
        self.permissions
            .insert((id, viewer), Permission { can_view: true });
    }

    fn revoke(&mut self, id: DocId, viewer: Principal) {
        self.permissions
            .insert((id, viewer), Permission { can_view: false });
    }

    fn can_view(&self, id: DocId, viewer: Principal) -> bool {
        self.permissions
            .get(&(id, viewer))
            .map(|p| p.can_view)
            .unwrap_or(false)
    }

    fn has_entry(&self, id: DocId, viewer: Principal) -> bool {
        self.permissions.contains_key(&(id, viewer))
    }
}
