use std::sync::Arc;

use paydesk_domain::{PermissionNode, PermissionSet};
use tracing::{debug, warn};

use crate::navigation_ports::{DEFAULT_PERMISSIONS_KEY, PermissionStore};

/// Resolves the stored permission structure into a flat permission set.
///
/// Resolution never fails: a missing, unreadable or malformed document yields
/// the baseline set.
#[derive(Clone)]
pub struct PermissionSetResolver {
    store: Arc<dyn PermissionStore>,
    storage_key: String,
}

impl PermissionSetResolver {
    /// Creates a resolver reading the default storage key.
    #[must_use]
    pub fn new(store: Arc<dyn PermissionStore>) -> Self {
        Self::with_storage_key(store, DEFAULT_PERMISSIONS_KEY)
    }

    /// Creates a resolver reading a custom storage key.
    #[must_use]
    pub fn with_storage_key(store: Arc<dyn PermissionStore>, storage_key: impl Into<String>) -> Self {
        Self {
            store,
            storage_key: storage_key.into(),
        }
    }

    /// Returns the storage key read by this resolver.
    #[must_use]
    pub fn storage_key(&self) -> &str {
        self.storage_key.as_str()
    }

    /// Reads and flattens stored permissions.
    #[must_use]
    pub fn resolve(&self) -> PermissionSet {
        let raw = match self.store.read_item(self.storage_key.as_str()) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(storage_key = %self.storage_key, "no stored permissions, using baseline");
                return PermissionSet::baseline();
            }
            Err(error) => {
                warn!(
                    storage_key = %self.storage_key,
                    error = %error,
                    "failed to read stored permissions, using baseline"
                );
                return PermissionSet::baseline();
            }
        };

        match PermissionNode::parse_document(raw.as_str()) {
            Ok(node) => {
                let permissions = node.flatten();
                debug!(
                    storage_key = %self.storage_key,
                    permission_count = permissions.len(),
                    "resolved stored permissions"
                );
                permissions
            }
            Err(error) => {
                warn!(
                    storage_key = %self.storage_key,
                    error = %error,
                    "stored permissions are malformed, using baseline"
                );
                PermissionSet::baseline()
            }
        }
    }
}
