use paydesk_core::AppResult;

/// Storage key the web client writes stored permissions under.
pub const DEFAULT_PERMISSIONS_KEY: &str = "permissions";

/// Port over client-local key/value storage holding raw permission documents.
pub trait PermissionStore: Send + Sync {
    /// Reads the raw value stored under a key, if any.
    fn read_item(&self, key: &str) -> AppResult<Option<String>>;
}
