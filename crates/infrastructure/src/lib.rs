//! Infrastructure adapters for application ports.

#![forbid(unsafe_code)]

mod file_permission_store;
mod in_memory_permission_store;

pub use file_permission_store::FilePermissionStore;
pub use in_memory_permission_store::InMemoryPermissionStore;
