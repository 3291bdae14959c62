//! Navigation domain: roles, permissions and menu structures.

#![forbid(unsafe_code)]

mod menu;
mod navigation_state;
mod permission;
mod role;

pub use menu::{MenuAction, MenuIcon, MenuItem, MenuTree, SectionKey, VisibleMenuTree};
pub use navigation_state::{NavigationUiState, is_active_link, is_parent_active};
pub use permission::{BASELINE_PERMISSION, PermissionName, PermissionNode, PermissionSet};
pub use role::{FALLBACK_PORTAL_LABEL, Role};
