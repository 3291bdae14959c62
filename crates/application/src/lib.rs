//! Application services and ports for back-office navigation.

#![forbid(unsafe_code)]

mod menu_catalog;
mod menu_filter;
mod navigation_policy;
mod navigation_ports;
mod navigation_service;
mod permission_resolver;

pub use menu_catalog::{MenuFamily, build_menu_tree};
pub use menu_filter::filter_menu_tree;
pub use navigation_policy::{
    GrantSource, RoleNavigationPolicy, SUPER_ADMIN_PERMISSIONS, policy_for,
};
pub use navigation_ports::{DEFAULT_PERMISSIONS_KEY, PermissionStore};
pub use navigation_service::{NavigationService, NavigationView};
pub use permission_resolver::PermissionSetResolver;
