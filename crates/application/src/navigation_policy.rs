use paydesk_domain::{PermissionSet, Role};

use crate::menu_catalog::MenuFamily;

/// Every permission the super admin is granted, maintained by hand.
///
/// `Taxes Manage` is kept next to `Taxes Management` because older permission
/// exports used the menu title.
pub const SUPER_ADMIN_PERMISSIONS: &[&str] = &[
    "Dashboard",
    "Admin Management",
    "Logs",
    "Taxes Manage",
    "Taxes Management",
    "Edit History",
    "Wallet Adjustment",
    "Vendors",
    "Vendor List",
    "Product List",
    "Vendor Rates",
    "Vendor Routing",
    "Inventory",
    "Pricing Scheme",
    "Product Scheme Assign",
    "Inventory Management",
    "Customers",
    "Customer List",
    "Onboard Customer",
    "Merchant Approval",
    "Products Distribution",
    "Payment",
    "Payment Products",
    "Payment Charges",
    "Payment Vendors",
    "Payment Vendors Credentials",
    "Payment Vendor Routing",
    "Other",
    "File Upload",
    "Charge Calculation",
    "Batch Status",
    "Reports",
];

/// Where a role's permission set comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrantSource {
    /// The menu is shown as built; no permission set is consulted.
    Unfiltered,
    /// The fixed super admin superset.
    SuperAdminSuperset,
    /// The set resolved from stored permissions.
    Stored,
}

impl GrantSource {
    /// Returns the fixed set for sources that do not read storage.
    #[must_use]
    pub fn fixed_permissions(&self) -> Option<PermissionSet> {
        match self {
            Self::SuperAdminSuperset => Some(PermissionSet::from_static(SUPER_ADMIN_PERMISSIONS)),
            Self::Unfiltered | Self::Stored => None,
        }
    }
}

/// Menu layout and grant source applied to one role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleNavigationPolicy {
    /// Static layout the menu is built from.
    pub family: MenuFamily,
    /// Permission source used to filter the layout.
    pub grants: GrantSource,
}

const ROLE_POLICIES: &[(Role, RoleNavigationPolicy)] = &[
    (
        Role::SuperAdmin,
        RoleNavigationPolicy {
            family: MenuFamily::Administrator,
            grants: GrantSource::SuperAdminSuperset,
        },
    ),
    (
        Role::Admin,
        RoleNavigationPolicy {
            family: MenuFamily::Administrator,
            grants: GrantSource::Stored,
        },
    ),
    (
        Role::Franchise,
        RoleNavigationPolicy {
            family: MenuFamily::Franchise,
            grants: GrantSource::Unfiltered,
        },
    ),
    (
        Role::Merchant,
        RoleNavigationPolicy {
            family: MenuFamily::Merchant,
            grants: GrantSource::Unfiltered,
        },
    ),
];

const MERCHANT_POLICY: RoleNavigationPolicy = RoleNavigationPolicy {
    family: MenuFamily::Merchant,
    grants: GrantSource::Unfiltered,
};

/// Returns the navigation policy for a role.
#[must_use]
pub fn policy_for(role: Role) -> RoleNavigationPolicy {
    ROLE_POLICIES
        .iter()
        .find(|(candidate, _)| *candidate == role)
        .map(|(_, policy)| *policy)
        .unwrap_or(MERCHANT_POLICY)
}
