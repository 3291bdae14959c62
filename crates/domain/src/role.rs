use std::fmt::{Display, Formatter};
use std::str::FromStr;

use paydesk_core::AppError;
use serde::{Deserialize, Serialize};

/// Header label used when the session role is not recognised.
pub const FALLBACK_PORTAL_LABEL: &str = "Management System";

/// Actor class of the signed-in session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Platform owner with every administrative capability.
    SuperAdmin,
    /// Staff administrator whose reach is defined by stored permissions.
    Admin,
    /// Franchise operator managing its merchants.
    Franchise,
    /// Merchant operator.
    Merchant,
}

impl Role {
    /// Returns a stable session value for this role.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SuperAdmin => "super_admin",
            Self::Admin => "admin",
            Self::Franchise => "franchise",
            Self::Merchant => "merchant",
        }
    }

    /// Returns all known roles.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[Role] = &[Role::SuperAdmin, Role::Admin, Role::Franchise, Role::Merchant];

        ALL
    }

    /// Returns whether the role belongs to the administrator family.
    #[must_use]
    pub fn is_administrator(&self) -> bool {
        matches!(self, Self::SuperAdmin | Self::Admin)
    }

    /// Returns the portal label shown in the navigation header.
    #[must_use]
    pub fn portal_label(&self) -> &'static str {
        match self {
            Self::SuperAdmin | Self::Admin => "Admin Panel",
            Self::Franchise => "Franchise Portal",
            Self::Merchant => "Merchant Portal",
        }
    }

    /// Parses a session value into a role.
    pub fn from_session(value: &str) -> Result<Self, AppError> {
        Self::from_str(value)
    }
}

impl Display for Role {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "super_admin" => Ok(Self::SuperAdmin),
            "admin" => Ok(Self::Admin),
            "franchise" => Ok(Self::Franchise),
            "merchant" => Ok(Self::Merchant),
            _ => Err(AppError::Validation(format!("unknown role value '{value}'"))),
        }
    }
}
