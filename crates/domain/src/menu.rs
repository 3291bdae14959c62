use paydesk_core::{AppResult, NonEmptyString};
use serde::{Deserialize, Serialize};

use crate::Role;

/// Stable key of a top-level navigation section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionKey {
    /// Landing dashboard.
    Dashboard,
    /// Vendor administration.
    Vendors,
    /// Inventory and pricing.
    Inventory,
    /// Customer onboarding and approval.
    Customers,
    /// Payment products, charges, vendors and routing.
    Payment,
    /// Uploads, charge calculation and batch monitoring.
    Other,
    /// Report listings.
    Reports,
    /// Franchise merchant listing.
    Merchants,
    /// Payout requests.
    Payout,
    /// Credit card bill payment.
    BillPayment,
    /// Stored card details.
    CardDetails,
}

impl SectionKey {
    /// Returns the stable key string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Vendors => "vendors",
            Self::Inventory => "inventory",
            Self::Customers => "customers",
            Self::Payment => "payment",
            Self::Other => "other",
            Self::Reports => "reports",
            Self::Merchants => "merchants",
            Self::Payout => "payout",
            Self::BillPayment => "bill-payment",
            Self::CardDetails => "card-details",
        }
    }
}

/// Icon reference resolved by the rendering layer.
///
/// Variant names follow the icon set used by the web client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MenuIcon {
    /// House.
    Home,
    /// People.
    Users,
    /// Box.
    Package,
    /// Dollar sign.
    DollarSign,
    /// Person with a plus.
    UserPlus,
    /// Down arrow.
    ArrowDown,
    /// Calculator.
    Calculator,
    /// Upload tray.
    Upload,
    /// Bar chart.
    BarChart,
    /// Card.
    CreditCard,
    /// Shopfront.
    Store,
    /// Banknote.
    Banknote,
    /// Coin stack.
    Coins,
    /// Eye.
    Eye,
    /// Rupee sign.
    IndianRupee,
    /// Stacked layers.
    Layers,
    /// Percent badge.
    PercentDiamond,
    /// ID card.
    IdCard,
    /// Router.
    Router,
}

/// What activating a menu row does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MenuAction {
    /// Navigates to an opaque route path.
    Link {
        /// Route handed to the router.
        path: String,
    },
    /// Expands an ordered list of child entries.
    Group {
        /// Child entries in declaration order.
        children: Vec<MenuItem>,
    },
    /// Shown as a label only.
    Placeholder,
}

/// One navigation entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    title: NonEmptyString,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    key: Option<SectionKey>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    icon: Option<MenuIcon>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    permission: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    audience: Vec<Role>,
    action: MenuAction,
}

impl MenuItem {
    /// Creates a link entry.
    pub fn link(title: impl Into<String>, path: impl Into<String>) -> AppResult<Self> {
        Self::new(title, MenuAction::Link { path: path.into() })
    }

    /// Creates a group entry with ordered children.
    pub fn group(title: impl Into<String>, children: Vec<MenuItem>) -> AppResult<Self> {
        Self::new(title, MenuAction::Group { children })
    }

    /// Creates a label-only entry.
    pub fn placeholder(title: impl Into<String>) -> AppResult<Self> {
        Self::new(title, MenuAction::Placeholder)
    }

    fn new(title: impl Into<String>, action: MenuAction) -> AppResult<Self> {
        Ok(Self {
            title: NonEmptyString::new(title)?,
            key: None,
            icon: None,
            permission: None,
            audience: Vec::new(),
            action,
        })
    }

    /// Sets the section key.
    #[must_use]
    pub fn with_key(mut self, key: SectionKey) -> Self {
        self.key = Some(key);
        self
    }

    /// Sets the icon.
    #[must_use]
    pub fn with_icon(mut self, icon: MenuIcon) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Sets an explicit permission name; blank values keep the title fallback.
    #[must_use]
    pub fn with_permission(mut self, permission: impl Into<String>) -> Self {
        let permission = permission.into();
        self.permission = (!permission.trim().is_empty()).then_some(permission);
        self
    }

    /// Restricts the entry to the given roles.
    #[must_use]
    pub fn offered_to(mut self, roles: &[Role]) -> Self {
        self.audience = roles.to_vec();
        self
    }

    /// Returns the display title.
    #[must_use]
    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    /// Returns the section key, set on top-level entries.
    #[must_use]
    pub fn key(&self) -> Option<SectionKey> {
        self.key
    }

    /// Returns the icon reference.
    #[must_use]
    pub fn icon(&self) -> Option<MenuIcon> {
        self.icon
    }

    /// Returns the explicit permission name, if any.
    #[must_use]
    pub fn permission(&self) -> Option<&str> {
        self.permission.as_deref()
    }

    /// Returns the name matched against a permission set.
    #[must_use]
    pub fn permission_key(&self) -> &str {
        self.permission().unwrap_or_else(|| self.title())
    }

    /// Returns whether the entry is offered to the role.
    #[must_use]
    pub fn is_offered_to(&self, role: Role) -> bool {
        self.audience.is_empty() || self.audience.contains(&role)
    }

    /// Returns the activation behavior.
    #[must_use]
    pub fn action(&self) -> &MenuAction {
        &self.action
    }

    /// Returns the route path for link entries.
    #[must_use]
    pub fn path(&self) -> Option<&str> {
        match &self.action {
            MenuAction::Link { path } => Some(path.as_str()),
            MenuAction::Group { .. } | MenuAction::Placeholder => None,
        }
    }

    /// Returns child entries; empty for links and placeholders.
    #[must_use]
    pub fn children(&self) -> &[MenuItem] {
        match &self.action {
            MenuAction::Group { children } => children,
            MenuAction::Link { .. } | MenuAction::Placeholder => &[],
        }
    }

    /// Returns whether the entry is a group.
    #[must_use]
    pub fn is_group(&self) -> bool {
        matches!(self.action, MenuAction::Group { .. })
    }

    /// Returns whether the entry renders as a clickable row.
    #[must_use]
    pub fn is_clickable(&self) -> bool {
        match &self.action {
            MenuAction::Link { .. } => true,
            MenuAction::Group { children } => !children.is_empty(),
            MenuAction::Placeholder => false,
        }
    }

    /// Returns a copy of this group holding only the given children.
    #[must_use]
    pub fn with_children(&self, children: Vec<MenuItem>) -> Self {
        Self {
            title: self.title.clone(),
            key: self.key,
            icon: self.icon,
            permission: self.permission.clone(),
            audience: self.audience.clone(),
            action: MenuAction::Group { children },
        }
    }
}

/// Full, unfiltered navigation for one role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuTree {
    items: Vec<MenuItem>,
}

impl MenuTree {
    /// Creates a tree from top-level entries in declaration order.
    #[must_use]
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self { items }
    }

    /// Returns top-level entries.
    #[must_use]
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Returns the top-level entry with the given key.
    #[must_use]
    pub fn section(&self, key: SectionKey) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.key() == Some(key))
    }

    /// Returns every permission key referenced by the tree, in traversal order.
    #[must_use]
    pub fn permission_keys(&self) -> Vec<&str> {
        let mut keys = Vec::new();
        for item in &self.items {
            keys.push(item.permission_key());
            keys.extend(item.children().iter().map(MenuItem::permission_key));
        }
        keys
    }
}

/// Navigation left after permission filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VisibleMenuTree {
    items: Vec<MenuItem>,
}

impl VisibleMenuTree {
    /// Wraps filtered top-level entries.
    #[must_use]
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self { items }
    }

    /// Returns visible top-level entries.
    #[must_use]
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Returns the visible top-level entry with the given key.
    #[must_use]
    pub fn section(&self, key: SectionKey) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.key() == Some(key))
    }

    /// Returns top-level titles in display order.
    #[must_use]
    pub fn titles(&self) -> Vec<&str> {
        self.items.iter().map(MenuItem::title).collect()
    }

    /// Returns whether nothing is visible.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl From<MenuTree> for VisibleMenuTree {
    fn from(tree: MenuTree) -> Self {
        Self { items: tree.items }
    }
}

impl PartialEq<MenuTree> for VisibleMenuTree {
    fn eq(&self, other: &MenuTree) -> bool {
        self.items == other.items
    }
}
