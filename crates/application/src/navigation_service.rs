use paydesk_core::{AppResult, SessionIdentity};
use paydesk_domain::{FALLBACK_PORTAL_LABEL, Role, VisibleMenuTree};
use serde::Serialize;
use tracing::{info, warn};

use crate::menu_catalog::build_menu_tree;
use crate::menu_filter::filter_menu_tree;
use crate::navigation_policy::{GrantSource, policy_for};
use crate::permission_resolver::PermissionSetResolver;

#[cfg(test)]
mod tests;

/// Navigation resolved for one session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationView {
    /// Role the menu was built for.
    pub role: Role,
    /// Header label of the portal.
    pub portal_label: String,
    /// Entries the rendering layer should draw.
    pub menu: VisibleMenuTree,
}

/// Application service deriving per-session navigation.
#[derive(Clone)]
pub struct NavigationService {
    resolver: PermissionSetResolver,
}

impl NavigationService {
    /// Creates a navigation service over a stored-permission resolver.
    #[must_use]
    pub fn new(resolver: PermissionSetResolver) -> Self {
        Self { resolver }
    }

    /// Resolves navigation for a signed-in session.
    ///
    /// Unknown role values fall back to the merchant menu.
    pub fn navigation_for(&self, identity: &SessionIdentity) -> AppResult<NavigationView> {
        match Role::from_session(identity.role()) {
            Ok(role) => self.navigation_for_role(role),
            Err(error) => {
                warn!(
                    subject = %identity.subject(),
                    role = %identity.role(),
                    error = %error,
                    "unrecognised session role, falling back to merchant navigation"
                );
                let mut view = self.navigation_for_role(Role::Merchant)?;
                view.portal_label = FALLBACK_PORTAL_LABEL.to_owned();
                Ok(view)
            }
        }
    }

    /// Resolves navigation for a known role.
    pub fn navigation_for_role(&self, role: Role) -> AppResult<NavigationView> {
        let policy = policy_for(role);
        let tree = build_menu_tree(policy.family, role)?;

        let menu = match policy.grants {
            GrantSource::Unfiltered => VisibleMenuTree::from(tree),
            GrantSource::SuperAdminSuperset | GrantSource::Stored => {
                let permissions = policy
                    .grants
                    .fixed_permissions()
                    .unwrap_or_else(|| self.resolver.resolve());
                filter_menu_tree(&tree, &permissions, role)
            }
        };

        info!(
            role = %role,
            visible_sections = menu.items().len(),
            "resolved navigation"
        );

        Ok(NavigationView {
            role,
            portal_label: role.portal_label().to_owned(),
            menu,
        })
    }
}
