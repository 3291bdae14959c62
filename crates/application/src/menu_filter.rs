use paydesk_domain::{
    MenuAction, MenuItem, MenuTree, PermissionSet, Role, SectionKey, VisibleMenuTree,
};

/// How the children of a section are checked against a permission set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChildGate {
    /// Each child needs its own permission.
    PerChild,
    /// The section needs its permission; its children follow it.
    Section,
}

impl ChildGate {
    fn for_section(key: Option<SectionKey>) -> Self {
        match key {
            Some(SectionKey::Reports) => Self::Section,
            _ => Self::PerChild,
        }
    }

    fn admits(self, child: &MenuItem, permissions: &PermissionSet, role: Role) -> bool {
        if !child.is_offered_to(role) {
            return false;
        }

        match self {
            Self::PerChild => permissions.contains(child.permission_key()),
            Self::Section => true,
        }
    }
}

/// Derives the visible tree of an administrator-family role.
///
/// Groups keep only the children that pass, and disappear when none do.
/// Links and placeholders need their own permission. Declaration order is
/// preserved.
#[must_use]
pub fn filter_menu_tree(
    tree: &MenuTree,
    permissions: &PermissionSet,
    role: Role,
) -> VisibleMenuTree {
    let mut visible = Vec::with_capacity(tree.items().len());

    for item in tree.items() {
        match item.action() {
            MenuAction::Group { children } => {
                let gate = ChildGate::for_section(item.key());
                if gate == ChildGate::Section && !permissions.contains(item.permission_key()) {
                    continue;
                }

                let surviving: Vec<MenuItem> = children
                    .iter()
                    .filter(|child| gate.admits(child, permissions, role))
                    .cloned()
                    .collect();

                if !surviving.is_empty() {
                    visible.push(item.with_children(surviving));
                }
            }
            MenuAction::Link { .. } | MenuAction::Placeholder => {
                if permissions.contains(item.permission_key()) {
                    visible.push(item.clone());
                }
            }
        }
    }

    VisibleMenuTree::new(visible)
}

#[cfg(test)]
mod tests {
    use paydesk_core::AppResult;
    use paydesk_domain::{MenuItem, MenuTree, PermissionSet, Role, SectionKey, VisibleMenuTree};
    use proptest::prelude::*;

    use super::filter_menu_tree;
    use crate::menu_catalog::{MenuFamily, build_menu_tree};
    use crate::navigation_policy::SUPER_ADMIN_PERMISSIONS;

    fn admin_tree(role: Role) -> AppResult<MenuTree> {
        build_menu_tree(MenuFamily::Administrator, role)
    }

    fn child_titles(tree: &VisibleMenuTree, key: SectionKey) -> Vec<&str> {
        tree.section(key)
            .map(|section| section.children().iter().map(MenuItem::title).collect())
            .unwrap_or_default()
    }

    #[test]
    fn super_admin_superset_keeps_whole_tree() -> AppResult<()> {
        let tree = admin_tree(Role::SuperAdmin)?;
        let visible = filter_menu_tree(
            &tree,
            &PermissionSet::from_static(SUPER_ADMIN_PERMISSIONS),
            Role::SuperAdmin,
        );
        assert_eq!(visible, tree);
        Ok(())
    }

    #[test]
    fn admin_with_no_permissions_sees_nothing() -> AppResult<()> {
        let visible = filter_menu_tree(&admin_tree(Role::Admin)?, &PermissionSet::new(), Role::Admin);
        assert!(visible.is_empty());
        Ok(())
    }

    #[test]
    fn admin_scenario_keeps_dashboard_and_vendor_list() -> AppResult<()> {
        let permissions = PermissionSet::from_static(&["Dashboard", "Vendor List"]);
        let visible = filter_menu_tree(&admin_tree(Role::Admin)?, &permissions, Role::Admin);

        assert_eq!(visible.titles(), vec!["Dashboard", "Vendors"]);
        assert_eq!(child_titles(&visible, SectionKey::Dashboard), vec!["Dashboard"]);
        assert_eq!(child_titles(&visible, SectionKey::Vendors), vec!["Vendor List"]);
        Ok(())
    }

    #[test]
    fn admin_never_sees_super_admin_dashboard_children() -> AppResult<()> {
        let permissions = PermissionSet::from_static(SUPER_ADMIN_PERMISSIONS);
        let mut tree_items = admin_tree(Role::Admin)?.items().to_vec();
        let super_dashboard = admin_tree(Role::SuperAdmin)?.items()[0].clone();
        tree_items[0] = super_dashboard;

        let visible = filter_menu_tree(&MenuTree::new(tree_items), &permissions, Role::Admin);
        assert_eq!(child_titles(&visible, SectionKey::Dashboard), vec!["Dashboard"]);
        Ok(())
    }

    #[test]
    fn my_permissions_needs_its_grant() -> AppResult<()> {
        let tree = admin_tree(Role::Admin)?;
        let without = filter_menu_tree(&tree, &PermissionSet::baseline(), Role::Admin);
        assert_eq!(child_titles(&without, SectionKey::Dashboard), vec!["Dashboard"]);

        let with = filter_menu_tree(
            &tree,
            &PermissionSet::from_static(&["Dashboard", "My Permissions"]),
            Role::Admin,
        );
        assert_eq!(
            child_titles(&with, SectionKey::Dashboard),
            vec!["Dashboard", "My Permissions"]
        );
        Ok(())
    }

    #[test]
    fn reports_children_follow_section_grant() -> AppResult<()> {
        let tree = admin_tree(Role::Admin)?;
        let full_reports = tree
            .section(SectionKey::Reports)
            .map(|section| section.children().len())
            .unwrap_or_default();

        let granted = filter_menu_tree(&tree, &PermissionSet::from_static(&["Reports"]), Role::Admin);
        assert_eq!(granted.titles(), vec!["Reports"]);
        assert_eq!(child_titles(&granted, SectionKey::Reports).len(), full_reports);

        let only_child = filter_menu_tree(
            &tree,
            &PermissionSet::from_static(&["Stock Reports"]),
            Role::Admin,
        );
        assert!(only_child.section(SectionKey::Reports).is_none());
        Ok(())
    }

    #[test]
    fn section_permission_alone_does_not_show_group() -> AppResult<()> {
        let visible = filter_menu_tree(
            &admin_tree(Role::Admin)?,
            &PermissionSet::from_static(&["Payment", "Inventory Management"]),
            Role::Admin,
        );
        assert!(visible.is_empty());
        Ok(())
    }

    #[test]
    fn top_level_links_need_their_permission() -> AppResult<()> {
        let tree = build_menu_tree(MenuFamily::Merchant, Role::Merchant)?;
        let visible = filter_menu_tree(&tree, &PermissionSet::from_static(&["Payout"]), Role::Admin);
        assert_eq!(visible.titles(), vec!["Payout"]);
        Ok(())
    }

    fn all_admin_permission_keys() -> Vec<String> {
        admin_tree(Role::SuperAdmin)
            .map(|tree| {
                tree.permission_keys()
                    .into_iter()
                    .map(ToOwned::to_owned)
                    .chain(std::iter::once("My Permissions".to_owned()))
                    .collect()
            })
            .unwrap_or_default()
    }

    proptest! {
        #[test]
        fn filtered_groups_are_never_empty(
            mask in proptest::collection::vec(any::<bool>(), 64),
            super_admin in any::<bool>(),
        ) {
            let role = if super_admin { Role::SuperAdmin } else { Role::Admin };
            let names: Vec<String> = all_admin_permission_keys()
                .into_iter()
                .zip(mask)
                .filter_map(|(name, keep)| keep.then_some(name))
                .collect();
            let permissions = names
                .into_iter()
                .filter_map(|name| paydesk_domain::PermissionName::new(name).ok())
                .collect::<PermissionSet>();

            let tree = admin_tree(role);
            prop_assert!(tree.is_ok());
            let tree = tree.unwrap_or_else(|_| MenuTree::new(Vec::new()));
            let visible = filter_menu_tree(&tree, &permissions, role);

            for item in visible.items() {
                prop_assert!(item.is_clickable());
                if item.is_group() {
                    prop_assert!(!item.children().is_empty());
                }
            }

            let declared: Vec<&str> = tree.items().iter().map(MenuItem::title).collect();
            let mut cursor = declared.iter();
            for title in visible.titles() {
                prop_assert!(cursor.any(|candidate| *candidate == title));
            }
        }
    }
}
