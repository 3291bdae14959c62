use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use paydesk_core::{AppResult, SessionIdentity};
use paydesk_domain::{MenuItem, Role, SectionKey};

use super::NavigationService;
use crate::menu_catalog::{MenuFamily, build_menu_tree};
use crate::navigation_ports::PermissionStore;
use crate::permission_resolver::PermissionSetResolver;

#[derive(Default)]
struct FakePermissionStore {
    items: HashMap<String, String>,
    reads: AtomicUsize,
}

impl FakePermissionStore {
    fn with_permissions(raw: &str) -> Self {
        Self {
            items: HashMap::from([("permissions".to_owned(), raw.to_owned())]),
            reads: AtomicUsize::new(0),
        }
    }
}

impl PermissionStore for FakePermissionStore {
    fn read_item(&self, key: &str) -> AppResult<Option<String>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        Ok(self.items.get(key).cloned())
    }
}

fn service(store: Arc<FakePermissionStore>) -> NavigationService {
    NavigationService::new(PermissionSetResolver::new(store))
}

fn child_titles(items: &[MenuItem], key: SectionKey) -> Vec<&str> {
    items
        .iter()
        .find(|item| item.key() == Some(key))
        .map(|item| item.children().iter().map(MenuItem::title).collect())
        .unwrap_or_default()
}

#[test]
fn super_admin_sees_full_tree_without_reading_storage() -> AppResult<()> {
    let store = Arc::new(FakePermissionStore::with_permissions(r#"["Dashboard"]"#));
    let view = service(store.clone()).navigation_for_role(Role::SuperAdmin)?;

    let full = build_menu_tree(MenuFamily::Administrator, Role::SuperAdmin)?;
    assert_eq!(view.menu, full);
    assert_eq!(view.portal_label, "Admin Panel");
    assert_eq!(store.reads.load(Ordering::SeqCst), 0);
    Ok(())
}

#[test]
fn admin_menu_follows_stored_permissions() -> AppResult<()> {
    let store = Arc::new(FakePermissionStore::with_permissions(
        r#"[{"name":"Dashboard","children":["Dashboard"]},{"name":"Vendors","children":["Vendor List"]}]"#,
    ));
    let view = service(store.clone()).navigation_for_role(Role::Admin)?;

    assert_eq!(view.menu.titles(), vec!["Dashboard", "Vendors"]);
    assert_eq!(
        child_titles(view.menu.items(), SectionKey::Dashboard),
        vec!["Dashboard"]
    );
    assert_eq!(
        child_titles(view.menu.items(), SectionKey::Vendors),
        vec!["Vendor List"]
    );
    assert_eq!(store.reads.load(Ordering::SeqCst), 1);
    Ok(())
}

#[test]
fn admin_with_unparseable_storage_sees_dashboard_only() -> AppResult<()> {
    let store = Arc::new(FakePermissionStore::with_permissions("Dashboard, Logs"));
    let view = service(store).navigation_for_role(Role::Admin)?;

    assert_eq!(view.menu.titles(), vec!["Dashboard"]);
    assert_eq!(
        child_titles(view.menu.items(), SectionKey::Dashboard),
        vec!["Dashboard"]
    );
    Ok(())
}

#[test]
fn admin_without_storage_sees_dashboard_only() -> AppResult<()> {
    let view = service(Arc::new(FakePermissionStore::default())).navigation_for_role(Role::Admin)?;
    assert_eq!(view.menu.titles(), vec!["Dashboard"]);
    Ok(())
}

#[test]
fn admin_with_empty_grant_list_sees_nothing() -> AppResult<()> {
    let store = Arc::new(FakePermissionStore::with_permissions("[]"));
    let view = service(store).navigation_for_role(Role::Admin)?;
    assert!(view.menu.is_empty());
    Ok(())
}

#[test]
fn franchise_menu_ignores_stored_permissions() -> AppResult<()> {
    let store = Arc::new(FakePermissionStore::with_permissions("[]"));
    let view = service(store.clone()).navigation_for_role(Role::Franchise)?;

    let full = build_menu_tree(MenuFamily::Franchise, Role::Franchise)?;
    assert_eq!(view.menu, full);
    assert_eq!(view.portal_label, "Franchise Portal");
    assert_eq!(store.reads.load(Ordering::SeqCst), 0);
    Ok(())
}

#[test]
fn session_role_is_parsed() -> AppResult<()> {
    let identity = SessionIdentity::new("m-17", "merchant");
    let view = service(Arc::new(FakePermissionStore::default())).navigation_for(&identity)?;

    assert_eq!(view.role, Role::Merchant);
    assert_eq!(view.portal_label, "Merchant Portal");
    Ok(())
}

#[test]
fn unknown_session_role_falls_back_to_merchant_menu() -> AppResult<()> {
    let identity = SessionIdentity::new("x-1", "auditor");
    let view = service(Arc::new(FakePermissionStore::default())).navigation_for(&identity)?;

    let merchant = build_menu_tree(MenuFamily::Merchant, Role::Merchant)?;
    assert_eq!(view.role, Role::Merchant);
    assert_eq!(view.menu, merchant);
    assert_eq!(view.portal_label, "Management System");
    Ok(())
}

#[test]
fn reports_section_is_complete_whenever_visible() -> AppResult<()> {
    let store = Arc::new(FakePermissionStore::with_permissions(r#"["Reports"]"#));
    let view = service(store).navigation_for_role(Role::Admin)?;

    let full = build_menu_tree(MenuFamily::Administrator, Role::Admin)?;
    assert_eq!(
        view.menu.section(SectionKey::Reports),
        full.section(SectionKey::Reports)
    );
    Ok(())
}

#[test]
fn navigation_view_serializes_for_renderers() -> AppResult<()> {
    let view = service(Arc::new(FakePermissionStore::default())).navigation_for_role(Role::Admin)?;
    let encoded = serde_json::to_value(&view).unwrap_or_default();

    assert_eq!(encoded["role"], "admin");
    assert_eq!(encoded["portal_label"], "Admin Panel");
    assert_eq!(encoded["menu"][0]["key"], "dashboard");
    assert_eq!(encoded["menu"][0]["action"]["kind"], "group");
    Ok(())
}
