use paydesk_application::NavigationView;
use paydesk_domain::{
    MenuIcon, MenuItem, NavigationUiState, Role, SectionKey, is_active_link, is_parent_active,
};
use serde::Serialize;

const EMPTY_MENU_MESSAGE: &str = "No permissions available";

#[derive(Debug, Serialize)]
pub struct RenderedNavigation {
    role: Role,
    portal_label: String,
    collapsed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    notice: Option<&'static str>,
    sections: Vec<RenderedSection>,
}

#[derive(Debug, Serialize)]
struct RenderedSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    key: Option<SectionKey>,
    #[serde(skip_serializing_if = "Option::is_none")]
    icon: Option<MenuIcon>,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<String>,
    clickable: bool,
    active: bool,
    chevron: bool,
    expanded: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<RenderedLink>,
}

#[derive(Debug, Serialize)]
struct RenderedLink {
    title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    icon: Option<MenuIcon>,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<String>,
    active: bool,
}

/// Projects the visible menu through the rail state.
///
/// Labels and chevrons need an expanded rail; children need their section open.
pub fn render(
    view: &NavigationView,
    state: &NavigationUiState,
    current_path: Option<&str>,
) -> RenderedNavigation {
    let sections = view
        .menu
        .items()
        .iter()
        .map(|item| render_section(item, state, current_path))
        .collect();

    RenderedNavigation {
        role: view.role,
        portal_label: view.portal_label.clone(),
        collapsed: state.is_collapsed(),
        notice: view.menu.is_empty().then_some(EMPTY_MENU_MESSAGE),
        sections,
    }
}

fn render_section(
    item: &MenuItem,
    state: &NavigationUiState,
    current_path: Option<&str>,
) -> RenderedSection {
    let active = current_path.is_some_and(|path| {
        if item.is_group() {
            is_parent_active(item, path)
        } else {
            is_active_link(item, path)
        }
    });
    let expanded = item.is_group() && item.key().is_some_and(|key| state.shows_children(key));

    let children = if expanded {
        item.children()
            .iter()
            .map(|child| RenderedLink {
                title: child.title().to_owned(),
                icon: child.icon(),
                path: child.path().map(ToOwned::to_owned),
                active: current_path.is_some_and(|path| is_active_link(child, path)),
            })
            .collect()
    } else {
        Vec::new()
    };

    RenderedSection {
        label: state.shows_labels().then(|| item.title().to_owned()),
        key: item.key(),
        icon: item.icon(),
        path: item.path().map(ToOwned::to_owned),
        clickable: item.is_clickable(),
        active,
        chevron: item.is_group() && state.shows_labels(),
        expanded,
        children,
    }
}
