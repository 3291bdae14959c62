//! Paydesk navigator: resolves back-office navigation for a session and
//! prints it as JSON.

#![forbid(unsafe_code)]

mod navigator_config;
mod render;

use std::sync::Arc;

use paydesk_application::{NavigationService, PermissionSetResolver};
use paydesk_core::{AppError, SessionIdentity};
use paydesk_domain::NavigationUiState;
use paydesk_infrastructure::FilePermissionStore;
use tracing::info;

use crate::navigator_config::{NavigatorConfig, init_tracing};

fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = NavigatorConfig::load()?;
    info!(
        role = %config.role,
        subject = %config.subject,
        storage_dir = %config.storage_dir.display(),
        permissions_key = %config.permissions_key,
        "paydesk-navigator started"
    );

    let store = Arc::new(FilePermissionStore::new(config.storage_dir.clone()));
    let resolver = PermissionSetResolver::with_storage_key(store, config.permissions_key.clone());
    let navigation_service = NavigationService::new(resolver);

    let identity = SessionIdentity::new(config.subject.clone(), config.role.clone());
    let view = navigation_service.navigation_for(&identity)?;

    let mut ui_state = NavigationUiState::new();
    if let Some(path) = config.current_path.as_deref() {
        ui_state.reveal_route(view.menu.items(), path);
    }
    let rendered = render::render(&view, &ui_state, config.current_path.as_deref());

    let output = serde_json::to_string_pretty(&rendered)
        .map_err(|error| AppError::Internal(format!("failed to encode navigation: {error}")))?;
    println!("{output}");

    Ok(())
}
