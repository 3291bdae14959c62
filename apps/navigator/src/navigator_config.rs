use std::env;
use std::path::PathBuf;

use paydesk_application::DEFAULT_PERMISSIONS_KEY;
use paydesk_core::AppError;
use tracing_subscriber::EnvFilter;

const DEFAULT_STORAGE_DIR: &str = ".paydesk/storage";
const DEFAULT_SUBJECT: &str = "local-user";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigatorConfig {
    pub role: String,
    pub subject: String,
    pub storage_dir: PathBuf,
    pub permissions_key: String,
    pub current_path: Option<String>,
}

impl NavigatorConfig {
    pub fn load() -> Result<Self, AppError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let role = required_non_empty(&lookup, "NAVIGATOR_ROLE")?;
        let subject = lookup("NAVIGATOR_SUBJECT")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SUBJECT.to_owned());
        let storage_dir = lookup("NAVIGATOR_STORAGE_DIR")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_STORAGE_DIR.to_owned());
        let permissions_key = lookup("NAVIGATOR_PERMISSIONS_KEY")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_PERMISSIONS_KEY.to_owned());
        let current_path = lookup("NAVIGATOR_CURRENT_PATH")
            .map(|value| value.trim().to_owned())
            .filter(|value| !value.is_empty());

        if current_path
            .as_deref()
            .is_some_and(|value| !value.starts_with('/'))
        {
            return Err(AppError::Validation(
                "NAVIGATOR_CURRENT_PATH must start with '/'".to_owned(),
            ));
        }

        Ok(Self {
            role: role.trim().to_owned(),
            subject,
            storage_dir: PathBuf::from(storage_dir),
            permissions_key,
            current_path,
        })
    }
}

pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn required_non_empty(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
) -> Result<String, AppError> {
    let value = lookup(name).ok_or_else(|| AppError::Validation(format!("{name} is required")))?;
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{name} must not be empty")));
    }

    Ok(value)
}
