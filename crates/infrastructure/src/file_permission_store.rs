use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use paydesk_application::PermissionStore;
use paydesk_core::{AppError, AppResult};
use tracing::debug;

/// File-backed storage adapter: each key is a `<key>.json` file in a directory.
#[derive(Debug, Clone)]
pub struct FilePermissionStore {
    directory: PathBuf,
}

impl FilePermissionStore {
    /// Creates a store rooted at a directory. The directory need not exist yet.
    #[must_use]
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    fn item_path(&self, key: &str) -> AppResult<PathBuf> {
        let is_valid = !key.is_empty()
            && key
                .chars()
                .all(|character| character.is_ascii_alphanumeric() || matches!(character, '_' | '-'));
        if !is_valid {
            return Err(AppError::Validation(format!(
                "storage key '{key}' must use only ASCII letters, digits, '_' or '-'"
            )));
        }

        Ok(self.directory.join(format!("{key}.json")))
    }
}

impl PermissionStore for FilePermissionStore {
    fn read_item(&self, key: &str) -> AppResult<Option<String>> {
        let path = self.item_path(key)?;

        match fs::read_to_string(&path) {
            Ok(raw) => {
                debug!(path = %path.display(), bytes = raw.len(), "read stored item");
                Ok(Some(raw))
            }
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
            Err(error) => Err(AppError::Internal(format!(
                "failed to read stored item '{}': {error}",
                path.display()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use paydesk_application::PermissionStore;
    use paydesk_core::{AppError, AppResult};

    use super::FilePermissionStore;

    fn scratch_directory() -> AppResult<tempfile::TempDir> {
        tempfile::tempdir()
            .map_err(|error| AppError::Internal(format!("failed to create scratch dir: {error}")))
    }

    #[test]
    fn reads_existing_item() -> AppResult<()> {
        let directory = scratch_directory()?;
        fs::write(directory.path().join("permissions.json"), r#"["Logs"]"#)
            .map_err(|error| AppError::Internal(error.to_string()))?;

        let store = FilePermissionStore::new(directory.path());
        assert_eq!(store.read_item("permissions")?.as_deref(), Some(r#"["Logs"]"#));
        Ok(())
    }

    #[test]
    fn missing_item_is_absent() -> AppResult<()> {
        let directory = scratch_directory()?;
        let store = FilePermissionStore::new(directory.path().join("never-created"));
        assert_eq!(store.read_item("permissions")?, None);
        Ok(())
    }

    #[test]
    fn unreadable_item_is_an_internal_error() -> AppResult<()> {
        let directory = scratch_directory()?;
        fs::create_dir(directory.path().join("permissions.json"))
            .map_err(|error| AppError::Internal(error.to_string()))?;

        let store = FilePermissionStore::new(directory.path());
        assert!(matches!(
            store.read_item("permissions"),
            Err(AppError::Internal(_))
        ));
        Ok(())
    }

    #[test]
    fn path_like_keys_are_rejected() -> AppResult<()> {
        let directory = scratch_directory()?;
        let store = FilePermissionStore::new(directory.path());
        assert!(matches!(
            store.read_item("../etc/passwd"),
            Err(AppError::Validation(_))
        ));
        assert!(store.read_item("").is_err());
        Ok(())
    }
}
