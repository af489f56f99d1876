use std::io::ErrorKind;
use std::path::PathBuf;

use envsecret_core::{SecretBag, Store, StoreError};

use crate::local::bag_or_wildcard;

/// Reads secrets from files; the identifier is a path relative to `base_dir`.
#[derive(Debug, Clone)]
pub struct FileStore {
    pub base_dir: PathBuf,
}

impl FileStore {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }
}

impl Store for FileStore {
    fn get(&self, id: &str) -> Result<SecretBag, StoreError> {
        let path = self.base_dir.join(id);
        tracing::debug!(path = %path.display(), "reading secret file");
        let content = std::fs::read_to_string(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => StoreError::NotFound(id.to_string()),
            _ => StoreError::provider(id, format!("reading {}: {e}", path.display())),
        })?;
        Ok(bag_or_wildcard(content.trim_end_matches(['\n', '\r'])))
    }
}
