use envsecret_core::{SecretBag, Store, StoreError};

use crate::local::bag_or_wildcard;

/// Reads secrets from environment variables named by the identifier.
///
/// Values are interpreted like [`LocalStore`](crate::LocalStore) identifiers:
/// a JSON object or a single wildcard value.
#[derive(Debug, Clone, Default)]
pub struct EnvStore {
    /// Optional prefix to apply to env var lookups.
    pub prefix: Option<String>,
}

impl EnvStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    fn var_name(&self, id: &str) -> String {
        match &self.prefix {
            None => id.to_string(),
            Some(p) => format!("{p}{id}"),
        }
    }
}

impl Store for EnvStore {
    fn get(&self, id: &str) -> Result<SecretBag, StoreError> {
        let name = self.var_name(id);
        match std::env::var(&name) {
            Ok(v) => Ok(bag_or_wildcard(&v)),
            Err(std::env::VarError::NotPresent) => Err(StoreError::NotFound(id.to_string())),
            Err(e) => Err(StoreError::provider(id, e.to_string())),
        }
    }
}
