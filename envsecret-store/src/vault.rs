//! HashiCorp Vault store.
//!
//! The identifier is a logical path such as `secret/data/app`. The bag is the
//! `data` section of the read response; KV v2 engines wrap the secret in a
//! second `data` envelope, which callers unwrap themselves (e.g. with a
//! `MapSecret`).
//!
//! The HTTP reader is enabled via the `vault` feature.

use envsecret_core::{SecretBag, Store, StoreError};

/// Logical read access to a Vault server.
pub trait VaultReader {
    /// Read `path`, returning the response's `data` section, or `None` when
    /// nothing is stored there.
    fn read(&self, path: &str) -> Result<Option<SecretBag>, StoreError>;
}

pub struct VaultStore<R> {
    reader: R,
}

impl<R> VaultStore<R>
where
    R: VaultReader,
{
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R> Store for VaultStore<R>
where
    R: VaultReader,
{
    fn get(&self, id: &str) -> Result<SecretBag, StoreError> {
        self.reader
            .read(id)?
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }
}

#[cfg(feature = "vault")]
pub use self::http::{HttpVaultReader, VaultConfig};

#[cfg(feature = "vault")]
mod http {
    use std::time::Duration;

    use reqwest::blocking::Client;
    use reqwest::StatusCode;
    use secrecy::{ExposeSecret, SecretString};
    use serde::Deserialize;
    use url::Url;

    use super::{VaultReader, VaultStore};
    use envsecret_core::{SecretBag, StoreError};

    const DEFAULT_ADDRESS: &str = "http://127.0.0.1:8200";

    #[derive(Debug)]
    pub struct VaultConfig {
        pub address: Url,
        pub token: SecretString,
        pub timeout: Duration,
    }

    impl VaultConfig {
        pub fn new(address: Url, token: impl Into<String>) -> Self {
            Self {
                address,
                token: SecretString::from(token.into()),
                timeout: Duration::from_secs(30),
            }
        }

        /// Read `VAULT_ADDR` (defaulting to a local dev server) and `VAULT_TOKEN`.
        pub fn from_env() -> Result<Self, StoreError> {
            let address =
                std::env::var("VAULT_ADDR").unwrap_or_else(|_| DEFAULT_ADDRESS.to_string());
            let address = Url::parse(&address)
                .map_err(|e| StoreError::provider("", format!("invalid VAULT_ADDR: {e}")))?;
            let token = std::env::var("VAULT_TOKEN")
                .map_err(|_| StoreError::provider("", "VAULT_TOKEN is not set"))?;
            Ok(Self::new(address, token))
        }

        pub fn with_timeout(mut self, timeout: Duration) -> Self {
            self.timeout = timeout;
            self
        }
    }

    pub struct HttpVaultReader {
        client: Client,
        config: VaultConfig,
    }

    #[derive(Deserialize)]
    struct ReadResponse {
        data: Option<SecretBag>,
    }

    impl HttpVaultReader {
        pub fn new(config: VaultConfig) -> Result<Self, StoreError> {
            let client = Client::builder()
                .timeout(config.timeout)
                .build()
                .map_err(|e| {
                    StoreError::provider("", format!("failed to build HTTP client: {e}"))
                })?;
            Ok(Self { client, config })
        }

        fn url(&self, path: &str) -> Result<Url, StoreError> {
            self.config
                .address
                .join(&format!("v1/{}", path.trim_start_matches('/')))
                .map_err(|e| StoreError::provider(path, format!("invalid secret path: {e}")))
        }
    }

    impl VaultStore<HttpVaultReader> {
        pub fn from_env() -> Result<Self, StoreError> {
            HttpVaultReader::new(VaultConfig::from_env()?).map(Self::new)
        }
    }

    impl VaultReader for HttpVaultReader {
        fn read(&self, path: &str) -> Result<Option<SecretBag>, StoreError> {
            let url = self.url(path)?;
            tracing::debug!(path, "reading secret from vault");

            let resp = self
                .client
                .get(url)
                .header("X-Vault-Token", self.config.token.expose_secret())
                .send()
                .map_err(|e| StoreError::provider(path, e.to_string()))?;

            let status = resp.status();
            if status == StatusCode::NOT_FOUND {
                return Ok(None);
            }
            if !status.is_success() {
                return Err(StoreError::provider(path, format!("vault returned {status}")));
            }

            let body: ReadResponse = resp
                .json()
                .map_err(|e| StoreError::provider(path, format!("decoding vault response: {e}")))?;
            Ok(body.data)
        }
    }

}
