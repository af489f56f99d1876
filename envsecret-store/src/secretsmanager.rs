//! AWS Secrets Manager store.
//!
//! The identifier is either the ARN or the name of the secret. Its secret
//! string must hold a JSON object, which becomes the bag.
//!
//! The SDK client is enabled via the `aws` feature.

use envsecret_core::{SecretBag, Store, StoreError};

/// The slice of a Secrets Manager client this store needs.
pub trait SecretsManagerClient {
    /// Return the secret string for an ARN or secret name.
    fn secret_string(&self, id: &str) -> Result<String, StoreError>;
}

pub struct SecretsManagerStore<C> {
    client: C,
}

impl<C> SecretsManagerStore<C>
where
    C: SecretsManagerClient,
{
    pub fn new(client: C) -> Self {
        Self { client }
    }
}

impl<C> Store for SecretsManagerStore<C>
where
    C: SecretsManagerClient,
{
    fn get(&self, id: &str) -> Result<SecretBag, StoreError> {
        let raw = self.client.secret_string(id)?;
        serde_json::from_str(&raw).map_err(|source| StoreError::Malformed {
            id: id.to_string(),
            source,
        })
    }
}

#[cfg(feature = "aws")]
pub use self::aws::AwsSecretsManagerClient;

#[cfg(feature = "aws")]
mod aws {
    use aws_sdk_secretsmanager::Client;
    use tokio::runtime::{Builder, Runtime};

    use super::{SecretsManagerClient, SecretsManagerStore};
    use envsecret_core::StoreError;

    /// Blocking adapter over the async SDK client. Owns a current-thread
    /// runtime, so it must not be used from inside another tokio runtime.
    pub struct AwsSecretsManagerClient {
        client: Client,
        runtime: Runtime,
    }

    impl AwsSecretsManagerClient {
        /// Create from an existing SDK client.
        pub fn new(client: Client) -> Result<Self, StoreError> {
            Ok(Self {
                client,
                runtime: runtime()?,
            })
        }

        /// Create with default AWS config (env vars, instance metadata, etc.).
        pub fn from_env() -> Result<Self, StoreError> {
            let runtime = runtime()?;
            let config =
                runtime.block_on(aws_config::load_defaults(aws_config::BehaviorVersion::latest()));
            Ok(Self {
                client: Client::new(&config),
                runtime,
            })
        }
    }

    impl SecretsManagerStore<AwsSecretsManagerClient> {
        pub fn from_env() -> Result<Self, StoreError> {
            AwsSecretsManagerClient::from_env().map(Self::new)
        }
    }

    impl SecretsManagerClient for AwsSecretsManagerClient {
        fn secret_string(&self, id: &str) -> Result<String, StoreError> {
            tracing::debug!(id, "fetching secret from AWS Secrets Manager");
            let resp = self
                .runtime
                .block_on(self.client.get_secret_value().secret_id(id).send())
                .map_err(|e| StoreError::provider(id, e.to_string()))?;

            resp.secret_string()
                .map(str::to_string)
                .ok_or_else(|| StoreError::provider(id, "secret has no string value"))
        }
    }

    fn runtime() -> Result<Runtime, StoreError> {
        Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| StoreError::provider("", format!("failed to start runtime: {e}")))
    }
}
