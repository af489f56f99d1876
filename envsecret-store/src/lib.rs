#![forbid(unsafe_code)]

//! Secret stores for `envsecret-core`.
//!
//! `LocalStore`, `EnvStore`, `FileStore` and `CompositeStore` are always
//! available. The AWS Secrets Manager client sits behind the `aws` feature and
//! the Vault HTTP client behind the `vault` feature; both stores accept any
//! client implementing their small client trait.

mod composite;
mod env;
mod file;
mod local;
mod secretsmanager;
mod vault;

pub use crate::composite::CompositeStore;
pub use crate::env::EnvStore;
pub use crate::file::FileStore;
pub use crate::local::LocalStore;
pub use crate::secretsmanager::{SecretsManagerClient, SecretsManagerStore};
pub use crate::vault::{VaultReader, VaultStore};

#[cfg(feature = "aws")]
pub use crate::secretsmanager::AwsSecretsManagerClient;
#[cfg(feature = "vault")]
pub use crate::vault::{HttpVaultReader, VaultConfig};

pub use envsecret_core::{SecretBag, Store, StoreError};
