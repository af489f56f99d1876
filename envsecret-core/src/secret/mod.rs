mod keys;
mod login;
mod map;
mod string;

use std::convert::Infallible;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};
use serde_json::Value as JsonValue;

use crate::error::DecodeError;

pub use keys::{PrivateKeySecret, PublicKeySecret};
pub use login::LoginSecret;
pub use map::MapSecret;
pub use string::StringSecret;

/// Raw key-value data a `Store` returns for one identifier.
pub type SecretBag = serde_json::Map<String, JsonValue>;

/// How many allow-list keys a secret type accepts on its field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOverride {
    Unrestricted,
    AtMostOne,
    Forbidden,
}

/// A configuration field whose value is fetched from a `Store`.
///
/// Custom secret types implement this to be populated by [`process`](crate::process::process).
pub trait Secret {
    /// Identifier of the secret in the store being used, e.g. an ARN for AWS
    /// Secrets Manager or a Vault path. Empty when unset.
    fn id(&self) -> &str;

    /// Populate the secret from the (possibly allow-list filtered) bag.
    fn decode(&mut self, bag: &SecretBag) -> Result<(), DecodeError>;

    fn key_override(&self) -> KeyOverride {
        KeyOverride::Unrestricted
    }
}

/// Identifier shared by every built-in secret type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Base {
    id: String,
}

impl Base {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

impl FromStr for Base {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl<'de> Deserialize<'de> for Base {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(Base::new)
    }
}

// Built-in secrets load from a bare identifier string.
macro_rules! identifier_loading {
    ($($ty:ident),+ $(,)?) => {
        $(
            impl From<Base> for $ty {
                fn from(base: Base) -> Self {
                    Self {
                        base,
                        ..Default::default()
                    }
                }
            }

            impl FromStr for $ty {
                type Err = Infallible;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    Ok(Self::new(s))
                }
            }

            impl<'de> Deserialize<'de> for $ty {
                fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
                where
                    D: Deserializer<'de>,
                {
                    Base::deserialize(deserializer).map(Self::from)
                }
            }
        )+
    };
}

identifier_loading!(
    StringSecret,
    MapSecret,
    LoginSecret,
    PublicKeySecret,
    PrivateKeySecret,
);

/// Find a single value: the only entry when the bag holds exactly one,
/// otherwise the entry under `key`. Empty when nothing matches.
pub(crate) fn find(bag: &SecretBag, key: &str) -> String {
    if bag.len() == 1 {
        return bag.values().next().map(scalar_string).unwrap_or_default();
    }
    bag.get(key).map(scalar_string).unwrap_or_default()
}

/// String form of a bag value. Non-string values render as JSON text and
/// `null` renders empty, so a decoder treats a null value as absent.
pub(crate) fn scalar_string(value: &JsonValue) -> String {
    match value {
        JsonValue::String(s) => s.clone(),
        JsonValue::Null => String::new(),
        other => other.to_string(),
    }
}
