use std::fmt;

use secrecy::{ExposeSecret, SecretString};

use crate::error::DecodeError;
use crate::secret::{find, Base, KeyOverride, Secret, SecretBag};

const VALUE_KEY: &str = "value";

/// General purpose secret holding a single string value.
#[derive(Default)]
pub struct StringSecret {
    pub(crate) base: Base,
    pub value: Option<SecretString>,
}

impl StringSecret {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            base: Base::new(id),
            value: None,
        }
    }

    pub fn expose(&self) -> Option<&str> {
        self.value.as_ref().map(|v| v.expose_secret())
    }
}

impl Secret for StringSecret {
    fn id(&self) -> &str {
        self.base.id()
    }

    fn decode(&mut self, bag: &SecretBag) -> Result<(), DecodeError> {
        let value = find(bag, VALUE_KEY);
        if value.is_empty() {
            return Err(DecodeError::ValueNotFound { key: VALUE_KEY });
        }
        self.value = Some(SecretString::from(value));
        Ok(())
    }

    fn key_override(&self) -> KeyOverride {
        KeyOverride::AtMostOne
    }
}

impl fmt::Debug for StringSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StringSecret")
            .field("id", &self.base.id())
            .field("value", &self.value.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
