use std::fmt;

use secrecy::{ExposeSecret, SecretString};

use crate::error::DecodeError;
use crate::secret::{scalar_string, Base, KeyOverride, Secret, SecretBag};

/// Username and password pair.
#[derive(Default)]
pub struct LoginSecret {
    pub(crate) base: Base,
    pub username: String,
    pub password: Option<SecretString>,
}

impl LoginSecret {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            base: Base::new(id),
            ..Default::default()
        }
    }

    pub fn expose_password(&self) -> Option<&str> {
        self.password.as_ref().map(|p| p.expose_secret())
    }
}

impl Secret for LoginSecret {
    fn id(&self) -> &str {
        self.base.id()
    }

    fn decode(&mut self, bag: &SecretBag) -> Result<(), DecodeError> {
        let (Some(username), Some(password)) = (bag.get("username"), bag.get("password")) else {
            return Err(DecodeError::CredentialsNotFound);
        };
        self.username = scalar_string(username);
        self.password = Some(SecretString::from(scalar_string(password)));
        Ok(())
    }

    fn key_override(&self) -> KeyOverride {
        KeyOverride::Forbidden
    }
}

impl fmt::Debug for LoginSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginSecret")
            .field("id", &self.base.id())
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
