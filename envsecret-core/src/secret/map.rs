use std::fmt;

use crate::error::DecodeError;
use crate::secret::{Base, Secret, SecretBag};

/// Every key of a secret, possibly narrowed by the field's allow-list.
#[derive(Default)]
pub struct MapSecret {
    pub(crate) base: Base,
    pub values: SecretBag,
}

impl MapSecret {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            base: Base::new(id),
            values: SecretBag::new(),
        }
    }
}

impl Secret for MapSecret {
    fn id(&self) -> &str {
        self.base.id()
    }

    fn decode(&mut self, bag: &SecretBag) -> Result<(), DecodeError> {
        self.values = bag.clone();
        Ok(())
    }
}

impl fmt::Debug for MapSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapSecret")
            .field("id", &self.base.id())
            .field("keys", &self.values.keys().collect::<Vec<_>>())
            .finish()
    }
}
