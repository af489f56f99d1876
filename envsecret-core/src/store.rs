use std::rc::Rc;
use std::sync::Arc;

use crate::error::StoreError;
use crate::secret::SecretBag;

/// Source of secrets.
pub trait Store {
    /// Return the map of secret values for the given identifier.
    fn get(&self, id: &str) -> Result<SecretBag, StoreError>;
}

impl<S: Store + ?Sized> Store for &S {
    fn get(&self, id: &str) -> Result<SecretBag, StoreError> {
        (**self).get(id)
    }
}

impl<S: Store + ?Sized> Store for Box<S> {
    fn get(&self, id: &str) -> Result<SecretBag, StoreError> {
        (**self).get(id)
    }
}

impl<S: Store + ?Sized> Store for Arc<S> {
    fn get(&self, id: &str) -> Result<SecretBag, StoreError> {
        (**self).get(id)
    }
}

impl<S: Store + ?Sized> Store for Rc<S> {
    fn get(&self, id: &str) -> Result<SecretBag, StoreError> {
        (**self).get(id)
    }
}
