use envsecret_core::{SecretBag, Store, StoreError};

/// Tries each store in order, moving on only when a store reports `NotFound`.
#[derive(Default)]
pub struct CompositeStore {
    stores: Vec<Box<dyn Store>>,
}

impl CompositeStore {
    pub fn new(stores: Vec<Box<dyn Store>>) -> Self {
        Self { stores }
    }

    pub fn with(mut self, store: impl Store + 'static) -> Self {
        self.stores.push(Box::new(store));
        self
    }
}

impl Store for CompositeStore {
    fn get(&self, id: &str) -> Result<SecretBag, StoreError> {
        for (index, s) in self.stores.iter().enumerate() {
            match s.get(id) {
                Ok(bag) => return Ok(bag),
                Err(StoreError::NotFound(_)) => {
                    tracing::trace!(id, index, "secret not in store, trying next");
                    continue;
                }
                Err(e) => return Err(e),
            }
        }
        Err(StoreError::NotFound(id.to_string()))
    }
}
