use envsecret_core::{SecretBag, Store, StoreError};

/// Key a non-JSON raw value is stored under.
pub const WILDCARD_KEY: &str = "*";

/// Store for local development: the identifier itself is the secret.
///
/// A JSON object identifier becomes the bag; anything else is returned as a
/// single value under [`WILDCARD_KEY`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }
}

impl Store for LocalStore {
    fn get(&self, id: &str) -> Result<SecretBag, StoreError> {
        Ok(bag_or_wildcard(id))
    }
}

/// Parse `raw` as a JSON object, falling back to a wildcard single-entry bag.
pub(crate) fn bag_or_wildcard(raw: &str) -> SecretBag {
    match serde_json::from_str::<SecretBag>(raw) {
        Ok(bag) => bag,
        Err(_) => {
            let mut bag = SecretBag::new();
            bag.insert(WILDCARD_KEY.to_string(), raw.into());
            bag
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_object_becomes_the_bag() {
        let bag = LocalStore::new().get(r#"{"key":"value"}"#).unwrap();
        assert_eq!(bag, json!({ "key": "value" }).as_object().cloned().unwrap());
    }

    #[test]
    fn plain_value_lands_under_wildcard() {
        let bag = LocalStore::new().get("value").unwrap();
        assert_eq!(bag, json!({ "*": "value" }).as_object().cloned().unwrap());
    }

    #[test]
    fn non_object_json_lands_under_wildcard() {
        let bag = LocalStore::new().get("[1,2]").unwrap();
        assert_eq!(bag["*"], "[1,2]");
    }
}
