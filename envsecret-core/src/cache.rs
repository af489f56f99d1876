use std::collections::HashMap;
use std::sync::Arc;

use crate::error::StoreError;
use crate::secret::SecretBag;
use crate::store::Store;

/// Raw bags fetched during one resolution pass, keyed by identifier.
///
/// Each identifier reaches the store at most once; later lookups hand back the
/// same bag. Failed fetches are not remembered.
pub struct RetrievalCache<'s, S: ?Sized> {
    store: &'s S,
    entries: HashMap<String, Arc<SecretBag>>,
}

/// Whether a lookup was served from the cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    Hit,
    Miss,
}

impl<'s, S> RetrievalCache<'s, S>
where
    S: Store + ?Sized,
{
    pub fn new(store: &'s S) -> Self {
        Self {
            store,
            entries: HashMap::new(),
        }
    }

    pub fn get(&mut self, id: &str) -> Result<(Arc<SecretBag>, Lookup), StoreError> {
        if let Some(bag) = self.entries.get(id) {
            return Ok((Arc::clone(bag), Lookup::Hit));
        }

        let bag = Arc::new(self.store.get(id)?);
        self.entries.insert(id.to_string(), Arc::clone(&bag));
        Ok((bag, Lookup::Miss))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    struct CountingStore {
        calls: Cell<usize>,
        fail: bool,
    }

    impl Store for CountingStore {
        fn get(&self, id: &str) -> Result<SecretBag, StoreError> {
            self.calls.set(self.calls.get() + 1);
            if self.fail {
                return Err(StoreError::provider(id, "unavailable"));
            }
            let mut bag = SecretBag::new();
            bag.insert("value".to_string(), id.into());
            Ok(bag)
        }
    }

    #[test]
    fn repeated_lookups_share_one_fetch_and_one_bag() {
        let store = CountingStore {
            calls: Cell::new(0),
            fail: false,
        };
        let mut cache = RetrievalCache::new(&store);

        let (first, l1) = cache.get("a").unwrap();
        let (second, l2) = cache.get("a").unwrap();
        let (_, l3) = cache.get("b").unwrap();

        assert_eq!(store.calls.get(), 2);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!((l1, l2, l3), (Lookup::Miss, Lookup::Hit, Lookup::Miss));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn failures_are_not_cached() {
        let store = CountingStore {
            calls: Cell::new(0),
            fail: true,
        };
        let mut cache = RetrievalCache::new(&store);
        assert!(cache.get("a").is_err());
        assert!(cache.get("a").is_err());
        assert_eq!(store.calls.get(), 2);
        assert!(cache.is_empty());
    }
}
