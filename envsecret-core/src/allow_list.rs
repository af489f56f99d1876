use crate::secret::SecretBag;

/// Keys a field is permitted to see from its secret's bag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowList {
    keys: Vec<String>,
}

impl AllowList {
    /// Parse a comma separated tag. Segments are trimmed and blank ones dropped,
    /// so `","` or `" , "` count as no keys rather than two empty ones. `None`
    /// when nothing remains, meaning the field sees the whole bag.
    pub fn parse(tag: &str) -> Option<Self> {
        let keys = tag
            .split(',')
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(str::to_string)
            .collect::<Vec<_>>();
        if keys.is_empty() {
            None
        } else {
            Some(Self { keys })
        }
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Copy of `bag` holding only the listed keys. Listed keys missing from the
    /// bag are left out.
    pub fn filter(&self, bag: &SecretBag) -> SecretBag {
        let mut filtered = SecretBag::new();
        for key in &self.keys {
            if let Some(v) = bag.get(key) {
                filtered.insert(key.clone(), v.clone());
            }
        }
        filtered
    }

    /// Listed keys the bag does not contain.
    pub fn missing<'a>(&'a self, bag: &'a SecretBag) -> impl Iterator<Item = &'a str> + 'a {
        self.keys
            .iter()
            .filter(move |k| !bag.contains_key(k.as_str()))
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_tag_means_no_list() {
        assert_eq!(AllowList::parse(""), None);
        assert_eq!(AllowList::parse(","), None);
        assert_eq!(AllowList::parse(" , "), None);
    }

    #[test]
    fn parses_comma_separated_keys_in_order() {
        let list = AllowList::parse("key1, key3,").unwrap();
        assert_eq!(list.keys(), ["key1".to_string(), "key3".to_string()]);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn filter_keeps_only_listed_keys_and_drops_absent_ones() {
        let bag = json!({ "key1": "v1", "key2": "v2", "key3": "v3" })
            .as_object()
            .cloned()
            .unwrap();
        let list = AllowList::parse("key1,key3,key9").unwrap();
        let filtered = list.filter(&bag);
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered["key1"], "v1");
        assert_eq!(filtered["key3"], "v3");
        assert!(!filtered.contains_key("key9"));
        assert_eq!(list.missing(&bag).collect::<Vec<_>>(), vec!["key9"]);
    }
}
