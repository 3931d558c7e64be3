//! Input mapping contract for the properties builder.
//!
//! Some callers hold maps that cannot represent a missing value
//! (`HashMap<String, String>`), others keep explicit nulls around
//! (`HashMap<String, Option<String>>`). Both are accepted through the
//! [`PropertySource`] trait.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// A string-keyed mapping of raw configuration values.
pub trait PropertySource {
    /// Look up a key. `None` covers both a missing key and a key mapped to null.
    fn lookup(&self, key: &str) -> Option<&str>;

    /// Iterate all entries, null values included.
    fn entries(&self) -> Box<dyn Iterator<Item = (&str, Option<&str>)> + '_>;
}

impl<S: BuildHasher> PropertySource for HashMap<String, String, S> {
    fn lookup(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (&str, Option<&str>)> + '_> {
        Box::new(self.iter().map(|(k, v)| (k.as_str(), Some(v.as_str()))))
    }
}

impl<S: BuildHasher> PropertySource for HashMap<String, Option<String>, S> {
    fn lookup(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Option::as_deref)
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (&str, Option<&str>)> + '_> {
        Box::new(self.iter().map(|(k, v)| (k.as_str(), v.as_deref())))
    }
}

impl PropertySource for BTreeMap<String, String> {
    fn lookup(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (&str, Option<&str>)> + '_> {
        Box::new(self.iter().map(|(k, v)| (k.as_str(), Some(v.as_str()))))
    }
}

impl PropertySource for BTreeMap<String, Option<String>> {
    fn lookup(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Option::as_deref)
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (&str, Option<&str>)> + '_> {
        Box::new(self.iter().map(|(k, v)| (k.as_str(), v.as_deref())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_strict_map() {
        let mut map = HashMap::new();
        map.insert("a".to_string(), "1".to_string());
        assert_eq!(map.lookup("a"), Some("1"));
        assert_eq!(map.lookup("b"), None);
    }

    #[test]
    fn test_lookup_nullable_map_treats_null_as_missing() {
        let mut map = BTreeMap::new();
        map.insert("a".to_string(), None);
        map.insert("b".to_string(), Some("2".to_string()));
        assert_eq!(map.lookup("a"), None);
        assert_eq!(map.lookup("b"), Some("2"));
    }

    #[test]
    fn test_entries_report_nulls() {
        let mut map: HashMap<String, Option<String>> = HashMap::new();
        map.insert("a".to_string(), None);
        let entries: Vec<_> = map.entries().collect();
        assert_eq!(entries, vec![("a", None)]);
    }
}
