use serde::{Deserialize, Serialize};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

/// Value of a single query-string field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    Single(String),
    Multiple(Vec<String>),
}

impl FilterValue {
    /// True for values the query string omits entirely
    pub fn is_empty(&self) -> bool {
        match self {
            FilterValue::Single(value) => value.is_empty(),
            FilterValue::Multiple(values) => values.is_empty(),
        }
    }

    /// First value, for fields that are read as scalars
    pub fn first(&self) -> Option<&str> {
        match self {
            FilterValue::Single(value) => Some(value.as_str()),
            FilterValue::Multiple(values) => values.first().map(String::as_str),
        }
    }

    /// Every element, with comma-joined scalars split apart and empty
    /// elements dropped
    ///
    /// Elements are not trimmed, so whitespace inside a value survives a
    /// round trip through the query string.
    pub fn split_values(&self) -> Vec<String> {
        let raw: Vec<&str> = match self {
            FilterValue::Single(value) => vec![value.as_str()],
            FilterValue::Multiple(values) => values.iter().map(String::as_str).collect(),
        };

        raw.into_iter()
            .flat_map(|value| value.split(','))
            .filter(|value| !value.is_empty())
            .map(str::to_string)
            .collect()
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        FilterValue::Single(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        FilterValue::Single(value)
    }
}

impl From<bool> for FilterValue {
    fn from(value: bool) -> Self {
        FilterValue::Single(value.to_string())
    }
}

impl From<f64> for FilterValue {
    fn from(value: f64) -> Self {
        FilterValue::Single(value.to_string())
    }
}

impl From<Vec<String>> for FilterValue {
    fn from(values: Vec<String>) -> Self {
        FilterValue::Multiple(values)
    }
}

impl From<Vec<&str>> for FilterValue {
    fn from(values: Vec<&str>) -> Self {
        FilterValue::Multiple(values.into_iter().map(str::to_string).collect())
    }
}

/// Loosely typed filter map, the wire form of a filter specification
///
/// Keys are kept in lexicographic order so serialized query strings are
/// stable. Unknown keys are carried through untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterQuery(BTreeMap<String, FilterValue>);

impl FilterQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FilterValue>) {
        self.0.insert(key.into(), value.into());
    }

    /// Adds a value under `key`, turning an existing entry into a list
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let value = value.into();
        match self.0.entry(key.into()) {
            Entry::Vacant(slot) => {
                slot.insert(FilterValue::Single(value));
            }
            Entry::Occupied(slot) => {
                let existing = slot.into_mut();
                let promoted = match &mut *existing {
                    FilterValue::Multiple(values) => {
                        values.push(value);
                        return;
                    }
                    FilterValue::Single(previous) => vec![std::mem::take(previous), value],
                };
                *existing = FilterValue::Multiple(promoted);
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&FilterValue> {
        self.0.get(key)
    }

    /// First value of a field, ignoring empty strings
    pub fn first(&self, key: &str) -> Option<&str> {
        self.get(key)
            .and_then(FilterValue::first)
            .filter(|value| !value.is_empty())
    }

    /// All values of a field, splitting comma-joined scalars
    pub fn values(&self, key: &str) -> Vec<String> {
        self.get(key).map(FilterValue::split_values).unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &FilterValue)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_values_single_with_commas() {
        let value = FilterValue::from("cards,sealed,,figures");
        assert_eq!(value.split_values(), vec!["cards", "sealed", "figures"]);
    }

    #[test]
    fn test_split_values_keeps_surrounding_whitespace() {
        let value = FilterValue::from(vec![" holo", "v 1 ,promo"]);
        assert_eq!(value.split_values(), vec![" holo", "v 1 ", "promo"]);
    }

    #[test]
    fn test_split_values_multiple() {
        let value = FilterValue::from(vec!["a,b", "c"]);
        assert_eq!(value.split_values(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_from_scalars() {
        assert_eq!(FilterValue::from(true), FilterValue::Single("true".to_string()));
        assert_eq!(FilterValue::from(100.0), FilterValue::Single("100".to_string()));
        assert_eq!(FilterValue::from(12.5), FilterValue::Single("12.5".to_string()));
    }

    #[test]
    fn test_append_promotes_to_list() {
        let mut query = FilterQuery::new().with("tags", "foil");
        query.append("tags", "holo");
        query.append("tags", "promo");
        assert_eq!(
            query.get("tags"),
            Some(&FilterValue::from(vec!["foil", "holo", "promo"]))
        );
    }

    #[test]
    fn test_first_skips_empty() {
        let query = FilterQuery::new().with("search", "").with("vendor", "v-1");
        assert_eq!(query.first("search"), None);
        assert_eq!(query.first("vendor"), Some("v-1"));
        assert_eq!(query.first("missing"), None);
    }

    #[test]
    fn test_serde_shape() {
        let query = FilterQuery::new()
            .with("category", "cards")
            .with("tags", vec!["a", "b"]);
        let json = serde_json::to_string(&query).unwrap();
        assert_eq!(json, r#"{"category":"cards","tags":["a","b"]}"#);

        let parsed: FilterQuery = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, query);
    }
}
