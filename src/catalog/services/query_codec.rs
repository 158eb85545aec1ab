use crate::catalog::domain::{FilterQuery, FilterValue};
use std::borrow::Cow;

/// QueryCodec - serializes filter maps to URL query strings and back
///
/// The format is shared with bookmarked and shared storefront links:
/// one parameter per non-empty field, list values joined with commas.
///
/// The two directions are intentionally not exact inverses for lists:
/// `build_filter_query` joins list elements with commas, while
/// `parse_filter_query` only rebuilds lists from repeated keys and leaves
/// comma-joined values as single strings. Splitting happens one layer up in
/// `FilterQueryAdapter`.
pub struct QueryCodec;

impl QueryCodec {
    /// Builds a query string (without a leading `?`)
    ///
    /// Empty strings and empty lists are omitted. Keys and elements are
    /// percent-encoded; the commas joining list elements are left literal.
    pub fn build_filter_query(query: &FilterQuery) -> String {
        query
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(key, value)| {
                let encoded = match value {
                    FilterValue::Single(value) => urlencoding::encode(value).into_owned(),
                    FilterValue::Multiple(values) => values
                        .iter()
                        .map(|v| urlencoding::encode(v))
                        .collect::<Vec<_>>()
                        .join(","),
                };
                format!("{}={}", urlencoding::encode(key), encoded)
            })
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Parses a query string into a filter map
    ///
    /// A leading `?` is ignored, `+` decodes to a space, and a key without
    /// `=` gets an empty value. Repeated keys accumulate into a list; an
    /// earlier empty value is replaced instead of accumulated.
    pub fn parse_filter_query(raw: &str) -> FilterQuery {
        let raw = raw.strip_prefix('?').unwrap_or(raw);
        let mut query = FilterQuery::new();

        for pair in raw.split('&').filter(|pair| !pair.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let key = decode_component(key);
            let value = decode_component(value);

            let replaces_empty = matches!(
                query.get(&key),
                Some(FilterValue::Single(existing)) if existing.is_empty()
            );

            if replaces_empty {
                query.insert(key, value);
            } else {
                query.append(key, value);
            }
        }

        query
    }
}

fn decode_component(component: &str) -> String {
    let spaced = component.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => match urlencoding::decode_binary(spaced.as_bytes()) {
            Cow::Borrowed(bytes) => String::from_utf8_lossy(bytes).into_owned(),
            Cow::Owned(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        },
    }
}
