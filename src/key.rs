//! Variant keys
//!
//! A variant key names one permutation of a component's design properties:
//! the `key-value` pairs sorted by key and joined with `_`
//! (`color-red_size-large`). The empty key stands for a component without
//! properties.

use std::borrow::Borrow;
use std::fmt;

use compact_str::CompactString;
use smallvec::SmallVec;

use crate::error::{CssError, CssResult};

/// Separator between `key-value` pairs.
pub const PAIR_SEPARATOR: char = '_';

/// Separator between a property key and its value.
pub const VALUE_SEPARATOR: char = '-';

/// Identifier of one property permutation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct VariantKey(CompactString);

impl VariantKey {
    /// Wrap an already formatted key.
    pub fn new(raw: impl Into<CompactString>) -> Self {
        Self(raw.into())
    }

    /// The key of a component without properties.
    pub fn base() -> Self {
        Self::default()
    }

    /// Build a key from property pairs, in any order.
    pub fn from_props<I, K, V>(props: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut pairs: SmallVec<[(K, V); 4]> = props.into_iter().collect();
        pairs.sort_by(|a, b| a.0.as_ref().cmp(b.0.as_ref()));

        let mut key = CompactString::default();
        for (i, (name, value)) in pairs.iter().enumerate() {
            if i > 0 {
                key.push(PAIR_SEPARATOR);
            }
            key.push_str(name.as_ref());
            key.push(VALUE_SEPARATOR);
            key.push_str(value.as_ref());
        }
        Self(key)
    }

    /// Split the key back into `(key, value)` pairs.
    ///
    /// The first `-` of each pair separates key from value, so values may
    /// contain dashes but keys may not.
    pub fn props(&self) -> CssResult<Vec<(&str, &str)>> {
        if self.is_base() {
            return Ok(Vec::new());
        }
        self.0
            .split(PAIR_SEPARATOR)
            .map(|pair| {
                pair.split_once(VALUE_SEPARATOR)
                    .filter(|(name, _)| !name.is_empty())
                    .ok_or_else(|| CssError::invalid_key(pair))
            })
            .collect()
    }

    /// Check if this is the key of a component without properties.
    pub fn is_base(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VariantKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for VariantKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for VariantKey {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_props_sorts_by_key() {
        let key = VariantKey::from_props([("size", "large"), ("color", "red")]);
        assert_eq!(key.as_str(), "color-red_size-large");

        let same = VariantKey::from_props(vec![
            ("color".to_string(), "red".to_string()),
            ("size".to_string(), "large".to_string()),
        ]);
        assert_eq!(key, same);
    }

    #[test]
    fn test_base_key() {
        let props: [(&str, &str); 0] = [];
        let key = VariantKey::from_props(props);
        assert!(key.is_base());
        assert_eq!(key, VariantKey::base());
        assert!(key.props().unwrap().is_empty());
    }

    #[test]
    fn test_props_round_trip() {
        let key = VariantKey::from_props([("state", "is-open"), ("color", "red")]);
        assert_eq!(
            key.props().unwrap(),
            vec![("color", "red"), ("state", "is-open")]
        );
    }

    #[test]
    fn test_invalid_key() {
        let err = VariantKey::new("color-red_large").props().unwrap_err();
        assert_eq!(err, CssError::InvalidVariantKey("large".to_string()));

        assert!(VariantKey::new("-red").props().is_err());
    }
}
