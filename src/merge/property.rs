//! Property permutation merging.
//!
//! A component set has one tree per property permutation
//! (`color-red_size-large`, ...). Styles common to every permutation belong
//! on the component itself; only the remainder needs per-permutation output.

use tracing::debug;

use crate::algo;
use crate::node::CssData;
use crate::render::{translate_container_node_css_data, translate_variant_css, RenderedCss};
use crate::variant::VariantCss;

/// Styles of a component set split into common and per-permutation parts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SharedCss {
    /// Classes every permutation has at the same variant path
    pub shared: VariantCss,
    /// What each permutation adds over `shared`
    pub per_key: CssData,
}

impl SharedCss {
    /// Render the shared tree.
    pub fn translate_shared(&self) -> String {
        translate_variant_css(&self.shared)
    }

    /// Render the per-permutation remainders, dropping keys with nothing to add.
    pub fn translate_divergent(&self) -> RenderedCss {
        translate_container_node_css_data(&self.per_key)
    }
}

/// Split permutation trees into their intersection and per-key differences.
///
/// With no permutations the shared tree is empty.
pub fn split_shared(data: &CssData) -> SharedCss {
    let mut trees = data.values();
    let shared = match trees.next() {
        None => VariantCss::new(),
        Some(first) => trees.fold(first.clone(), |acc, tree| acc.intersection(tree)),
    };

    let per_key = data
        .iter()
        .map(|(key, tree)| (key.clone(), tree.difference(&shared)))
        .collect();

    debug!(
        permutations = data.len(),
        shared = shared.class_count(),
        "split shared styles"
    );
    SharedCss { shared, per_key }
}

/// Union two permutation maps key by key.
///
/// Keys keep `left`'s order, keys only in `right` are appended.
pub fn union_css_data(left: &CssData, right: &CssData) -> CssData {
    let mut merged: CssData = left
        .iter()
        .map(|(key, tree)| (key.clone(), algo::union(Some(tree), right.get(key))))
        .collect();
    for (key, tree) in right {
        if !merged.contains_key(key) {
            merged.insert(key.clone(), tree.clone());
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::class_set::ClassSet;
    use crate::key::VariantKey;

    fn set(classes: &str) -> ClassSet {
        ClassSet::from_whitespace(classes)
    }

    fn key(props: &[(&str, &str)]) -> VariantKey {
        VariantKey::from_props(props.iter().copied())
    }

    fn permutations() -> CssData {
        let mut data = CssData::default();
        data.insert(
            key(&[("size", "small"), ("color", "red")]),
            VariantCss::from_classes(set("rounded bg-red px-2"))
                .nested(VariantCss::labelled("hover").classes(set("shadow bg-red-600"))),
        );
        data.insert(
            key(&[("size", "large"), ("color", "red")]),
            VariantCss::from_classes(set("rounded bg-red px-8"))
                .nested(VariantCss::labelled("hover").classes(set("shadow bg-red-600"))),
        );
        data.insert(
            key(&[("size", "small"), ("color", "blue")]),
            VariantCss::from_classes(set("rounded bg-blue px-2"))
                .nested(VariantCss::labelled("hover").classes(set("shadow"))),
        );
        data
    }

    #[test]
    fn test_split_shared() {
        let split = split_shared(&permutations());
        assert_eq!(split.translate_shared(), "rounded hover:shadow");

        let divergent = split.translate_divergent();
        assert_eq!(
            divergent.get("color-red_size-small").map(String::as_str),
            Some("bg-red px-2 hover:bg-red-600")
        );
        assert_eq!(
            divergent.get("color-red_size-large").map(String::as_str),
            Some("bg-red px-8 hover:bg-red-600")
        );
        assert_eq!(
            divergent.get("color-blue_size-small").map(String::as_str),
            Some("bg-blue px-2")
        );
    }

    #[test]
    fn test_split_identical_permutations() {
        let tree = VariantCss::from_classes(set("flex gap-2"));
        let mut data = CssData::default();
        data.insert(key(&[("size", "small")]), tree.clone());
        data.insert(key(&[("size", "large")]), tree.clone());

        let split = split_shared(&data);
        assert_eq!(split.shared, tree);
        assert!(split.translate_divergent().is_empty());
    }

    #[test]
    fn test_split_empty() {
        let split = split_shared(&CssData::default());
        assert_eq!(split.shared, VariantCss::new());
        assert!(split.per_key.is_empty());
    }

    #[test]
    fn test_union_css_data() {
        let mut left = CssData::default();
        left.insert(VariantKey::new("size-small"), VariantCss::from_classes(set("px-2")));
        left.insert(VariantKey::new("size-large"), VariantCss::from_classes(set("px-8")));

        let mut right = CssData::default();
        right.insert(VariantKey::new("size-large"), VariantCss::from_classes(set("text-lg")));
        right.insert(VariantKey::new("size-medium"), VariantCss::from_classes(set("px-4")));

        let merged = union_css_data(&left, &right);
        let keys: Vec<_> = merged.keys().map(VariantKey::as_str).collect();
        assert_eq!(keys, vec!["size-small", "size-large", "size-medium"]);
        assert_eq!(merged["size-large"].to_string(), "px-8 text-lg");
    }
}
