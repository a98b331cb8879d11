//! Per-node style data.

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use smallvec::SmallVec;

use crate::class_set::{ClassName, ClassSet};
use crate::key::VariantKey;
use crate::render::{translate_container_node_css_data, RenderedCss};
use crate::variant::{append_set_to_variant_css, append_to_variant_css, VariantCss, VariantPath};

/// Variant CSS per property permutation, in insertion order.
pub type CssData = IndexMap<VariantKey, VariantCss, FxBuildHasher>;

/// Style and visibility data attached to a design node.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeData {
    /// Composed variant CSS per variant key
    #[cfg_attr(feature = "serde", serde(default))]
    pub css: CssData,
    /// Variant keys in which the node is shown; `None` means always shown
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub visible_when: Option<SmallVec<[VariantKey; 2]>>,
}

impl NodeData {
    /// Create empty data (no styles, always visible).
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the tree for a variant key.
    pub fn with_css(mut self, key: VariantKey, tree: VariantCss) -> Self {
        self.css.insert(key, tree);
        self
    }

    /// Builder: only show the node in the given variant keys.
    pub fn with_visibility<I>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = VariantKey>,
    {
        self.visible_when = Some(keys.into_iter().collect());
        self
    }

    /// Get the tree for a variant key.
    pub fn css_for(&self, key: &str) -> Option<&VariantCss> {
        self.css.get(key)
    }

    /// Append one class at `path` in the tree of `key`.
    ///
    /// A new key starts from the unlabelled empty tree, so its root scope
    /// stays unconditional whatever path comes first.
    pub fn append(
        &mut self,
        key: VariantKey,
        path: impl Into<VariantPath>,
        class: impl Into<ClassName>,
    ) {
        let empty = VariantCss::new();
        let current = self.css.get(&key).unwrap_or(&empty);
        let tree = append_to_variant_css(Some(current), class, path);
        self.css.insert(key, tree);
    }

    /// Append a class set at `path` in the tree of `key`.
    pub fn append_set(&mut self, key: VariantKey, path: impl Into<VariantPath>, classes: ClassSet) {
        let empty = VariantCss::new();
        let current = self.css.get(&key).unwrap_or(&empty);
        let tree = append_set_to_variant_css(Some(current), classes, path);
        self.css.insert(key, tree);
    }

    /// Union `tree` into the tree of `key`.
    pub fn merge(&mut self, key: VariantKey, tree: &VariantCss) {
        let merged = crate::algo::union(self.css.get(&key), Some(tree));
        self.css.insert(key, merged);
    }

    /// Check if the node is shown for a variant key.
    pub fn is_visible_in(&self, key: &str) -> bool {
        self.visible_when
            .as_ref()
            .is_none_or(|keys| keys.iter().any(|k| k.as_str() == key))
    }

    /// Render every non-empty tree.
    pub fn translate_css(&self) -> RenderedCss {
        translate_container_node_css_data(&self.css)
    }
}
