//! Utility string rendering for variant CSS trees
//!
//! Serializes trees depth-first into a single line using variant prefixes
//! with parenthesized groups:
//!
//! ```text
//! bg-red px-4 hover:(bg-blue px-8) focus:(bg-green disabled:bg-gray-300)
//! ```
//!
//! A scope whose content renders to exactly one token is written without
//! parentheses (`hover:bg-red`). Scopes without any class render nothing.

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;

use crate::key::VariantKey;
use crate::node::CssData;
use crate::variant::{Segment, VariantCss};

// =============================================================================
// RenderConfig
// =============================================================================

/// Default separator between a variant label and its content.
pub const DEFAULT_SEPARATOR: char = ':';

/// Configuration for utility string rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    /// Emit classes of each set in alphabetical order instead of insertion order.
    pub sort_classes: bool,
    /// Parenthesize variant content even when it is a single token.
    pub always_group: bool,
    /// Separator between a variant label and its content.
    pub separator: char,
}

impl RenderConfig {
    /// Insertion order, minimal parentheses, `:` separator.
    pub const DEFAULT: Self = Self {
        sort_classes: false,
        always_group: false,
        separator: DEFAULT_SEPARATOR,
    };

    /// Like [`DEFAULT`](Self::DEFAULT) but with alphabetical class order,
    /// so equal sets render identically regardless of how they were built.
    pub const CANONICAL: Self = Self {
        sort_classes: true,
        always_group: false,
        separator: DEFAULT_SEPARATOR,
    };

    /// Create a new config.
    pub fn new(sort_classes: bool, always_group: bool) -> Self {
        Self {
            sort_classes,
            always_group,
            separator: DEFAULT_SEPARATOR,
        }
    }

    /// Set whether classes of each set are emitted in alphabetical order.
    pub fn with_sort_classes(mut self, sort_classes: bool) -> Self {
        self.sort_classes = sort_classes;
        self
    }

    /// Set a custom variant separator.
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Set whether single tokens are parenthesized too.
    pub fn with_always_group(mut self, always_group: bool) -> Self {
        self.always_group = always_group;
        self
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

// =============================================================================
// Tree rendering
// =============================================================================

/// Render a tree with the default configuration.
pub fn translate_variant_css(tree: &VariantCss) -> String {
    translate_variant_css_with(tree, &RenderConfig::DEFAULT)
}

/// Render a tree to a single-line utility string.
pub fn translate_variant_css_with(tree: &VariantCss, config: &RenderConfig) -> String {
    let mut tokens = Vec::new();
    render_scope(tree, config, &mut tokens);
    tokens.join(" ")
}

/// Render a scope, prefixing its label if it has one.
fn render_scope(node: &VariantCss, config: &RenderConfig, tokens: &mut Vec<String>) {
    match node.label() {
        None => render_segments(&node.css, config, tokens),
        Some(label) => render_variant(label, &node.css, config, tokens),
    }
}

fn render_segments(segments: &[Segment], config: &RenderConfig, tokens: &mut Vec<String>) {
    for segment in segments {
        match segment {
            Segment::Classes(set) if config.sort_classes => {
                tokens.extend(set.sorted().into_iter().map(String::from));
            }
            Segment::Classes(set) => tokens.extend(set.iter().map(String::from)),
            Segment::Nested(node) => render_scope(node, config, tokens),
        }
    }
}

fn render_variant(
    label: &str,
    segments: &[Segment],
    config: &RenderConfig,
    tokens: &mut Vec<String>,
) {
    let mut inner = Vec::new();
    render_segments(segments, config, &mut inner);

    let separator = config.separator;
    match inner.as_slice() {
        [] => {}
        [single] if !config.always_group => tokens.push(format!("{label}{separator}{single}")),
        _ => tokens.push(format!("{label}{separator}({})", inner.join(" "))),
    }
}

// =============================================================================
// Container data rendering
// =============================================================================

/// Rendered utility strings keyed by variant key.
pub type RenderedCss = IndexMap<VariantKey, String, FxBuildHasher>;

/// Render every entry of a container's css data, dropping empty results.
pub fn translate_container_node_css_data(data: &CssData) -> RenderedCss {
    translate_container_node_css_data_with(data, &RenderConfig::DEFAULT)
}

/// Render every entry of a container's css data with `config`.
pub fn translate_container_node_css_data_with(data: &CssData, config: &RenderConfig) -> RenderedCss {
    data.iter()
        .filter_map(|(key, tree)| render_entry(key, tree, config))
        .collect()
}

/// Parallel version of [`translate_container_node_css_data_with`].
///
/// Entries keep the input order.
#[cfg(feature = "parallel")]
pub fn par_translate_container_node_css_data(data: &CssData, config: &RenderConfig) -> RenderedCss {
    use rayon::prelude::*;

    data.par_iter()
        .filter_map(|(key, tree)| render_entry(key, tree, config))
        .collect()
}

fn render_entry(key: &VariantKey, tree: &VariantCss, config: &RenderConfig) -> Option<(VariantKey, String)> {
    if tree.is_empty() {
        return None;
    }
    let rendered = translate_variant_css_with(tree, config);
    (!rendered.is_empty()).then(|| (key.clone(), rendered))
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::class_set::ClassSet;

    fn set(classes: &str) -> ClassSet {
        ClassSet::from_whitespace(classes)
    }

    fn scope(label: &str, classes: &str) -> VariantCss {
        VariantCss::labelled(label).classes(set(classes))
    }

    fn nested_tree() -> VariantCss {
        VariantCss::from_classes(set("bg-red px-4"))
            .nested(scope("hover", "bg-blue px-8"))
            .nested(scope("focus", "bg-green px-12").nested(scope("disabled", "bg-gray-300")))
    }

    #[test]
    fn test_render_single_class_variant() {
        assert_eq!(translate_variant_css(&scope("hover", "bg-red")), "hover:bg-red");
    }

    #[test]
    fn test_render_multi_class_variant() {
        assert_eq!(
            translate_variant_css(&scope("hover", "bg-red px-4")),
            "hover:(bg-red px-4)"
        );
    }

    #[test]
    fn test_render_nested() {
        assert_eq!(
            translate_variant_css(&nested_tree()),
            "bg-red px-4 hover:(bg-blue px-8) focus:(bg-green px-12 disabled:bg-gray-300)"
        );
    }

    #[test]
    fn test_render_empty_scopes_vanish() {
        let tree = VariantCss::from_classes(set("bg-red"))
            .nested(VariantCss::labelled("hover"))
            .nested(VariantCss::labelled("focus").nested(VariantCss::labelled("disabled")));
        assert_eq!(translate_variant_css(&tree), "bg-red");
        assert_eq!(translate_variant_css(&VariantCss::new()), "");
    }

    #[test]
    fn test_render_chained_single_tokens() {
        let tree = VariantCss::new().nested(
            VariantCss::labelled("focus").nested(scope("disabled", "bg-gray-300")),
        );
        assert_eq!(translate_variant_css(&tree), "focus:disabled:bg-gray-300");
    }

    #[test]
    fn test_render_segments_in_sequence_order() {
        let tree = VariantCss::new()
            .nested(scope("hover", "bg-blue"))
            .classes(set("bg-red"));
        assert_eq!(translate_variant_css(&tree), "hover:bg-blue bg-red");
    }

    #[test]
    fn test_render_config() {
        let tree = VariantCss::from_classes(set("px-4 bg-red")).nested(scope("hover", "ring"));

        assert_eq!(
            translate_variant_css_with(&tree, &RenderConfig::CANONICAL),
            "bg-red px-4 hover:ring"
        );

        let grouped = RenderConfig::new(false, true).with_separator('_');
        assert_eq!(
            translate_variant_css_with(&tree, &grouped),
            "px-4 bg-red hover_(ring)"
        );

        let sorted = RenderConfig::DEFAULT.with_sort_classes(true);
        assert_eq!(sorted, RenderConfig::CANONICAL);
        assert_eq!(
            translate_variant_css_with(&tree, &sorted.with_always_group(true)),
            "bg-red px-4 hover:(ring)"
        );
    }

    #[test]
    fn test_translate_container_data_skips_empty() {
        let mut data = CssData::default();
        data.insert(VariantKey::new("a"), VariantCss::from_classes(set("bg-red")));
        data.insert(VariantKey::new("b"), VariantCss::new());
        data.insert(VariantKey::new("c"), VariantCss::labelled("hover"));

        let rendered = translate_container_node_css_data(&data);
        assert_eq!(rendered.len(), 1);
        assert_eq!(rendered.get("a").map(String::as_str), Some("bg-red"));
        assert!(!rendered.contains_key("b"));
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_par_translate_matches_sequential() {
        let mut data = CssData::default();
        for i in 0..32 {
            let tree = if i % 3 == 0 {
                VariantCss::new()
            } else {
                VariantCss::from_classes(set(&format!("p-{i}"))).nested(scope("hover", "ring"))
            };
            data.insert(VariantKey::new(format!("size-{i}")), tree);
        }

        let sequential = translate_container_node_css_data(&data);
        let parallel = par_translate_container_node_css_data(&data, &RenderConfig::DEFAULT);
        assert_eq!(
            sequential.iter().collect::<Vec<_>>(),
            parallel.iter().collect::<Vec<_>>()
        );
    }
}
