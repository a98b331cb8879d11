//! Canonicalisation of variant CSS trees.
//!
//! Not run implicitly by the algebra: callers opt in when they want a
//! compact tree (fewer segments, no hollow scopes) before rendering or
//! comparing structurally.

use std::sync::Arc;

use crate::variant::{Segment, Segments, VariantCss};

use super::combine::Scope;

/// Return a normalized copy of `tree`.
///
/// At every depth: all class set segments fold into one leading set,
/// same-label scopes merge in first-encounter order, and scopes without any
/// class are removed. The result styles exactly the same
/// `(variant path, class)` pairs as the input.
pub fn normalize(tree: &VariantCss) -> VariantCss {
    let scope = Scope::index(&tree.css);
    let mut css = Segments::new();

    if !scope.classes.is_empty() {
        css.push(Segment::Classes(scope.classes.into_owned()));
    }
    for node in scope.nested.values() {
        let node = normalize(node);
        if !node.css.is_empty() {
            css.push(Segment::Nested(Arc::new(node)));
        }
    }

    if css.is_empty() {
        return VariantCss::new();
    }
    VariantCss {
        variant: tree.variant.clone(),
        css,
    }
}

impl VariantCss {
    /// See [`normalize`].
    pub fn normalized(&self) -> VariantCss {
        normalize(self)
    }
}
