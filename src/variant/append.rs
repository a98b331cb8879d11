//! Appending classes at a variant path.
//!
//! Appends never touch the input tree. The root and every node on the path to
//! the insertion point are copied; sibling branches stay shared through their
//! `Arc` handles (`Arc::make_mut` only clones a node that is still shared).

use std::sync::Arc;

use tracing::trace;

use crate::class_set::{ClassName, ClassSet};

use super::{Label, Segment, VariantCss, VariantPath};

/// Append one class at `path`. See [`append_set_to_variant_css`].
pub fn append_to_variant_css(
    tree: Option<&VariantCss>,
    class: impl Into<ClassName>,
    path: impl Into<VariantPath>,
) -> VariantCss {
    append_set_to_variant_css(tree, ClassSet::single(class), path)
}

/// Append a class set as a new segment at `path`.
///
/// Missing scopes along the path are created (appended after existing
/// segments). With an absent tree and a non-empty path, the first label
/// becomes the root's own label rather than a nested scope.
///
/// A labelled root stands for its own scope: a path starting with the root
/// label descends from the root, and a path starting with any other label
/// lifts the root under an unlabelled one so both scopes become siblings.
pub fn append_set_to_variant_css(
    tree: Option<&VariantCss>,
    classes: ClassSet,
    path: impl Into<VariantPath>,
) -> VariantCss {
    let path = path.into();
    let labels = path.labels();

    let (mut root, rest) = match (tree, labels.split_first()) {
        (Some(tree), Some((first, rest))) if tree.label() == Some(first.as_str()) => {
            (tree.clone(), rest)
        }
        (Some(tree), Some(_)) if tree.variant.is_some() => {
            trace!(root = ?tree.variant, "lifting labelled root");
            (VariantCss::new().nested(tree.clone()), labels)
        }
        (Some(tree), _) => (tree.clone(), labels),
        (None, Some((first, rest))) => (VariantCss::labelled(first.clone()), rest),
        (None, None) => (VariantCss::new(), labels),
    };

    insert_at(&mut root, rest, classes);
    root
}

fn insert_at(node: &mut VariantCss, labels: &[Label], classes: ClassSet) {
    let Some((label, rest)) = labels.split_first() else {
        node.css.push(Segment::Classes(classes));
        return;
    };

    let index = match node.nested_index(label) {
        Some(index) => index,
        None => {
            trace!(%label, "creating variant scope");
            node.css.push(Segment::nested(VariantCss::labelled(label.clone())));
            node.css.len() - 1
        }
    };

    if let Some(child) = node.css[index].as_nested_mut() {
        insert_at(Arc::make_mut(child), rest, classes);
    }
}
