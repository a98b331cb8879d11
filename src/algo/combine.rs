//! Variant CSS set algebra
//!
//! Combines two trees scope by scope. At every level:
//!
//! 1. All class set segments of each side are folded into one set and the
//!    scalar operation is applied; a non-empty result is emitted first.
//! 2. Nested segments are paired by variant label (never by position).
//!    Paired scopes recurse and keep their label; an empty result is dropped.
//! 3. Unpaired scopes are carried through or dropped depending on the
//!    operation:
//!
//! | op                     | left-only | right-only |
//! |------------------------|-----------|------------|
//! | `union`                | kept      | kept       |
//! | `difference`           | kept      | dropped    |
//! | `symmetric_difference` | kept      | kept       |
//! | `intersection`         | dropped   | dropped    |
//!
//! Nested output follows the left tree's order, right-only scopes appended.
//! Carried-through scopes are shared with the input, not copied.

use std::borrow::Cow;
use std::sync::Arc;

use indexmap::IndexMap;
use indexmap::map::Entry;
use rustc_hash::FxBuildHasher;
use tracing::trace;

use crate::class_set::{ClassSet, SetOp};
use crate::variant::{Segment, Segments, VariantCss};

// =============================================================================
// Public API
// =============================================================================

/// Combine two possibly absent trees with `op`.
///
/// An absent tree acts as the empty tree, except that the present side is
/// returned as-is where the operation leaves it untouched.
pub fn combine(op: SetOp, left: Option<&VariantCss>, right: Option<&VariantCss>) -> VariantCss {
    match (left, right) {
        (None, None) => VariantCss::new(),
        (Some(left), None) => match op {
            SetOp::Union | SetOp::Difference | SetOp::SymmetricDifference => left.clone(),
            SetOp::Intersection => VariantCss::new(),
        },
        (None, Some(right)) => match op {
            SetOp::Union | SetOp::SymmetricDifference => right.clone(),
            SetOp::Difference | SetOp::Intersection => VariantCss::new(),
        },
        (Some(left), Some(right)) => combine_trees(op, left, right),
    }
}

/// Classes styled by either tree.
pub fn union(left: Option<&VariantCss>, right: Option<&VariantCss>) -> VariantCss {
    combine(SetOp::Union, left, right)
}

/// Classes of `left` that `right` does not style at the same variant path.
pub fn difference(left: Option<&VariantCss>, right: Option<&VariantCss>) -> VariantCss {
    combine(SetOp::Difference, left, right)
}

/// Classes styled by exactly one of the trees.
pub fn symmetric_difference(left: Option<&VariantCss>, right: Option<&VariantCss>) -> VariantCss {
    combine(SetOp::SymmetricDifference, left, right)
}

/// Classes styled by both trees at the same variant path.
pub fn intersection(left: Option<&VariantCss>, right: Option<&VariantCss>) -> VariantCss {
    combine(SetOp::Intersection, left, right)
}

impl VariantCss {
    /// Combine with another present tree.
    pub fn combine(&self, op: SetOp, other: &VariantCss) -> VariantCss {
        combine_trees(op, self, other)
    }

    /// See [`union`].
    pub fn union(&self, other: &VariantCss) -> VariantCss {
        combine_trees(SetOp::Union, self, other)
    }

    /// See [`difference`].
    pub fn difference(&self, other: &VariantCss) -> VariantCss {
        combine_trees(SetOp::Difference, self, other)
    }

    /// See [`symmetric_difference`].
    pub fn symmetric_difference(&self, other: &VariantCss) -> VariantCss {
        combine_trees(SetOp::SymmetricDifference, self, other)
    }

    /// See [`intersection`].
    pub fn intersection(&self, other: &VariantCss) -> VariantCss {
        combine_trees(SetOp::Intersection, self, other)
    }
}

// =============================================================================
// Scope indexing
// =============================================================================

/// The segments of one scope, folded by kind and keyed by label.
pub(super) struct Scope<'a> {
    /// Union of every class set segment
    pub classes: Cow<'a, ClassSet>,
    /// Nested scopes in first-encounter order, duplicates coalesced
    pub nested: IndexMap<&'a str, Arc<VariantCss>, FxBuildHasher>,
}

impl<'a> Scope<'a> {
    pub(super) fn index(segments: &'a [Segment]) -> Self {
        let mut scope = Scope {
            classes: Cow::Owned(ClassSet::new()),
            nested: IndexMap::default(),
        };
        let mut seen_classes = false;
        scope.absorb(segments, &mut seen_classes);
        scope
    }

    fn absorb(&mut self, segments: &'a [Segment], seen_classes: &mut bool) {
        for segment in segments {
            match segment {
                Segment::Classes(set) => {
                    if *seen_classes {
                        let merged = self.classes.union(set);
                        self.classes = Cow::Owned(merged);
                    } else {
                        self.classes = Cow::Borrowed(set);
                        *seen_classes = true;
                    }
                }
                Segment::Nested(node) => match node.label() {
                    // Unlabelled nested nodes belong to the enclosing scope
                    None => self.absorb(&node.css, seen_classes),
                    Some(label) => match self.nested.entry(label) {
                        Entry::Vacant(entry) => {
                            entry.insert(Arc::clone(node));
                        }
                        Entry::Occupied(mut entry) => {
                            trace!(%label, "coalescing duplicate variant scope");
                            let merged = combine_trees(SetOp::Union, entry.get(), node);
                            if !merged.is_empty() {
                                *entry.get_mut() = Arc::new(merged);
                            }
                        }
                    },
                },
            }
        }
    }
}

// =============================================================================
// Recursion
// =============================================================================

pub(super) fn combine_trees(op: SetOp, left: &VariantCss, right: &VariantCss) -> VariantCss {
    if left.variant != right.variant {
        trace!(
            %op,
            left = ?left.variant,
            right = ?right.variant,
            "lifting labelled roots"
        );
        return combine_trees(op, &lift(left), &lift(right));
    }

    let css = combine_segments(op, &left.css, &right.css);
    if css.iter().all(Segment::is_empty) {
        return VariantCss::new();
    }
    VariantCss {
        variant: left.variant.clone(),
        css,
    }
}

/// View a labelled root as the unlabelled tree holding it as one scope.
fn lift(tree: &VariantCss) -> Cow<'_, VariantCss> {
    match tree.variant {
        None => Cow::Borrowed(tree),
        Some(_) => Cow::Owned(VariantCss::new().nested(tree.clone())),
    }
}

fn combine_segments(op: SetOp, left: &[Segment], right: &[Segment]) -> Segments {
    let left = Scope::index(left);
    let right = Scope::index(right);
    let mut out = Segments::new();

    let classes = op.apply_sets(&left.classes, &right.classes);
    if !classes.is_empty() {
        out.push(Segment::Classes(classes));
    }

    for (label, node) in &left.nested {
        match right.nested.get(label) {
            Some(other) => {
                let merged = combine_trees(op, node, other);
                if merged.is_empty() {
                    trace!(%op, %label, "dropping empty variant scope");
                } else {
                    out.push(Segment::Nested(Arc::new(merged)));
                }
            }
            None if keeps_left_only(op) => out.push(Segment::Nested(Arc::clone(node))),
            None => {}
        }
    }

    if keeps_right_only(op) {
        for (label, node) in &right.nested {
            if !left.nested.contains_key(label) {
                out.push(Segment::Nested(Arc::clone(node)));
            }
        }
    }

    out
}

#[inline]
fn keeps_left_only(op: SetOp) -> bool {
    !matches!(op, SetOp::Intersection)
}

#[inline]
fn keeps_right_only(op: SetOp) -> bool {
    matches!(op, SetOp::Union | SetOp::SymmetricDifference)
}

// =============================================================================
// Tests
// =============================================================================
