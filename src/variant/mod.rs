//! Variant CSS tree model
//!
//! A [`VariantCss`] describes how a component's utility classes change across
//! interaction states and design variants. Each node holds an optional variant
//! label and an ordered sequence of [`Segment`]s, where a segment is either a
//! flat [`ClassSet`] or another labelled node:
//!
//! ```text
//! VariantCss { variant: None, css: [
//!     Classes { bg-red, px-4 },
//!     Nested(VariantCss { variant: "hover", css: [Classes { bg-blue }] }),
//! ]}
//! ```
//!
//! renders as `bg-red px-4 hover:bg-blue`.
//!
//! Nested nodes are held in `Arc` so that edits copy only the path from the
//! root to the edited node and share every untouched sibling.

mod append;
mod wrap;

pub use append::{append_set_to_variant_css, append_to_variant_css};
pub use wrap::{wrap_in_variant, wrap_in_variants};

use std::fmt;
use std::sync::Arc;

use compact_str::CompactString;
use indexmap::IndexSet;
use rustc_hash::FxBuildHasher;
use smallvec::SmallVec;

use crate::class_set::{ClassName, ClassSet};

/// A variant label such as `hover`, `focus` or `md`.
pub type Label = CompactString;

/// Type alias for a node's segment sequence.
pub type Segments = SmallVec<[Segment; 4]>;

/// Every `(variant path, class)` pair of a tree.
pub type ClassPaths = IndexSet<(VariantPath, ClassName), FxBuildHasher>;

// =============================================================================
// Segment
// =============================================================================

/// One entry of a node's `css` sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Segment {
    /// Unconditional classes at this scope
    Classes(ClassSet),
    /// A labelled sub-scope
    Nested(Arc<VariantCss>),
}

impl Segment {
    /// Create a nested segment from a labelled node.
    pub fn nested(node: VariantCss) -> Self {
        debug_assert!(node.variant.is_some(), "nested segments must carry a label");
        Segment::Nested(Arc::new(node))
    }

    /// Check if this is a class set segment.
    #[inline]
    pub fn is_classes(&self) -> bool {
        matches!(self, Segment::Classes(_))
    }

    /// Check if this is a nested segment.
    #[inline]
    pub fn is_nested(&self) -> bool {
        matches!(self, Segment::Nested(_))
    }

    /// Get as class set reference.
    #[inline]
    pub fn as_classes(&self) -> Option<&ClassSet> {
        match self {
            Segment::Classes(set) => Some(set),
            _ => None,
        }
    }

    /// Get as nested node reference.
    #[inline]
    pub fn as_nested(&self) -> Option<&VariantCss> {
        match self {
            Segment::Nested(node) => Some(node),
            _ => None,
        }
    }

    /// Get the shared handle of a nested node for copy-on-write edits.
    #[inline]
    pub(crate) fn as_nested_mut(&mut self) -> Option<&mut Arc<VariantCss>> {
        match self {
            Segment::Nested(node) => Some(node),
            _ => None,
        }
    }

    /// Check if the segment contributes no class, at any depth.
    pub fn is_empty(&self) -> bool {
        match self {
            Segment::Classes(set) => set.is_empty(),
            Segment::Nested(node) => node.is_empty(),
        }
    }
}

impl From<ClassSet> for Segment {
    fn from(set: ClassSet) -> Self {
        Segment::Classes(set)
    }
}

// =============================================================================
// VariantPath
// =============================================================================

/// Ordered sequence of nested variant labels, outermost first.
///
/// The empty path addresses the root scope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct VariantPath(SmallVec<[Label; 4]>);

impl VariantPath {
    /// The root scope.
    pub fn root() -> Self {
        Self::default()
    }

    /// Check if this path addresses the root scope.
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of labels.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the path has no labels (same as [`is_root`](Self::is_root)).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate labels, outermost first.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.iter().map(|l| l.as_str())
    }

    /// Extend the path with an inner label.
    pub fn push(&mut self, label: impl Into<Label>) {
        self.0.push(label.into());
    }

    /// Remove the innermost label.
    pub fn pop(&mut self) -> Option<Label> {
        self.0.pop()
    }

    pub(crate) fn labels(&self) -> &[Label] {
        &self.0
    }
}

impl From<&str> for VariantPath {
    fn from(label: &str) -> Self {
        std::iter::once(label).collect()
    }
}

impl From<Option<&str>> for VariantPath {
    fn from(label: Option<&str>) -> Self {
        label.into_iter().collect()
    }
}

impl From<&[&str]> for VariantPath {
    fn from(labels: &[&str]) -> Self {
        labels.iter().copied().collect()
    }
}

impl<const N: usize> From<[&str; N]> for VariantPath {
    fn from(labels: [&str; N]) -> Self {
        labels.into_iter().collect()
    }
}

impl<L: Into<Label>> FromIterator<L> for VariantPath {
    fn from_iter<I: IntoIterator<Item = L>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for VariantPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, label) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" > ")?;
            }
            f.write_str(label)?;
        }
        Ok(())
    }
}

// =============================================================================
// VariantCss
// =============================================================================

/// A (possibly nested) conditional style tree.
///
/// `variant` is `None` only at a root, meaning the unconditional scope.
/// A root labelled `L` means the same as an unlabelled root holding one
/// nested `L` segment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VariantCss {
    /// Variant label of this scope
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub variant: Option<Label>,
    /// Ordered segments of this scope
    #[cfg_attr(feature = "serde", serde(default))]
    pub css: Segments,
}

impl VariantCss {
    /// Create the empty tree `{ css: [] }`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty scope with a variant label.
    pub fn labelled(label: impl Into<Label>) -> Self {
        Self {
            variant: Some(label.into()),
            css: Segments::new(),
        }
    }

    /// Create an unlabelled tree holding one class set.
    pub fn from_classes(classes: ClassSet) -> Self {
        Self::new().classes(classes)
    }

    /// Builder: append a class set segment.
    pub fn classes(mut self, classes: ClassSet) -> Self {
        self.css.push(Segment::Classes(classes));
        self
    }

    /// Builder: append a nested, labelled node.
    pub fn nested(mut self, child: VariantCss) -> Self {
        self.css.push(Segment::nested(child));
        self
    }

    /// Variant label of this scope, if any.
    #[inline]
    pub fn label(&self) -> Option<&str> {
        self.variant.as_deref()
    }

    /// Check if the tree contributes no class, at any depth.
    pub fn is_empty(&self) -> bool {
        self.css.iter().all(Segment::is_empty)
    }

    /// Total number of class entries, at any depth.
    pub fn class_count(&self) -> usize {
        self.css
            .iter()
            .map(|segment| match segment {
                Segment::Classes(set) => set.len(),
                Segment::Nested(node) => node.class_count(),
            })
            .sum()
    }

    /// Iterate the class set segments of this scope.
    pub fn class_segments(&self) -> impl Iterator<Item = &ClassSet> + '_ {
        self.css.iter().filter_map(Segment::as_classes)
    }

    /// Iterate the nested segments of this scope.
    pub fn nested_segments(&self) -> impl Iterator<Item = &VariantCss> + '_ {
        self.css.iter().filter_map(Segment::as_nested)
    }

    /// Find the first nested segment with `label` in this scope.
    pub fn find_nested(&self, label: &str) -> Option<&VariantCss> {
        self.nested_segments().find(|node| node.label() == Some(label))
    }

    /// Resolve a path of nested labels below this scope.
    pub fn find_path(&self, path: &VariantPath) -> Option<&VariantCss> {
        path.iter()
            .try_fold(self, |node, label| node.find_nested(label))
    }

    /// Union of every class set directly in this scope.
    pub fn own_classes(&self) -> ClassSet {
        let mut classes = ClassSet::new();
        for set in self.class_segments() {
            classes.extend(set.iter());
        }
        classes
    }

    /// Every `(variant path, class)` pair, the root label included.
    pub fn class_paths(&self) -> ClassPaths {
        let mut out = ClassPaths::default();
        let mut prefix = VariantPath::root();
        self.collect_paths(&mut prefix, &mut out);
        out
    }

    fn collect_paths(&self, prefix: &mut VariantPath, out: &mut ClassPaths) {
        if let Some(label) = &self.variant {
            prefix.push(label.clone());
        }
        for segment in &self.css {
            match segment {
                Segment::Classes(set) => {
                    for class in set {
                        out.insert((prefix.clone(), class.clone()));
                    }
                }
                Segment::Nested(node) => node.collect_paths(prefix, out),
            }
        }
        if self.variant.is_some() {
            prefix.pop();
        }
    }

    /// Check if two trees style the same classes under the same variant paths,
    /// regardless of segment order.
    pub fn equivalent(&self, other: &VariantCss) -> bool {
        self.class_paths() == other.class_paths()
    }

    /// Wrap this tree in a new outer variant scope.
    pub fn wrap(self, label: impl Into<Label>) -> VariantCss {
        wrap_in_variant(label, self)
    }

    /// Index of the first nested segment with `label` in this scope.
    pub(crate) fn nested_index(&self, label: &str) -> Option<usize> {
        self.css.iter().position(|segment| {
            segment
                .as_nested()
                .is_some_and(|node| node.label() == Some(label))
        })
    }
}

impl From<ClassSet> for VariantCss {
    fn from(classes: ClassSet) -> Self {
        Self::from_classes(classes)
    }
}

impl fmt::Display for VariantCss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::render::translate_variant_css(self))
    }
}

// =============================================================================
// Tests
// =============================================================================
