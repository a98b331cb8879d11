//! Utility class sets
//!
//! A `ClassSet` is an unordered collection of opaque utility class names
//! (`bg-red`, `px-4`). Equality is set equality. Iteration follows insertion
//! order so rendering is stable across runs.

use std::fmt;

use compact_str::CompactString;
use indexmap::IndexSet;
use rustc_hash::FxBuildHasher;

/// A single utility class name.
pub type ClassName = CompactString;

// =============================================================================
// ClassSet
// =============================================================================

/// Set of utility class names with stable (insertion) iteration order.
#[derive(Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ClassSet(IndexSet<ClassName, FxBuildHasher>);

impl ClassSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a set holding one class.
    pub fn single(class: impl Into<ClassName>) -> Self {
        let mut set = Self::new();
        set.insert(class);
        set
    }

    /// Split a whitespace separated class list into a set.
    pub fn from_whitespace(classes: &str) -> Self {
        classes.split_whitespace().collect()
    }

    /// Insert a class, returning `false` if it was already present.
    pub fn insert(&mut self, class: impl Into<ClassName>) -> bool {
        self.0.insert(class.into())
    }

    /// Remove a class, returning `true` if it was present.
    pub fn remove(&mut self, class: &str) -> bool {
        self.0.shift_remove(class)
    }

    /// Check membership.
    pub fn contains(&self, class: &str) -> bool {
        self.0.contains(class)
    }

    /// Number of classes.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the set has no classes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate class names in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.iter().map(|c| c.as_str())
    }

    /// Check if every class of `self` is also in `other`.
    pub fn is_subset(&self, other: &ClassSet) -> bool {
        self.0.is_subset(&other.0)
    }

    /// Return the classes sorted alphabetically.
    pub fn sorted(&self) -> Vec<&str> {
        let mut classes: Vec<&str> = self.iter().collect();
        classes.sort_unstable();
        classes
    }
}

impl fmt::Debug for ClassSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<C: Into<ClassName>> FromIterator<C> for ClassSet {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<C: Into<ClassName>> Extend<C> for ClassSet {
    fn extend<I: IntoIterator<Item = C>>(&mut self, iter: I) {
        self.0.extend(iter.into_iter().map(Into::into));
    }
}

impl<'a> IntoIterator for &'a ClassSet {
    type Item = &'a ClassName;
    type IntoIter = indexmap::set::Iter<'a, ClassName>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// =============================================================================
// Set operations
// =============================================================================

/// Generate `ClassSet` set-algebra methods and the matching `SetOp` variants.
///
/// Each operation name becomes a `ClassSet` method and a camel-cased `SetOp`
/// variant dispatching to it.
macro_rules! impl_set_ops {
    ($($op:ident),* $(,)?) => {
        ::paste::paste! {
            /// Binary set operation used by both class sets and variant trees.
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
            pub enum SetOp {
                $(
                    #[doc = "The `" $op "` of both operands"]
                    [<$op:camel>],
                )*
            }

            impl SetOp {
                /// Every operation, in declaration order.
                pub const ALL: &'static [SetOp] = &[$(SetOp::[<$op:camel>]),*];

                /// Operation name in snake case.
                pub fn name(self) -> &'static str {
                    match self {
                        $(Self::[<$op:camel>] => stringify!($op),)*
                    }
                }

                /// Apply the operation to two present sets.
                pub fn apply_sets(self, a: &ClassSet, b: &ClassSet) -> ClassSet {
                    match self {
                        $(Self::[<$op:camel>] => a.$op(b),)*
                    }
                }
            }

            impl ClassSet {
                $(
                    #[doc = "Return the " $op " of `self` and `other` as a new set."]
                    pub fn $op(&self, other: &ClassSet) -> ClassSet {
                        ClassSet(self.0.$op(&other.0).cloned().collect())
                    }
                )*
            }
        }
    };
}

impl_set_ops!(union, difference, symmetric_difference, intersection);

impl SetOp {
    /// Apply the operation, treating an absent side as the empty set.
    pub fn apply(self, a: Option<&ClassSet>, b: Option<&ClassSet>) -> ClassSet {
        let empty = ClassSet::new();
        self.apply_sets(a.unwrap_or(&empty), b.unwrap_or(&empty))
    }
}

impl fmt::Display for SetOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Tests
// =============================================================================
