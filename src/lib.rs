//! varcss - Variant CSS trees for design-to-code generation
//!
//! ## Core Concepts
//!
//! **Variant CSS tree**: a component's utility classes together with the
//! variant scopes (`hover`, `focus > disabled`, `md`) under which they apply.
//! Trees are plain values; edits copy the touched path and share the rest.
//!
//! **Set algebra**: union, difference, symmetric difference and intersection
//! over two trees, pairing scopes by label at every depth. Used to merge
//! interaction states and to separate shared from per-permutation styles.
//!
//! ## Modules
//! - `class_set`: utility class sets and `SetOp`
//! - `variant`: `VariantCss` tree model, wrap and append operations
//! - `algo`: tree algebra and normalization
//! - `render`: Tailwind-style utility string rendering
//! - `parse`: utility string parsing
//! - `key`: variant keys for property permutations
//! - `node`: design node tree carrying per-permutation css data
//! - `merge`: interaction state and property permutation merging
//!
//! ## Usage
//!
//! ```ignore
//! use varcss::prelude::*;
//!
//! let base = append_to_variant_css(None, "bg-red", VariantPath::root());
//! let base = append_to_variant_css(Some(&base), "bg-blue", "hover");
//! let focus = wrap_in_variants(["disabled", "focus"], VariantCss::from_classes(ClassSet::single("ring")));
//!
//! let tree = union(Some(&base), Some(&focus));
//! assert_eq!(translate_variant_css(&tree), "bg-red hover:bg-blue focus:disabled:ring");
//! ```

// =============================================================================
// Core modules
// =============================================================================

/// Utility class sets and set operations
pub mod class_set;

/// Variant CSS tree model
pub mod variant;

/// Algorithms: combine, normalize
pub mod algo;

/// Utility string rendering
pub mod render;

/// Utility string parsing
pub mod parse;

/// Variant keys
pub mod key;

/// Design node tree
pub mod node;

/// State and property merging
pub mod merge;

/// Error types
pub mod error;

/// Prelude for common imports
pub mod prelude;

// =============================================================================
// Re-exports
// =============================================================================

// Sets
pub use class_set::{ClassName, ClassSet, SetOp};

// Tree model
pub use variant::{
    append_set_to_variant_css, append_to_variant_css, wrap_in_variant, wrap_in_variants,
    ClassPaths, Label, Segment, Segments, VariantCss, VariantPath,
};

// Algebra
pub use algo::{combine, difference, intersection, normalize, symmetric_difference, union};

// Rendering
pub use render::{
    translate_container_node_css_data, translate_container_node_css_data_with,
    translate_variant_css, translate_variant_css_with, RenderConfig, RenderedCss,
};

#[cfg(feature = "parallel")]
pub use render::par_translate_container_node_css_data;

// Parsing
pub use parse::parse_variant_css;

// Keys and nodes
pub use key::VariantKey;
pub use node::{ContainerNode, CssData, NodeData, TextNode, TreeNode};

// Merging
pub use merge::{merge_states, split_shared, InteractionState, SharedCss};

// Error types
pub use error::{CssError, CssResult};

// =============================================================================
// Tests
// =============================================================================
