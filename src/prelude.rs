//! Prelude module for common imports.
//!
//! ```ignore
//! use varcss::prelude::*;
//! ```

// Sets
pub use crate::class_set::{ClassName, ClassSet, SetOp};

// Tree model
pub use crate::variant::{
    append_set_to_variant_css, append_to_variant_css, wrap_in_variant, wrap_in_variants, Label,
    Segment, VariantCss, VariantPath,
};

// Algorithms
pub use crate::algo::{combine, difference, intersection, normalize, symmetric_difference, union};

// Render
pub use crate::render::{
    translate_container_node_css_data, translate_variant_css, translate_variant_css_with,
    RenderConfig, RenderedCss,
};

// Parse
pub use crate::parse::parse_variant_css;

// Keys and nodes
pub use crate::key::VariantKey;
pub use crate::node::{ContainerNode, CssData, NodeData, TextNode, TreeNode};

// Merge
pub use crate::merge::{merge_states, split_shared, InteractionState, SharedCss};

// Error
pub use crate::error::{CssError, CssResult};
