//! Merging per-state and per-permutation styles.
//!
//! # Module Structure
//!
//! - `state` - fold interaction-state trees (hover, focus, ...) into one
//!   conditional tree
//! - `property` - split permutation trees into shared and divergent styles
//!
//! # Example
//!
//! ```ignore
//! use varcss::merge::{merge_states, InteractionState};
//!
//! let merged = merge_states(&base, [
//!     (InteractionState::Hover, &hover),
//!     (InteractionState::Disabled, &disabled),
//! ]);
//! assert_eq!(merged.to_string(), "bg-red px-4 hover:bg-blue disabled:opacity-50");
//! ```

mod property;
mod state;

pub use property::{split_shared, union_css_data, SharedCss};
pub use state::{merge_named_states, merge_states, InteractionState};
