//! Interaction state merging.

use std::fmt;
use std::str::FromStr;

use tracing::{debug, trace};

use crate::error::{CssError, CssResult};
use crate::variant::{wrap_in_variant, VariantCss};

// =============================================================================
// InteractionState
// =============================================================================

/// Interaction state of a component as named by the design tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InteractionState {
    /// Resting state; its styles are unconditional
    Default,
    /// Pointer over the component (`hover`)
    Hover,
    /// Keyboard or programmatic focus (`focus`)
    Focus,
    /// Pressed (`active`)
    Active,
    /// Not interactive (`disabled`)
    Disabled,
}

impl InteractionState {
    /// Every state, default first.
    pub const ALL: [InteractionState; 5] = [
        Self::Default,
        Self::Hover,
        Self::Focus,
        Self::Active,
        Self::Disabled,
    ];

    /// Identify a state from a host state name (case-insensitive).
    pub fn identify(name: &str) -> CssResult<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "default" | "rest" | "enabled" => Ok(Self::Default),
            "hover" | "hovered" => Ok(Self::Hover),
            "focus" | "focused" => Ok(Self::Focus),
            "active" | "pressed" => Ok(Self::Active),
            "disabled" => Ok(Self::Disabled),
            _ => Err(CssError::UnknownState(name.to_string())),
        }
    }

    /// Variant label of the state, `None` for the default state.
    pub fn variant(self) -> Option<&'static str> {
        match self {
            Self::Default => None,
            Self::Hover => Some("hover"),
            Self::Focus => Some("focus"),
            Self::Active => Some("active"),
            Self::Disabled => Some("disabled"),
        }
    }
}

impl FromStr for InteractionState {
    type Err = CssError;

    fn from_str(s: &str) -> CssResult<Self> {
        Self::identify(s)
    }
}

impl fmt::Display for InteractionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.variant().unwrap_or("default"))
    }
}

// =============================================================================
// Merging
// =============================================================================

/// Fold state trees into `base`, each under its state's variant.
///
/// Only the classes a state adds over `base` are kept: the result is
/// `base ∪ wrap(label, tree \ base)` per state, in iteration order. A
/// default-state tree is unioned unconditionally.
pub fn merge_states<'a, I>(base: &VariantCss, states: I) -> VariantCss
where
    I: IntoIterator<Item = (InteractionState, &'a VariantCss)>,
{
    let mut merged = base.clone();
    for (state, tree) in states {
        let Some(label) = state.variant() else {
            merged = merged.union(tree);
            continue;
        };

        let delta = tree.difference(base);
        if delta.is_empty() {
            trace!(%state, "state adds no classes");
            continue;
        }
        merged = merged.union(&wrap_in_variant(label, delta));
    }
    debug!(classes = merged.class_count(), "merged interaction states");
    merged
}

/// Like [`merge_states`], with states given by host name.
pub fn merge_named_states<'a, I, S>(base: &VariantCss, states: I) -> CssResult<VariantCss>
where
    I: IntoIterator<Item = (S, &'a VariantCss)>,
    S: AsRef<str>,
{
    let states = states
        .into_iter()
        .map(|(name, tree)| InteractionState::identify(name.as_ref()).map(|state| (state, tree)))
        .collect::<CssResult<Vec<_>>>()?;
    Ok(merge_states(base, states))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::class_set::ClassSet;

    fn tree(classes: &str) -> VariantCss {
        VariantCss::from_classes(ClassSet::from_whitespace(classes))
    }

    #[test]
    fn test_identify_states() {
        assert_eq!(InteractionState::identify("Hover"), Ok(InteractionState::Hover));
        assert_eq!(InteractionState::identify(" Focused "), Ok(InteractionState::Focus));
        assert_eq!("pressed".parse(), Ok(InteractionState::Active));
        assert_eq!(InteractionState::identify("Default"), Ok(InteractionState::Default));
        assert_eq!(
            InteractionState::identify("Dragging"),
            Err(CssError::UnknownState("Dragging".to_string()))
        );
    }

    #[test]
    fn test_state_labels() {
        let labels: Vec<_> = InteractionState::ALL.iter().map(|s| s.to_string()).collect();
        assert_eq!(labels, vec!["default", "hover", "focus", "active", "disabled"]);
    }

    #[test]
    fn test_merge_states_keeps_only_deltas() {
        let base = tree("bg-red px-4");
        let hover = tree("bg-blue px-4");
        let focus = tree("bg-red px-4 ring");
        let disabled = tree("bg-red px-4");

        let merged = merge_states(
            &base,
            [
                (InteractionState::Hover, &hover),
                (InteractionState::Focus, &focus),
                (InteractionState::Disabled, &disabled),
            ],
        );
        assert_eq!(merged.to_string(), "bg-red px-4 hover:bg-blue focus:ring");
    }

    #[test]
    fn test_merge_nested_state_tree() {
        let base = tree("p-2");
        let hover = tree("p-2").nested(VariantCss::labelled("md").classes(ClassSet::single("p-4")));

        let merged = merge_states(&base, [(InteractionState::Hover, &hover)]);
        assert_eq!(merged.to_string(), "p-2 hover:md:p-4");
    }

    #[test]
    fn test_merge_default_state_is_unconditional() {
        let merged = merge_states(&tree("flex"), [(InteractionState::Default, &tree("gap-2"))]);
        assert_eq!(merged.to_string(), "flex gap-2");
    }

    #[test]
    fn test_merge_named_states() {
        let base = tree("bg-red");
        let hover = tree("bg-blue");

        let merged = merge_named_states(&base, [("Hover", &hover)]).unwrap();
        assert_eq!(merged.to_string(), "bg-red hover:bg-blue");

        let err = merge_named_states(&base, [("Dragging", &hover)]).unwrap_err();
        assert_eq!(err, CssError::UnknownState("Dragging".to_string()));
    }
}
