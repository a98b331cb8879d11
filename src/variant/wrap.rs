//! Wrapping trees in new outer variant scopes.

use smallvec::smallvec;

use super::{Label, Segment, VariantCss};

/// Nest the whole tree under a new variant scope `label`.
///
/// An unlabelled tree simply gains the label. A labelled tree becomes the
/// single nested segment of the new scope, keeping its own label.
pub fn wrap_in_variant(label: impl Into<Label>, tree: VariantCss) -> VariantCss {
    let label = label.into();
    match tree.variant {
        None => VariantCss {
            variant: Some(label),
            css: tree.css,
        },
        Some(_) => VariantCss {
            variant: Some(label),
            css: smallvec![Segment::nested(tree)],
        },
    }
}

/// Apply [`wrap_in_variant`] once per label, in list order.
///
/// The first label ends up innermost and the last outermost, so labels are
/// given innermost to outermost: `["hover", "focus"]` yields `focus > hover`.
pub fn wrap_in_variants<I>(labels: I, tree: VariantCss) -> VariantCss
where
    I: IntoIterator,
    I::Item: Into<Label>,
{
    labels
        .into_iter()
        .fold(tree, |tree, label| wrap_in_variant(label, tree))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::class_set::ClassSet;

    fn bg_red() -> VariantCss {
        VariantCss::from_classes(ClassSet::single("bg-red"))
    }

    #[test]
    fn test_wrap_unlabelled_tree() {
        let wrapped = wrap_in_variant("hover", bg_red());
        assert_eq!(wrapped.label(), Some("hover"));
        assert_eq!(wrapped.css, bg_red().css);
    }

    #[test]
    fn test_wrap_labelled_tree_nests_it() {
        let inner = VariantCss::labelled("focus").classes(ClassSet::single("px-4"));
        let wrapped = wrap_in_variant("md", inner.clone());

        assert_eq!(wrapped.label(), Some("md"));
        assert_eq!(wrapped.css.len(), 1);
        assert_eq!(wrapped.css[0].as_nested(), Some(&inner));
    }

    #[test]
    fn test_wrap_in_variants_order() {
        let wrapped = wrap_in_variants(["hover", "focus"], bg_red());

        assert_eq!(wrapped.label(), Some("focus"));
        assert_eq!(wrapped.css.len(), 1);
        let hover = wrapped.css[0].as_nested().unwrap();
        assert_eq!(hover.label(), Some("hover"));
        assert_eq!(hover.css.as_slice(), &[Segment::Classes(ClassSet::single("bg-red"))]);
    }

    #[test]
    fn test_wrap_in_no_variants_is_identity() {
        let labels: [&str; 0] = [];
        assert_eq!(wrap_in_variants(labels, bg_red()), bg_red());
    }

    #[test]
    fn test_wrap_method_renders_prefix() {
        assert_eq!(bg_red().wrap("hover").to_string(), "hover:bg-red");
    }
}
