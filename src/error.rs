//! Error types for varcss.
//!
//! The algebra, wrap, append and render operations are total and never fail.
//! Only decoding user-facing text (utility strings, variant keys, host state
//! names) can produce an error.

use thiserror::Error;

/// Errors that can occur while decoding variant CSS inputs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CssError {
    /// A `(` group was opened but never closed
    #[error("unclosed variant group opened at offset {offset}")]
    UnclosedGroup {
        /// Byte offset of the opening parenthesis
        offset: usize,
    },

    /// A `)` appeared without a matching `(`
    #[error("unexpected ')' at offset {offset}")]
    UnexpectedClose {
        /// Byte offset of the stray parenthesis
        offset: usize,
    },

    /// A `(` appeared where a class or variant label was expected
    #[error("unexpected '(' at offset {offset}")]
    UnexpectedOpen {
        /// Byte offset of the parenthesis
        offset: usize,
    },

    /// A `:` separator had nothing in front of it
    #[error("empty variant label at offset {offset}")]
    EmptyVariantLabel {
        /// Byte offset of the separator
        offset: usize,
    },

    /// A variant label was not followed by a class or a group
    #[error("variant `{label}` has no body at offset {offset}")]
    MissingVariantBody {
        /// The dangling variant label
        label: String,
        /// Byte offset just after the separator
        offset: usize,
    },

    /// A variant key segment is not of the form `key-value`
    #[error("invalid variant key segment `{0}`: expected `key-value`")]
    InvalidVariantKey(String),

    /// A host interaction state name is not recognised
    #[error("unknown interaction state `{0}`")]
    UnknownState(String),
}

/// Result type alias for fallible varcss operations.
pub type CssResult<T> = Result<T, CssError>;

impl CssError {
    /// Create a missing-body error for a dangling variant label.
    pub fn missing_body(label: impl Into<String>, offset: usize) -> Self {
        Self::MissingVariantBody {
            label: label.into(),
            offset,
        }
    }

    /// Create an invalid-key error from the offending segment.
    pub fn invalid_key(segment: impl Into<String>) -> Self {
        Self::InvalidVariantKey(segment.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CssError::UnclosedGroup { offset: 6 };
        assert_eq!(err.to_string(), "unclosed variant group opened at offset 6");

        let err = CssError::missing_body("hover", 6);
        assert_eq!(err.to_string(), "variant `hover` has no body at offset 6");

        let err = CssError::invalid_key("color");
        assert_eq!(
            err.to_string(),
            "invalid variant key segment `color`: expected `key-value`"
        );
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CssError>();
    }
}
