//! Text node type
//!
//! Text layers of the design tree.

use super::NodeData;

// =============================================================================
// TextNode
// =============================================================================

/// Text layer with its style data
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextNode {
    /// Text content
    pub content: String,
    /// Style and visibility data
    #[cfg_attr(feature = "serde", serde(default))]
    pub data: NodeData,
}

impl TextNode {
    /// Create a new text node without styles
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            data: NodeData::default(),
        }
    }

    /// Builder: attach style data
    pub fn with_data(mut self, data: NodeData) -> Self {
        self.data = data;
        self
    }

    /// Check if text content is empty
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Check if text is only whitespace
    pub fn is_whitespace(&self) -> bool {
        self.content.trim().is_empty()
    }
}
