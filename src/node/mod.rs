//! Design node tree
//!
//! A [`TreeNode`] is either a container (frame, group, component instance)
//! or a text layer. Both carry [`NodeData`]: the variant CSS composed for each
//! property permutation plus an optional conditional-visibility tag.

mod container;
mod data;
mod text;

pub use container::ContainerNode;
pub use data::{CssData, NodeData};
pub use text::TextNode;

use smallvec::SmallVec;

use crate::render::RenderedCss;

/// Node in a design tree - either Container or Text.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "lowercase"))]
pub enum TreeNode {
    Container(Box<ContainerNode>),
    Text(TextNode),
}

impl TreeNode {
    /// Check if this is a container node.
    #[inline]
    pub fn is_container(&self) -> bool {
        matches!(self, TreeNode::Container(_))
    }

    /// Check if this is a text node.
    #[inline]
    pub fn is_text(&self) -> bool {
        matches!(self, TreeNode::Text(_))
    }

    /// Get as container reference.
    #[inline]
    pub fn as_container(&self) -> Option<&ContainerNode> {
        match self {
            TreeNode::Container(c) => Some(c),
            _ => None,
        }
    }

    /// Get as mutable container reference.
    #[inline]
    pub fn as_container_mut(&mut self) -> Option<&mut ContainerNode> {
        match self {
            TreeNode::Container(c) => Some(c),
            _ => None,
        }
    }

    /// Get as text reference.
    #[inline]
    pub fn as_text(&self) -> Option<&TextNode> {
        match self {
            TreeNode::Text(t) => Some(t),
            _ => None,
        }
    }

    /// Node data of either kind.
    pub fn data(&self) -> &NodeData {
        match self {
            TreeNode::Container(c) => &c.data,
            TreeNode::Text(t) => &t.data,
        }
    }

    /// Mutable node data of either kind.
    pub fn data_mut(&mut self) -> &mut NodeData {
        match self {
            TreeNode::Container(c) => &mut c.data,
            TreeNode::Text(t) => &mut t.data,
        }
    }

    /// Render this node's css data, dropping empty entries.
    pub fn translate_css(&self) -> RenderedCss {
        self.data().translate_css()
    }

    /// Visit this node and all descendants, depth-first, parents first.
    pub fn walk<F>(&self, visit: &mut F)
    where
        F: FnMut(&TreeNode),
    {
        visit(self);
        if let TreeNode::Container(c) = self {
            for child in &c.children {
                child.walk(visit);
            }
        }
    }
}

impl From<ContainerNode> for TreeNode {
    fn from(node: ContainerNode) -> Self {
        TreeNode::Container(Box::new(node))
    }
}

impl From<TextNode> for TreeNode {
    fn from(node: TextNode) -> Self {
        TreeNode::Text(node)
    }
}

/// Type alias for children collection.
pub type Children = SmallVec<[TreeNode; 8]>;
