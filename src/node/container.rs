//! Container node type - frames, groups and component instances.

use super::{Children, NodeData, TextNode, TreeNode};

// =============================================================================
// ContainerNode
// =============================================================================

/// Container layer with child nodes and style data
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContainerNode {
    /// Layer name in the design document
    pub name: String,
    /// Style and visibility data
    #[cfg_attr(feature = "serde", serde(default))]
    pub data: NodeData,
    /// Child nodes
    #[cfg_attr(feature = "serde", serde(default))]
    pub children: Children,
}

impl ContainerNode {
    /// Create an empty container
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data: NodeData::default(),
            children: Children::new(),
        }
    }

    /// Builder: attach style data
    pub fn with_data(mut self, data: NodeData) -> Self {
        self.data = data;
        self
    }

    /// Builder: append a child node
    pub fn child(mut self, node: impl Into<TreeNode>) -> Self {
        self.children.push(node.into());
        self
    }

    /// Builder: append a text child
    pub fn text(self, content: impl Into<String>) -> Self {
        self.child(TextNode::new(content))
    }

    /// Check if container has no children
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of direct children
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Iterate child container references
    pub fn child_containers(&self) -> impl Iterator<Item = &ContainerNode> {
        self.children.iter().filter_map(TreeNode::as_container)
    }

    /// Concatenated content of all descendant text nodes, skipping
    /// whitespace-only layers
    pub fn text_content(&self) -> String {
        let mut result = String::new();
        self.collect_text(&mut result);
        result
    }

    fn collect_text(&self, buf: &mut String) {
        for child in &self.children {
            match child {
                TreeNode::Text(t) if t.is_whitespace() => {}
                TreeNode::Text(t) => buf.push_str(&t.content),
                TreeNode::Container(c) => c.collect_text(buf),
            }
        }
    }

    /// Find the first descendant container matching predicate (depth-first)
    pub fn find<F>(&self, predicate: F) -> Option<&ContainerNode>
    where
        F: Fn(&ContainerNode) -> bool,
    {
        self.find_in(&predicate)
    }

    fn find_in<F>(&self, predicate: &F) -> Option<&ContainerNode>
    where
        F: Fn(&ContainerNode) -> bool,
    {
        if predicate(self) {
            return Some(self);
        }
        self.child_containers()
            .find_map(|child| child.find_in(predicate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_container_basics() {
        let node = ContainerNode::new("Card")
            .child(ContainerNode::new("Header").text("Title"))
            .text("Body");

        assert_eq!(node.child_count(), 2);
        assert!(!node.is_empty());
        assert_eq!(node.text_content(), "TitleBody");
        assert_eq!(node.child_containers().count(), 1);
    }

    #[test]
    fn test_text_content_skips_whitespace_layers() {
        let node = ContainerNode::new("Button")
            .text("  ")
            .child(ContainerNode::new("Label").text("Save").text("\n"))
            .text("!");

        assert_eq!(node.text_content(), "Save!");
    }

    #[test]
    fn test_find() {
        let node = ContainerNode::new("Card")
            .child(ContainerNode::new("Header").child(ContainerNode::new("Avatar")))
            .child(ContainerNode::new("Footer"));

        assert_eq!(node.find(|c| c.name == "Avatar").map(|c| c.name.as_str()), Some("Avatar"));
        assert_eq!(node.find(|c| c.name == "Card").map(|c| c.name.as_str()), Some("Card"));
        assert!(node.find(|c| c.name == "Missing").is_none());
    }
}
