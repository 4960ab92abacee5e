//! The sample tree used by the `lightdom` binary and the benchmarks

use lightdom_core::{BuildError, ClosingType, DisplayType, ElementNode, Node};

/// `<p class="paragraph">` with two text nodes
pub fn paragraph() -> Result<Node, BuildError> {
    ElementNode::new(
        "p",
        DisplayType::Block,
        ClosingType::ClosingTag,
        ["paragraph".to_string()],
        vec![
            Node::text("This is the first paragraph."),
            Node::text("This is the second paragraph."),
        ],
    )
    .map(Node::Element)
}

/// `<ul class="list">` with three text items
pub fn unordered_list() -> Result<Node, BuildError> {
    ElementNode::new(
        "ul",
        DisplayType::Block,
        ClosingType::ClosingTag,
        ["list".to_string()],
        vec![
            Node::text("Item 1"),
            Node::text("Item 2"),
            Node::text("Item 3"),
        ],
    )
    .map(Node::Element)
}
