use lightdom_core::Node;

use crate::RenderOptions;

/// Renders nodes to markup text.
///
/// Rendering is pure: the same tree always renders to the same string,
/// and nothing is escaped.
#[derive(Clone, Debug, Default)]
pub struct MarkupRenderer {
    pub options: RenderOptions,
}

impl MarkupRenderer {
    pub fn new(options: RenderOptions) -> MarkupRenderer {
        MarkupRenderer { options }
    }

    /// Outer markup of `node`, i.e. including the node itself
    pub fn render(&self, node: &Node) -> String {
        let mut buf = String::new();
        self.render_into(&mut buf, node);
        buf
    }

    /// Inner markup of `node`: concatenated outer markup of its children.
    /// For a text node, this is the text itself.
    pub fn render_inner(&self, node: &Node) -> String {
        let mut buf = String::new();
        match node {
            Node::Text(text_node) => self.render_text_into(&mut buf, text_node),
            Node::Element(element_node) => {
                self.render_children_into(&mut buf, element_node.children())
            }
        }
        buf
    }

    /// Appends the outer markup of `node` to `buf`
    pub fn render_into(&self, buf: &mut String, node: &Node) {
        match node {
            Node::Text(text_node) => self.render_text_into(buf, text_node),
            Node::Element(element_node) => self.render_element_into(buf, element_node),
        }
    }
}
