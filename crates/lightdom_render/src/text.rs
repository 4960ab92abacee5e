use lightdom_core::TextNode;

use crate::MarkupRenderer;

impl MarkupRenderer {
    /// Text is written verbatim
    #[inline]
    pub fn render_text_into(&self, buf: &mut String, text_node: &TextNode) {
        buf.push_str(text_node.text());
    }
}
