use lightdom_core::{ElementNode, Node};

use crate::{ClassAttributeStyle, MarkupRenderer};

impl MarkupRenderer {
    /// Generates `<tag class="...">children</tag>`, or `<tag class="..." />`
    /// for a single tag. Children of a single tag are not rendered.
    pub fn render_element_into(&self, buf: &mut String, element_node: &ElementNode) {
        let tag_name = element_node.tag_name();

        buf.push('<');
        buf.push_str(tag_name);
        self.render_classes_into(buf, element_node.classes());

        if element_node.is_single_tag() {
            buf.push_str(" />");
            return;
        }

        buf.push('>');
        self.render_children_into(buf, element_node.children());
        buf.push_str("</");
        buf.push_str(tag_name);
        buf.push('>');
    }

    pub fn render_children_into<'n>(
        &self,
        buf: &mut String,
        children: impl IntoIterator<Item = &'n Node>,
    ) {
        for child in children {
            self.render_into(buf, child);
        }
    }

    fn render_classes_into(&self, buf: &mut String, classes: &[String]) {
        match self.options.class_attributes {
            ClassAttributeStyle::Repeated => {
                for class_name in classes {
                    buf.push_str(" class=\"");
                    buf.push_str(class_name);
                    buf.push('"');
                }
            }

            ClassAttributeStyle::Merged => {
                let Some((first, rest)) = classes.split_first() else {
                    return;
                };

                buf.push_str(" class=\"");
                buf.push_str(first);
                for class_name in rest {
                    buf.push(' ');
                    buf.push_str(class_name);
                }
                buf.push('"');
            }
        }
    }
}
