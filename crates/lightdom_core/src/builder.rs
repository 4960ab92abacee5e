use crate::{BuildError, ClassList, ClosingType, DisplayType, ElementNode, Node};

/// Fluent construction of an [`ElementNode`].
///
/// Unless set explicitly, `display` and `closing` are derived from the tag name,
/// see [`DisplayType::for_tag`] and [`ClosingType::for_tag`].
///
/// ```
/// use lightdom_core::{ClosingType, ElementBuilder, Node};
///
/// let img = ElementBuilder::new("img").child(Node::text("alt")).build().unwrap();
/// assert_eq!(ClosingType::SingleTag, img.closing());
/// assert_eq!(1, img.children().count());
/// ```
#[derive(Debug, Default)]
pub struct ElementBuilder {
    tag_name: String,
    display: Option<DisplayType>,
    closing: Option<ClosingType>,
    classes: ClassList,
    children: Vec<Node>,
}

impl ElementBuilder {
    pub fn new(tag_name: impl Into<String>) -> ElementBuilder {
        ElementBuilder {
            tag_name: tag_name.into(),
            ..Default::default()
        }
    }

    pub fn display(mut self, display: DisplayType) -> Self {
        self.display = Some(display);
        self
    }

    pub fn closing(mut self, closing: ClosingType) -> Self {
        self.closing = Some(closing);
        self
    }

    pub fn class(mut self, class_name: impl Into<String>) -> Self {
        self.classes.push(class_name.into());
        self
    }

    pub fn classes<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.classes.extend(classes.into_iter().map(Into::into));
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    /// Shorthand for a text child
    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::text(text))
    }

    pub fn build(self) -> Result<ElementNode, BuildError> {
        let display = self
            .display
            .unwrap_or_else(|| DisplayType::for_tag(&self.tag_name));
        let closing = self
            .closing
            .unwrap_or_else(|| ClosingType::for_tag(&self.tag_name));

        ElementNode::new(self.tag_name, display, closing, self.classes, self.children)
    }

    /// Builds and wraps into [`Node::Element`]
    #[inline]
    pub fn build_node(self) -> Result<Node, BuildError> {
        self.build().map(Node::Element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_derives_defaults_from_tag() {
        let img = ElementBuilder::new("img").build().unwrap();
        assert_eq!(ClosingType::SingleTag, img.closing());
        assert_eq!(DisplayType::Inline, img.display());

        let ul = ElementBuilder::new("ul").build().unwrap();
        assert_eq!(ClosingType::ClosingTag, ul.closing());
        assert_eq!(DisplayType::Block, ul.display());
    }

    #[test]
    fn it_prefers_explicit_settings() {
        let div = ElementBuilder::new("div")
            .display(DisplayType::Inline)
            .closing(ClosingType::SingleTag)
            .build()
            .unwrap();
        assert_eq!(DisplayType::Inline, div.display());
        assert!(div.is_single_tag());
    }

    #[test]
    fn it_collects_classes_and_children_in_order() {
        // <ul class="list" class="dense"><li>1</li>2</ul>
        let ul = ElementBuilder::new("ul")
            .class("list")
            .classes(["dense"])
            .child(ElementBuilder::new("li").text("1").build().unwrap())
            .text("2")
            .build()
            .unwrap();

        assert_eq!(&["list", "dense"], ul.classes());

        let mut children = ul.children();
        assert!(matches!(children.next(), Some(Node::Element(li)) if li.tag_name() == "li"));
        assert!(matches!(children.next(), Some(Node::Text(t)) if t.text() == "2"));
        assert!(children.next().is_none());
    }

    #[test]
    fn it_fails_on_empty_tag() {
        assert_eq!(
            Err(BuildError::EmptyTagName),
            ElementBuilder::new("").text("orphan").build_node()
        );
    }
}
