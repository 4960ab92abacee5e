use smallvec::SmallVec;
use strum_macros::{AsRefStr, Display, EnumString};

use crate::error::BuildError;

/// Class list of an [`ElementNode`].
/// Most elements carry one or two classes, hence the inline capacity.
pub type ClassList = SmallVec<[String; 2]>;

/// A Node represents a part of the markup tree.
/// There are two possible Node types:
///
/// ### `Text`
/// A leaf holding raw text. The text is never escaped,
///   it is rendered exactly as it was given.
///
/// ### `Element`
/// A tagged element with classes and an ordered list of owned children.
///   `<tag class="...">children</tag>`, or `<tag class="..." />`
///   when the element is a [`ClosingType::SingleTag`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Text(TextNode),
    Element(ElementNode),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextNode {
    text: String,
}

/// Element node is an HTML-like tag with a class list and children.
///
/// The tag name, display and closing type are fixed at construction.
/// The class list may grow, e.g. through commands.
/// Children are fixed at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElementNode {
    tag_name: String,
    display: DisplayType,
    closing: ClosingType,
    classes: ClassList,
    children: Vec<Node>,
}

/// How the element participates in layout.
/// Carried as metadata only, it does not affect rendering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, AsRefStr, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum DisplayType {
    #[default]
    Block,
    Inline,
}

/// Controls the rendered shape of an element
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, AsRefStr, Display, EnumString)]
pub enum ClosingType {
    /// `<tag />`, children are never rendered
    #[strum(serialize = "single")]
    SingleTag,
    /// `<tag>children</tag>`
    #[default]
    #[strum(serialize = "closing")]
    ClosingTag,
}

impl Node {
    /// Shorthand for `Node::Text(TextNode::new(text))`
    #[inline]
    pub fn text(text: impl Into<String>) -> Node {
        Node::Text(TextNode::new(text))
    }

    /// Direct children of this node, in order.
    /// Text nodes have none.
    pub fn children(&self) -> std::slice::Iter<'_, Node> {
        match self {
            Node::Text(_) => Default::default(),
            Node::Element(element) => element.children(),
        }
    }

    /// Pre-order iterator over this node and all of its descendants
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }

    #[inline]
    pub fn as_element(&self) -> Option<&ElementNode> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }

    #[inline]
    pub fn as_text(&self) -> Option<&TextNode> {
        match self {
            Node::Text(text) => Some(text),
            Node::Element(_) => None,
        }
    }
}

impl From<TextNode> for Node {
    fn from(value: TextNode) -> Self {
        Node::Text(value)
    }
}

impl From<ElementNode> for Node {
    fn from(value: ElementNode) -> Self {
        Node::Element(value)
    }
}

impl TextNode {
    pub fn new(text: impl Into<String>) -> TextNode {
        TextNode { text: text.into() }
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl ElementNode {
    /// Creates an element from all of its parts.
    /// Fails when `tag_name` is empty.
    pub fn new(
        tag_name: impl Into<String>,
        display: DisplayType,
        closing: ClosingType,
        classes: impl IntoIterator<Item = String>,
        children: Vec<Node>,
    ) -> Result<ElementNode, BuildError> {
        let tag_name = tag_name.into();
        if tag_name.is_empty() {
            return Err(BuildError::EmptyTagName);
        }

        Ok(ElementNode {
            tag_name,
            display,
            closing,
            classes: classes.into_iter().collect(),
            children,
        })
    }

    #[inline]
    pub fn tag_name(&self) -> &str {
        &self.tag_name
    }

    #[inline]
    pub fn display(&self) -> DisplayType {
        self.display
    }

    #[inline]
    pub fn closing(&self) -> ClosingType {
        self.closing
    }

    #[inline]
    pub fn is_single_tag(&self) -> bool {
        matches!(self.closing, ClosingType::SingleTag)
    }

    #[inline]
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Appends a class to the end of the class list.
    /// Duplicates are kept, the value is not validated.
    pub fn add_class(&mut self, class_name: impl Into<String>) {
        self.classes.push(class_name.into());
    }

    #[inline]
    pub fn children(&self) -> std::slice::Iter<'_, Node> {
        self.children.iter()
    }

    /// Mutable access to the children themselves, not to the list.
    /// Used by traversals which mutate the subtree in place.
    #[inline]
    pub fn children_mut(&mut self) -> std::slice::IterMut<'_, Node> {
        self.children.iter_mut()
    }
}

/// See [`Node::descendants`]
#[derive(Clone, Debug)]
pub struct Descendants<'n> {
    stack: Vec<&'n Node>,
}

impl<'n> Iterator for Descendants<'n> {
    type Item = &'n Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Reversed so that the first child is popped first
        self.stack.extend(node.children().rev());
        Some(node)
    }
}
