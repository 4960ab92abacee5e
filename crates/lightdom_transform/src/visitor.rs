use fxhash::FxHashMap;
use lightdom_core::{ElementNode, Node, Reporter, Signal, TextNode};

/// Read-only inspection of a tree, one method per node variant.
///
/// Descent into children is driven by [`Accept`], not by the visitor,
/// so a visitor only describes what happens at a single node.
pub trait Visitor {
    fn visit_text(&mut self, text_node: &TextNode);
    fn visit_element(&mut self, element_node: &ElementNode);
}

/// Dispatches a [`Visitor`] over a node and its subtree in pre-order
pub trait Accept {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V);
}

impl Accept for Node {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        match self {
            Node::Text(text_node) => text_node.accept(visitor),
            Node::Element(element_node) => element_node.accept(visitor),
        }
    }
}

impl Accept for TextNode {
    #[inline]
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        visitor.visit_text(self)
    }
}

impl Accept for ElementNode {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        visitor.visit_element(self);

        for child in self.children() {
            child.accept(visitor);
        }
    }
}

/// Reports every node it visits
#[derive(Debug)]
pub struct TextVisitor<R> {
    reporter: R,
}

impl<R: Reporter> TextVisitor<R> {
    pub fn new(reporter: R) -> TextVisitor<R> {
        TextVisitor { reporter }
    }
}

impl<R: Reporter> Visitor for TextVisitor<R> {
    fn visit_text(&mut self, _text_node: &TextNode) {
        self.reporter.report(Signal::TextNodeVisited);
    }

    fn visit_element(&mut self, element_node: &ElementNode) {
        self.reporter.report(Signal::ElementVisited {
            tag_name: element_node.tag_name().to_owned(),
        });
    }
}

/// Tallies elements by tag name, and text nodes
#[derive(Debug, Default)]
pub struct TagCounter {
    elements: FxHashMap<String, usize>,
    text_nodes: usize,
}

impl TagCounter {
    pub fn new() -> TagCounter {
        TagCounter::default()
    }

    /// Number of elements with `tag_name` seen so far
    pub fn count(&self, tag_name: &str) -> usize {
        self.elements.get(tag_name).copied().unwrap_or_default()
    }

    pub fn text_nodes(&self) -> usize {
        self.text_nodes
    }

    pub fn total_elements(&self) -> usize {
        self.elements.values().sum()
    }

    /// Distinct tag names, sorted
    pub fn tag_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.elements.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Visitor for TagCounter {
    fn visit_text(&mut self, _text_node: &TextNode) {
        self.text_nodes += 1;
    }

    fn visit_element(&mut self, element_node: &ElementNode) {
        let tag_name = element_node.tag_name();
        match self.elements.get_mut(tag_name) {
            Some(count) => *count += 1,
            None => {
                tracing::trace!(tag_name, "new tag");
                self.elements.insert(tag_name.to_owned(), 1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use lightdom_core::{ElementBuilder, RecordingReporter};

    use super::*;

    fn tree() -> Node {
        // <div><p class="paragraph">AB</p><img>hidden</img>C</div>
        ElementBuilder::new("div")
            .child(
                ElementBuilder::new("p")
                    .class("paragraph")
                    .text("A")
                    .text("B")
                    .build()
                    .unwrap(),
            )
            .child(ElementBuilder::new("img").text("hidden").build().unwrap())
            .text("C")
            .build_node()
            .unwrap()
    }

    #[test]
    fn it_visits_in_pre_order() {
        let reporter = RecordingReporter::new();
        tree().accept(&mut TextVisitor::new(&reporter));

        let element = |tag: &str| Signal::ElementVisited {
            tag_name: tag.to_owned(),
        };
        assert_eq!(
            vec![
                element("div"),
                element("p"),
                Signal::TextNodeVisited,
                Signal::TextNodeVisited,
                element("img"),
                Signal::TextNodeVisited,
                Signal::TextNodeVisited,
            ],
            reporter.take()
        );
    }

    #[test]
    fn it_visits_every_node_once() {
        let node = tree();
        let reporter = RecordingReporter::new();
        node.accept(&mut TextVisitor::new(&reporter));

        assert_eq!(node.descendants().count(), reporter.len());
    }

    #[test]
    fn it_visits_single_text() {
        let reporter = RecordingReporter::new();
        Node::text("lonely").accept(&mut TextVisitor::new(&reporter));
        assert_eq!(vec![Signal::TextNodeVisited], reporter.take());
    }

    #[test]
    fn it_counts_tags() {
        let mut counter = TagCounter::new();
        tree().accept(&mut counter);

        assert_eq!(1, counter.count("div"));
        assert_eq!(1, counter.count("p"));
        assert_eq!(1, counter.count("img"));
        assert_eq!(0, counter.count("span"));
        assert_eq!(3, counter.total_elements());
        assert_eq!(4, counter.text_nodes());
        assert_eq!(vec!["div", "img", "p"], counter.tag_names());
    }

    #[test]
    fn it_dispatches_dyn_visitors() {
        let reporter = RecordingReporter::new();
        let mut text_visitor = TextVisitor::new(&reporter);
        let mut counter = TagCounter::new();
        let visitors: [&mut dyn Visitor; 2] = [&mut text_visitor, &mut counter];

        let node = tree();
        for visitor in visitors {
            node.accept(visitor);
        }

        assert_eq!(7, reporter.len());
        assert_eq!(3, counter.total_elements());
    }
}
