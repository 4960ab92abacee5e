use lightdom_core::{Node, Reporter, Signal};

/// A mutation of a single node.
///
/// A command looks at the node variant and only acts on the variants it applies to.
/// Other variants are skipped silently, so that a command can run over a mixed subtree.
pub trait Command {
    fn apply(&mut self, node: &mut Node);
}

impl<F> Command for F
where
    F: FnMut(&mut Node),
{
    #[inline]
    fn apply(&mut self, node: &mut Node) {
        self(node)
    }
}

/// Applies `command` to `node` and then to every descendant of it, in pre-order
pub fn execute_on<C: Command + ?Sized>(node: &mut Node, command: &mut C) {
    command.apply(node);

    if let Node::Element(element_node) = node {
        for child in element_node.children_mut() {
            execute_on(child, command);
        }
    }
}

/// Appends a class to every element it is applied to.
/// Duplicates are allowed and the class name is not validated.
#[derive(Debug)]
pub struct AddClassCommand<R> {
    class_name: String,
    reporter: R,
}

impl<R: Reporter> AddClassCommand<R> {
    pub fn new(class_name: impl Into<String>, reporter: R) -> AddClassCommand<R> {
        AddClassCommand {
            class_name: class_name.into(),
            reporter,
        }
    }

    #[inline]
    pub fn class_name(&self) -> &str {
        &self.class_name
    }
}

impl<R: Reporter> Command for AddClassCommand<R> {
    fn apply(&mut self, node: &mut Node) {
        let Node::Element(element_node) = node else {
            return;
        };

        element_node.add_class(self.class_name.as_str());
        self.reporter.report(Signal::ClassAdded {
            class_name: self.class_name.clone(),
            tag_name: element_node.tag_name().to_owned(),
        });
    }
}
