use lightdom_core::{Node, Reporter, Signal};
use strum_macros::{Display, EnumString};

/// Behavior selected by the caller for a node.
///
/// The tree does not know its own state: the caller tracks the mode
/// and picks the matching `State`. Each call is independent of the previous ones.
pub trait State {
    fn handle(&self, node: &Node);
}

#[derive(Debug)]
pub struct ActiveState<R> {
    reporter: R,
}

#[derive(Debug)]
pub struct InactiveState<R> {
    reporter: R,
}

impl<R: Reporter> ActiveState<R> {
    pub fn new(reporter: R) -> ActiveState<R> {
        ActiveState { reporter }
    }
}

impl<R: Reporter> InactiveState<R> {
    pub fn new(reporter: R) -> InactiveState<R> {
        InactiveState { reporter }
    }
}

impl<R: Reporter> State for ActiveState<R> {
    fn handle(&self, _node: &Node) {
        self.reporter.report(Signal::Active);
    }
}

impl<R: Reporter> State for InactiveState<R> {
    fn handle(&self, _node: &Node) {
        self.reporter.report(Signal::Inactive);
    }
}

/// Mode tracked by a driver, used to pick a [`State`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum NodeState {
    Active,
    #[default]
    Inactive,
}

impl NodeState {
    /// The [`State`] implementing this mode
    pub fn handler<'r>(self, reporter: &'r dyn Reporter) -> Box<dyn State + 'r> {
        match self {
            NodeState::Active => Box::new(ActiveState::new(reporter)),
            NodeState::Inactive => Box::new(InactiveState::new(reporter)),
        }
    }

    #[must_use]
    pub fn toggled(self) -> NodeState {
        match self {
            NodeState::Active => NodeState::Inactive,
            NodeState::Inactive => NodeState::Active,
        }
    }
}

#[cfg(test)]
mod tests {
    use lightdom_core::{ElementBuilder, RecordingReporter};

    use super::*;

    #[test]
    fn it_signals_regardless_of_node() {
        let reporter = RecordingReporter::new();
        let active = ActiveState::new(&reporter);
        let inactive = InactiveState::new(&reporter);

        let p = ElementBuilder::new("p").text("A").build_node().unwrap();
        let text = Node::text("B");

        active.handle(&p);
        active.handle(&text);
        inactive.handle(&p);
        active.handle(&p);

        assert_eq!(
            vec![
                Signal::Active,
                Signal::Active,
                Signal::Inactive,
                Signal::Active
            ],
            reporter.take()
        );
    }

    #[test]
    fn it_does_not_touch_the_node() {
        let reporter = RecordingReporter::new();
        let p = ElementBuilder::new("p").class("x").build_node().unwrap();
        let before = p.clone();

        InactiveState::new(&reporter).handle(&p);

        assert_eq!(before, p);
    }

    #[test]
    fn it_selects_handler_by_mode() {
        let reporter = RecordingReporter::new();
        let node = Node::text("A");

        let mut mode: NodeState = "active".parse().unwrap();
        mode.handler(&reporter).handle(&node);
        mode = mode.toggled();
        mode.handler(&reporter).handle(&node);

        assert_eq!(NodeState::Inactive, mode);
        assert_eq!(vec![Signal::Active, Signal::Inactive], reporter.take());
    }
}
