//! Extension points for a host which attaches nodes to a real document.
//!
//! Nothing in lightdom calls these hooks. A host performing actual creation,
//! insertion or removal is expected to call them at the matching moments.

use crate::{LifecycleEvent, Node, Reporter, Signal};

/// Lifecycle callbacks of a node.
///
/// Each hook reports its [`LifecycleEvent`] by default and does nothing else.
/// Override the hooks you need.
pub trait LifecycleHooks {
    fn on_created(&self, node: &Node, reporter: &dyn Reporter) {
        report_default(node, reporter, LifecycleEvent::Created)
    }

    fn on_inserted(&self, node: &Node, reporter: &dyn Reporter) {
        report_default(node, reporter, LifecycleEvent::Inserted)
    }

    fn on_removed(&self, node: &Node, reporter: &dyn Reporter) {
        report_default(node, reporter, LifecycleEvent::Removed)
    }

    fn on_styles_applied(&self, node: &Node, reporter: &dyn Reporter) {
        report_default(node, reporter, LifecycleEvent::StylesApplied)
    }

    fn on_class_list_applied(&self, node: &Node, reporter: &dyn Reporter) {
        report_default(node, reporter, LifecycleEvent::ClassListApplied)
    }

    fn on_text_rendered(&self, node: &Node, reporter: &dyn Reporter) {
        report_default(node, reporter, LifecycleEvent::TextRendered)
    }
}

#[inline]
fn report_default(_node: &Node, reporter: &dyn Reporter, event: LifecycleEvent) {
    reporter.report(Signal::Lifecycle(event))
}

/// Hooks with the default behavior only
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultHooks;

impl LifecycleHooks for DefaultHooks {}
