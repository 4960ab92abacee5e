//! Observable effects of tree operations.
//!
//! Operations never print. Instead they describe what happened as a [`Signal`]
//! and hand it to an injected [`Reporter`], which decides where it goes:
//! structured logs ([`TracingReporter`]), an in-memory list ([`RecordingReporter`])
//! or nowhere ([`NullReporter`]).

use std::{cell::RefCell, fmt, rc::Rc};

use flagset::{flags, FlagSet};
use strum_macros::{Display, IntoStaticStr};

/// Something observable which happened to a node
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Signal {
    /// A class was appended to an element's class list
    ClassAdded { class_name: String, tag_name: String },
    /// A visitor reached a text node
    TextNodeVisited,
    /// A visitor reached an element
    ElementVisited { tag_name: String },
    /// Active state handled a node
    Active,
    /// Inactive state handled a node
    Inactive,
    /// A lifecycle hook ran with its default behavior
    Lifecycle(LifecycleEvent),
}

/// Moments of a node's life a host may report
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "snake_case")]
pub enum LifecycleEvent {
    Created,
    Inserted,
    Removed,
    StylesApplied,
    ClassListApplied,
    TextRendered,
}

flags! {
    /// Discriminant of a [`Signal`], used for filtering
    #[derive(IntoStaticStr)]
    #[strum(serialize_all = "snake_case")]
    pub enum SignalKind: u8 {
        ClassAdded,
        TextNodeVisited,
        ElementVisited,
        Active,
        Inactive,
        Lifecycle,
    }
}

pub type SignalKinds = FlagSet<SignalKind>;

impl SignalKind {
    #[inline]
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

impl Signal {
    pub fn kind(&self) -> SignalKind {
        match self {
            Signal::ClassAdded { .. } => SignalKind::ClassAdded,
            Signal::TextNodeVisited => SignalKind::TextNodeVisited,
            Signal::ElementVisited { .. } => SignalKind::ElementVisited,
            Signal::Active => SignalKind::Active,
            Signal::Inactive => SignalKind::Inactive,
            Signal::Lifecycle(_) => SignalKind::Lifecycle,
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Signal::ClassAdded {
                class_name,
                tag_name,
            } => write!(f, "added class {class_name} to element {tag_name}"),
            Signal::TextNodeVisited => f.write_str("visited text node"),
            Signal::ElementVisited { tag_name } => write!(f, "visited element {tag_name}"),
            Signal::Active => f.write_str("element is active"),
            Signal::Inactive => f.write_str("element is inactive"),
            Signal::Lifecycle(event) => {
                let description = match event {
                    LifecycleEvent::Created => "element created",
                    LifecycleEvent::Inserted => "element inserted into the tree",
                    LifecycleEvent::Removed => "element removed from the tree",
                    LifecycleEvent::StylesApplied => "styles applied to element",
                    LifecycleEvent::ClassListApplied => "class list applied to element",
                    LifecycleEvent::TextRendered => "text rendered on element",
                };
                f.write_str(description)
            }
        }
    }
}

/// Sink for [`Signal`]s.
///
/// Reporting is fire-and-forget: it cannot fail and is never retried.
pub trait Reporter {
    fn report(&self, signal: Signal);
}

impl<R: Reporter + ?Sized> Reporter for &R {
    #[inline]
    fn report(&self, signal: Signal) {
        (**self).report(signal)
    }
}

impl<R: Reporter + ?Sized> Reporter for Rc<R> {
    #[inline]
    fn report(&self, signal: Signal) {
        (**self).report(signal)
    }
}

impl<R: Reporter + ?Sized> Reporter for Box<R> {
    #[inline]
    fn report(&self, signal: Signal) {
        (**self).report(signal)
    }
}

/// Forwards every signal as a `tracing` event at `INFO` level
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn report(&self, signal: Signal) {
        let kind = signal.kind().as_str();
        match &signal {
            Signal::ClassAdded {
                class_name,
                tag_name,
            } => tracing::info!(kind, %class_name, %tag_name, "{signal}"),
            Signal::ElementVisited { tag_name } => tracing::info!(kind, %tag_name, "{signal}"),
            Signal::Lifecycle(event) => tracing::info!(kind, %event, "{signal}"),
            Signal::TextNodeVisited | Signal::Active | Signal::Inactive => {
                tracing::info!(kind, "{signal}")
            }
        }
    }
}

/// Discards every signal
#[derive(Clone, Copy, Debug, Default)]
pub struct NullReporter;

impl Reporter for NullReporter {
    #[inline]
    fn report(&self, _signal: Signal) {}
}

/// Keeps signals in the order they were reported
#[derive(Debug, Default)]
pub struct RecordingReporter {
    signals: RefCell<Vec<Signal>>,
}

impl RecordingReporter {
    pub fn new() -> RecordingReporter {
        RecordingReporter::default()
    }

    /// Snapshot of the recorded signals
    pub fn signals(&self) -> Vec<Signal> {
        self.signals.borrow().clone()
    }

    /// Drains the recorded signals
    pub fn take(&self) -> Vec<Signal> {
        self.signals.take()
    }

    pub fn len(&self) -> usize {
        self.signals.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.signals.borrow().is_empty()
    }
}

impl Reporter for RecordingReporter {
    fn report(&self, signal: Signal) {
        self.signals.borrow_mut().push(signal);
    }
}

/// Passes through only the signals of the given kinds
#[derive(Debug)]
pub struct FilterReporter<R> {
    inner: R,
    kinds: SignalKinds,
}

impl<R: Reporter> FilterReporter<R> {
    pub fn new(inner: R, kinds: impl Into<SignalKinds>) -> FilterReporter<R> {
        FilterReporter {
            inner,
            kinds: kinds.into(),
        }
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Reporter> Reporter for FilterReporter<R> {
    fn report(&self, signal: Signal) {
        if self.kinds.contains(signal.kind()) {
            self.inner.report(signal);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_records_in_order() {
        let reporter = RecordingReporter::new();
        reporter.report(Signal::Active);
        reporter.report(Signal::TextNodeVisited);
        (&reporter).report(Signal::Inactive);

        assert_eq!(
            vec![Signal::Active, Signal::TextNodeVisited, Signal::Inactive],
            reporter.take()
        );
        assert!(reporter.is_empty());
    }

    #[test]
    fn it_filters_by_kind() {
        let filter = FilterReporter::new(
            RecordingReporter::new(),
            SignalKind::Active | SignalKind::ClassAdded,
        );
        filter.report(Signal::Active);
        filter.report(Signal::Inactive);
        filter.report(Signal::ElementVisited {
            tag_name: "p".into(),
        });
        filter.report(Signal::ClassAdded {
            class_name: "hl".into(),
            tag_name: "p".into(),
        });

        let recorded = filter.into_inner().take();
        assert_eq!(2, recorded.len());
        assert_eq!(SignalKind::Active, recorded[0].kind());
        assert_eq!(SignalKind::ClassAdded, recorded[1].kind());
    }

    #[test]
    fn it_describes_signals() {
        let signal = Signal::ClassAdded {
            class_name: "highlight".into(),
            tag_name: "p".into(),
        };
        assert_eq!("added class highlight to element p", signal.to_string());
        assert_eq!(
            "element created",
            Signal::Lifecycle(LifecycleEvent::Created).to_string()
        );
        assert_eq!("text_node_visited", SignalKind::TextNodeVisited.as_str());
        assert_eq!("class_list_applied", LifecycleEvent::ClassListApplied.to_string());
    }
}
