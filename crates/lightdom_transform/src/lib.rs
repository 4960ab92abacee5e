//! Operations layered on top of the lightdom tree:
//! - [`command`]: mutations applied to a node and, recursively, its subtree;
//! - [`visitor`]: read-only inspection driven by the visited nodes;
//! - [`state`]: behavior selected by the caller for a node.

pub mod command;
pub mod state;
pub mod visitor;

pub use command::{execute_on, AddClassCommand, Command};
pub use state::{ActiveState, InactiveState, NodeState, State};
pub use visitor::{Accept, TagCounter, TextVisitor, Visitor};
