//! The core structures of lightdom: the node tree, signals and lifecycle hooks.

mod builder;
mod error;
mod html_tags;
mod lifecycle;
mod signal;
mod structs;

pub use builder::ElementBuilder;
pub use error::BuildError;
pub use html_tags::{is_inline_tag, is_void_tag};
pub use lifecycle::{DefaultHooks, LifecycleHooks};
pub use signal::*;
pub use structs::*;
