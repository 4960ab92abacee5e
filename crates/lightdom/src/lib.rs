//! The main public crate of the `lightdom` project.
//!
//! Build a tree, render it, and run operations over it:
//!
//! ```
//! use lightdom::{execute_on, AddClassCommand, ElementBuilder, NullReporter, Render};
//!
//! let mut p = ElementBuilder::new("p")
//!     .class("paragraph")
//!     .text("A")
//!     .text("B")
//!     .build_node()
//!     .unwrap();
//! assert_eq!(r#"<p class="paragraph">AB</p>"#, p.outer_markup());
//!
//! execute_on(&mut p, &mut AddClassCommand::new("hl", NullReporter));
//! assert_eq!(r#"<p class="paragraph" class="hl">AB</p>"#, p.outer_markup());
//! ```

pub use lightdom_core::*;
pub use lightdom_render::*;
pub use lightdom_transform::*;

pub mod demo;
