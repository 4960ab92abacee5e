//! Markup rendering of lightdom trees.
//!
//! ```
//! use lightdom_core::ElementBuilder;
//! use lightdom_render::Render;
//!
//! let p = ElementBuilder::new("p").class("paragraph").text("A").text("B").build_node().unwrap();
//! assert_eq!(r#"<p class="paragraph">AB</p>"#, p.outer_markup());
//! assert_eq!("AB", p.inner_markup());
//! ```

mod elements;
mod options;
mod renderer;
mod text;

use lightdom_core::{ElementNode, Node, TextNode};

pub use options::{ClassAttributeStyle, RenderOptions};
pub use renderer::MarkupRenderer;

/// Markup of a node rendered with the default [`RenderOptions`]
pub trait Render {
    /// The node's markup including the node itself
    fn outer_markup(&self) -> String;

    /// The markup of the node's contents only
    fn inner_markup(&self) -> String;
}

impl Render for Node {
    fn outer_markup(&self) -> String {
        MarkupRenderer::default().render(self)
    }

    fn inner_markup(&self) -> String {
        MarkupRenderer::default().render_inner(self)
    }
}

impl Render for TextNode {
    #[inline]
    fn outer_markup(&self) -> String {
        self.text().to_owned()
    }

    #[inline]
    fn inner_markup(&self) -> String {
        self.text().to_owned()
    }
}

impl Render for ElementNode {
    fn outer_markup(&self) -> String {
        let mut buf = String::new();
        MarkupRenderer::default().render_element_into(&mut buf, self);
        buf
    }

    fn inner_markup(&self) -> String {
        let mut buf = String::new();
        MarkupRenderer::default().render_children_into(&mut buf, self.children());
        buf
    }
}
