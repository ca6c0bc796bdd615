//! treehtml-core - Element tree and HTML serialization
//!
//! This crate provides the element tree handed over by a markup parser and
//! the renderer that turns it into HTML. It is used by `treehtml`, which adds
//! the document wrapper and the conversion service on top.
//!
//! # Architecture
//!
//! ```text
//!                 ┌──────────────┐
//! Parser ───────▶ │ Element tree │ ──render──▶ HTML String
//!                 └──────────────┘
//! ```
//!
//! Each element is rendered after its children: the children's output is
//! concatenated and then wrapped in the element's own markup. Block-level
//! tags are indented by two spaces per tree level.
//!
//! # Example
//!
//! ```rust
//! use treehtml_core::{render, Element, ElementKind, Options};
//!
//! let tree = Element::root().with_child(
//!     Element::paragraph()
//!         .with_child(Element::text("This is "))
//!         .with_child(Element::new(ElementKind::Strong).with_child(Element::text("bold")))
//!         .with_child(Element::text(" text.")),
//! );
//!
//! let html = render(&tree, &Options::default()).unwrap();
//! assert_eq!(html, "<p>This is <strong>bold</strong> text.</p>");
//! ```

mod ast;
mod attributes;
mod escape;
mod options;
mod render;

pub use ast::{Attributes, Element, ElementKind, ListKind};
pub use attributes::format_attributes;
pub use escape::escape_html;
pub use options::{Options, DEFAULT_MAX_DEPTH};
pub use render::{render, render_element, strip_trailing_newline, ROOT_INDENT};

/// Error type for rendering
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("Conversion of element {0} not implemented")]
    UnsupportedNodeType(String),

    #[error("Element tree is nested deeper than {limit} levels")]
    DepthLimitExceeded { limit: usize },
}

pub type Result<T> = std::result::Result<T, RenderError>;
