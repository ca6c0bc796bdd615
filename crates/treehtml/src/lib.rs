//! # treehtml
//!
//! Convert parsed document trees to HTML.
//!
//! ## Design
//!
//! This library does not parse markup. It accepts the element tree a parser
//! has already built and renders it in a single depth-first pass:
//!
//! - **Typed tree**: every element kind carries exactly the data it needs
//! - **Deterministic output**: attributes are written sorted by name
//! - **All-or-nothing**: an element without a rendering rule fails the whole
//!   conversion, no partial HTML is returned
//!
//! ## Example
//!
//! ```rust
//! use treehtml::{Document, Element, HtmlConverter};
//!
//! let converter = HtmlConverter::new();
//!
//! let doc = Document::from_children([
//!     Element::header(1).with_child(Element::text("Hello World")),
//! ]);
//!
//! let html = converter.convert(&doc).unwrap();
//! assert_eq!(html, "<h1>Hello World</h1>");
//! ```

mod document;
mod service;

pub use document::Document;
pub use service::HtmlConverter;
pub use treehtml_core::{
    escape_html, format_attributes, Attributes, Element, ElementKind, ListKind, Options,
    RenderError, DEFAULT_MAX_DEPTH,
};

/// Error type for conversions
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("Conversion cancelled")]
    Cancelled,
}

pub type Result<T> = std::result::Result<T, ConvertError>;
