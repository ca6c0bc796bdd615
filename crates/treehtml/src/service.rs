//! HtmlConverter - the main entry point for tree to HTML conversion.

use std::borrow::Cow;
use std::sync::atomic::{AtomicBool, Ordering};

use treehtml_core::{
    escape_html, render, render_element, strip_trailing_newline, Element, ElementKind, Options,
    RenderError,
};

use crate::document::Document;
use crate::{ConvertError, Result};

/// Indent of the root's direct children
const TOP_LEVEL_INDENT: i32 = 0;

/// The main service for converting element trees to HTML
#[derive(Debug, Clone, Default)]
pub struct HtmlConverter {
    options: Options,
}

impl HtmlConverter {
    /// Create a new HtmlConverter with default options
    pub fn new() -> Self {
        Self {
            options: Options::default(),
        }
    }

    /// Create an HtmlConverter with custom options
    pub fn with_options(options: Options) -> Self {
        Self { options }
    }

    /// Convert a document to HTML
    pub fn convert(&self, document: &Document) -> Result<String> {
        self.convert_element(document.root())
    }

    /// Convert any element tree to HTML, treating `root` as the tree's root
    pub fn convert_element(&self, root: &Element) -> Result<String> {
        tracing::debug!(
            root = root.kind.tag(),
            nodes = root.node_count(),
            "Converting element tree"
        );

        match render(root, &self.options) {
            Ok(html) => {
                tracing::debug!(bytes = html.len(), "Converted element tree");
                Ok(html)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to convert element tree");
                Err(e.into())
            }
        }
    }

    /// Convert a document, checking `cancel` before each top-level element.
    ///
    /// Produces the same output as [`convert`](Self::convert) unless `cancel`
    /// is set, in which case the conversion stops with
    /// [`ConvertError::Cancelled`] and nothing is returned.
    pub fn convert_cancellable(&self, document: &Document, cancel: &AtomicBool) -> Result<String> {
        let root = document.root();
        if root.kind != ElementKind::Root {
            check_cancelled(cancel, 0)?;
            return self.convert_element(root);
        }

        tracing::debug!(
            root = root.kind.tag(),
            nodes = root.node_count(),
            "Converting element tree"
        );

        if self.options.max_depth == Some(0) {
            let e = RenderError::DepthLimitExceeded { limit: 0 };
            tracing::warn!(error = %e, "Failed to convert element tree");
            return Err(e.into());
        }

        let mut inner = String::new();
        for (index, child) in root.children.iter().enumerate() {
            check_cancelled(cancel, index)?;
            let html = render_element(child, TOP_LEVEL_INDENT, &self.options).map_err(|e| {
                tracing::warn!(error = %e, index, "Failed to convert element tree");
                e
            })?;
            inner.push_str(&html);
        }

        let html = strip_trailing_newline(&inner).to_string();
        tracing::debug!(bytes = html.len(), "Converted element tree");
        Ok(html)
    }

    /// Escape HTML special characters in a string, keeping entity references
    pub fn escape<'a>(&self, text: &'a str) -> Cow<'a, str> {
        escape_html(text, false)
    }

    /// Get the current options
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut Options {
        &mut self.options
    }
}

fn check_cancelled(cancel: &AtomicBool, index: usize) -> Result<()> {
    if cancel.load(Ordering::Relaxed) {
        tracing::warn!(index, "Conversion cancelled");
        return Err(ConvertError::Cancelled);
    }
    Ok(())
}
