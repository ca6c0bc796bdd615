//! Document wrapper around a parsed element tree.

use treehtml_core::{Element, ElementKind};

/// A parsed document ready for conversion.
///
/// Owns the root element of the tree. The tree is never modified by the
/// converter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    root: Element,
}

impl Document {
    /// Wrap an existing tree. `root` is normally an [`ElementKind::Root`]
    /// element, but any element is accepted.
    pub fn new(root: Element) -> Self {
        Self { root }
    }

    /// Create a document whose root holds the given top-level elements
    pub fn from_children(children: impl IntoIterator<Item = Element>) -> Self {
        Self::new(Element::root().with_children(children))
    }

    /// Get the root element
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Take the root element out of the document
    pub fn into_root(self) -> Element {
        self.root
    }

    /// Check if the root is a proper root element
    pub fn has_root_element(&self) -> bool {
        self.root.kind == ElementKind::Root
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new(Element::root())
    }
}

impl From<Element> for Document {
    fn from(root: Element) -> Self {
        Self::new(root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_children() {
        let doc = Document::from_children([Element::paragraph(), Element::paragraph()]);
        assert!(doc.has_root_element());
        assert_eq!(doc.root().children.len(), 2);
    }

    #[test]
    fn test_default_is_empty_root() {
        let doc = Document::default();
        assert!(doc.has_root_element());
        assert!(doc.root().children.is_empty());
    }

    #[test]
    fn test_from_element() {
        let doc: Document = Element::paragraph().into();
        assert!(!doc.has_root_element());
        assert_eq!(doc.into_root(), Element::paragraph());
    }
}
