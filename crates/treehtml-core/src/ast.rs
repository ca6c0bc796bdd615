//! Element tree
//!
//! This module defines the typed element tree handed over by an upstream
//! parser. The renderer only reads the fields each element kind carries.

use indexmap::IndexMap;

/// Attribute map of an element.
///
/// Keeps insertion order; a `None` value marks an attribute that is present
/// on the element but must not be written out.
pub type Attributes = IndexMap<String, Option<String>>;

/// Ordered or unordered list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListKind {
    /// `<ul>`
    #[default]
    Unordered,
    /// `<ol>`
    Ordered,
}

impl ListKind {
    /// HTML tag name for this list kind
    pub fn tag(self) -> &'static str {
        match self {
            ListKind::Unordered => "ul",
            ListKind::Ordered => "ol",
        }
    }
}

/// The type of an element together with its type-specific payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementKind {
    /// Root of the tree
    Root,

    /// Blank line(s) between blocks
    Blank,

    /// Plain text
    Text(String),

    /// Paragraph
    Paragraph,

    /// Header with level (1-6)
    Header { level: u8 },

    /// Ordered or unordered list
    List(ListKind),

    /// List item; `first_as_para` is set when the first child is rendered
    /// as its own paragraph
    ListItem { first_as_para: bool },

    /// Emphasis
    Emphasis,

    /// Strong emphasis
    Strong,

    /// Link
    Link,

    /// Image
    Image,

    /// Inline code
    CodeSpan(String),

    /// Code block
    CodeBlock(String),

    /// Block quote
    BlockQuote,

    /// Horizontal rule
    HorizontalRule,

    /// Raw HTML inside a paragraph
    HtmlInline(String),

    /// Raw HTML block
    HtmlBlock(String),

    /// Hard line break
    LineBreak,

    /// End-of-block marker left by the parser
    EndOfBlock,

    /// Element type produced by a parser extension; has no rendering rule
    Other(String),
}

impl ElementKind {
    /// Build a kind from a parser type tag.
    ///
    /// `value` is used by the text-bearing kinds and ignored otherwise.
    /// Headers get level 1 and list items an unset `first_as_para`; adjust
    /// the payload afterwards if the parser knows better. Unknown tags yield
    /// [`ElementKind::Other`].
    pub fn from_tag(tag: &str, value: &str) -> Self {
        match tag {
            "root" => ElementKind::Root,
            "blank" => ElementKind::Blank,
            "text" => ElementKind::Text(value.to_string()),
            "p" => ElementKind::Paragraph,
            "header" => ElementKind::Header { level: 1 },
            "ul" => ElementKind::List(ListKind::Unordered),
            "ol" => ElementKind::List(ListKind::Ordered),
            "li" => ElementKind::ListItem {
                first_as_para: false,
            },
            "em" => ElementKind::Emphasis,
            "strong" => ElementKind::Strong,
            "a" => ElementKind::Link,
            "img" => ElementKind::Image,
            "codespan" => ElementKind::CodeSpan(value.to_string()),
            "codeblock" => ElementKind::CodeBlock(value.to_string()),
            "blockquote" => ElementKind::BlockQuote,
            "hr" => ElementKind::HorizontalRule,
            "html_inline" => ElementKind::HtmlInline(value.to_string()),
            "html_block" => ElementKind::HtmlBlock(value.to_string()),
            "br" => ElementKind::LineBreak,
            "eob" => ElementKind::EndOfBlock,
            other => ElementKind::Other(other.to_string()),
        }
    }

    /// The parser type tag of this kind
    pub fn tag(&self) -> &str {
        match self {
            ElementKind::Root => "root",
            ElementKind::Blank => "blank",
            ElementKind::Text(_) => "text",
            ElementKind::Paragraph => "p",
            ElementKind::Header { .. } => "header",
            ElementKind::List(kind) => kind.tag(),
            ElementKind::ListItem { .. } => "li",
            ElementKind::Emphasis => "em",
            ElementKind::Strong => "strong",
            ElementKind::Link => "a",
            ElementKind::Image => "img",
            ElementKind::CodeSpan(_) => "codespan",
            ElementKind::CodeBlock(_) => "codeblock",
            ElementKind::BlockQuote => "blockquote",
            ElementKind::HorizontalRule => "hr",
            ElementKind::HtmlInline(_) => "html_inline",
            ElementKind::HtmlBlock(_) => "html_block",
            ElementKind::LineBreak => "br",
            ElementKind::EndOfBlock => "eob",
            ElementKind::Other(tag) => tag,
        }
    }
}

/// A node of the element tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub kind: ElementKind,
    pub attrs: Option<Attributes>,
    pub children: Vec<Element>,
}

impl Element {
    /// Create an element without attributes or children
    pub fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            attrs: None,
            children: Vec::new(),
        }
    }

    pub fn root() -> Self {
        Self::new(ElementKind::Root)
    }

    pub fn text(value: &str) -> Self {
        Self::new(ElementKind::Text(value.to_string()))
    }

    pub fn paragraph() -> Self {
        Self::new(ElementKind::Paragraph)
    }

    pub fn header(level: u8) -> Self {
        Self::new(ElementKind::Header { level })
    }

    pub fn list(kind: ListKind) -> Self {
        Self::new(ElementKind::List(kind))
    }

    pub fn list_item(first_as_para: bool) -> Self {
        Self::new(ElementKind::ListItem { first_as_para })
    }

    pub fn code_span(value: &str) -> Self {
        Self::new(ElementKind::CodeSpan(value.to_string()))
    }

    pub fn code_block(value: &str) -> Self {
        Self::new(ElementKind::CodeBlock(value.to_string()))
    }

    /// Append a child, builder style
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Append several children, builder style
    pub fn with_children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }

    /// Set an attribute, builder style
    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.set_attr(name, Some(value));
        self
    }

    /// Set an attribute whose value is null, builder style
    pub fn with_null_attr(mut self, name: &str) -> Self {
        self.set_attr(name, None);
        self
    }

    /// Add a child node
    pub fn add_child(&mut self, child: Element) {
        self.children.push(child);
    }

    /// Set an attribute, replacing an existing value with the same name
    pub fn set_attr(&mut self, name: &str, value: Option<&str>) {
        self.attrs
            .get_or_insert_with(Attributes::new)
            .insert(name.to_string(), value.map(str::to_string));
    }

    /// Get an attribute value by name; `None` if missing or null
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.as_ref()?.get(name)?.as_deref()
    }

    /// Number of levels in this subtree (a leaf has depth 1)
    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(Element::depth).max().unwrap_or(0)
    }

    /// Number of elements in this subtree, including `self`
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Element::node_count).sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KNOWN_TAGS: &[&str] = &[
        "root", "blank", "text", "p", "header", "ul", "ol", "li", "em", "strong", "a", "img",
        "codespan", "codeblock", "blockquote", "hr", "html_inline", "html_block", "br", "eob",
    ];

    #[test]
    fn test_from_tag_matches_tag() {
        for tag in KNOWN_TAGS {
            let kind = ElementKind::from_tag(tag, "v");
            assert_eq!(kind.tag(), *tag);
            assert!(!matches!(kind, ElementKind::Other(_)), "{tag} parsed as Other");
        }
    }

    #[test]
    fn test_from_tag_unknown() {
        let kind = ElementKind::from_tag("dl", "");
        assert_eq!(kind, ElementKind::Other("dl".to_string()));
        assert_eq!(kind.tag(), "dl");
    }

    #[test]
    fn test_from_tag_keeps_value() {
        assert_eq!(
            ElementKind::from_tag("codeblock", "x = 1\n"),
            ElementKind::CodeBlock("x = 1\n".to_string())
        );
        assert_eq!(ElementKind::from_tag("p", "ignored"), ElementKind::Paragraph);
    }

    #[test]
    fn test_set_attr_replaces() {
        let el = Element::paragraph()
            .with_attr("class", "a")
            .with_attr("class", "b");
        assert_eq!(el.attr("class"), Some("b"));
        assert_eq!(el.attrs.as_ref().map(|a| a.len()), Some(1));
    }

    #[test]
    fn test_null_attr() {
        let el = Element::paragraph().with_null_attr("id");
        assert_eq!(el.attr("id"), None);
        assert!(el.attrs.as_ref().is_some_and(|a| a.contains_key("id")));
    }

    #[test]
    fn test_depth_and_count() {
        let tree = Element::root().with_child(
            Element::paragraph()
                .with_child(Element::text("a"))
                .with_child(Element::new(ElementKind::Emphasis).with_child(Element::text("b"))),
        );
        assert_eq!(tree.depth(), 4);
        assert_eq!(tree.node_count(), 5);
        assert_eq!(Element::text("x").depth(), 1);
    }
}
