//! HTML rendering
//!
//! Converts an element tree into HTML text. Children are rendered first and
//! their output is wrapped by the parent's markup.

use crate::ast::{Element, ElementKind};
use crate::attributes::format_attributes;
use crate::escape::escape_html;
use crate::options::Options;
use crate::{RenderError, Result};

/// Indent passed for the root element, so that its children land at 0
pub const ROOT_INDENT: i32 = -2;

/// Indent added per tree level
const INDENT_STEP: i32 = 2;

/// Render an element tree to an HTML string
pub fn render(root: &Element, options: &Options) -> Result<String> {
    render_element(root, ROOT_INDENT, options)
}

/// Render a subtree whose block tags are indented by `indent` spaces.
///
/// The indent also encodes how deep the element sits in the tree: the root
/// renders at [`ROOT_INDENT`], its children at `0`, their children at `2`,
/// and so on.
pub fn render_element(el: &Element, indent: i32, options: &Options) -> Result<String> {
    let mut output = String::new();
    render_into(el, indent, options, &mut output)?;
    Ok(output)
}

/// Remove exactly one trailing line ending (`\r\n`, `\n` or `\r`), if present
pub fn strip_trailing_newline(s: &str) -> &str {
    s.strip_suffix("\r\n")
        .or_else(|| s.strip_suffix(['\n', '\r']))
        .unwrap_or(s)
}

fn render_into(el: &Element, indent: i32, options: &Options, out: &mut String) -> Result<()> {
    if let Some(limit) = options.max_depth {
        if depth_at(indent) > limit {
            return Err(RenderError::DepthLimitExceeded { limit });
        }
    }

    let mut inner = String::new();
    for child in &el.children {
        render_into(child, indent.saturating_add(INDENT_STEP), options, &mut inner)?;
    }

    render_kind(el, &inner, indent, out)
}

/// Tree depth of an element rendered at `indent` (the root is at depth 1)
fn depth_at(indent: i32) -> usize {
    (indent.saturating_sub(ROOT_INDENT).max(0) / INDENT_STEP) as usize + 1
}

fn render_kind(el: &Element, inner: &str, indent: i32, out: &mut String) -> Result<()> {
    match &el.kind {
        ElementKind::Blank => out.push('\n'),

        ElementKind::Text(value) => out.push_str(&escape_html(value, false)),

        ElementKind::Root => out.push_str(strip_trailing_newline(inner)),

        ElementKind::Paragraph => {
            open_block_tag("p", el, indent, out);
            out.push_str(inner);
            out.push_str("</p>\n");
        }

        ElementKind::CodeBlock(value) => {
            open_block_tag("pre", el, indent, out);
            out.push_str("<code>");
            out.push_str(&escape_html(value, true));
            if !value.ends_with('\n') {
                out.push('\n');
            }
            out.push_str("</code></pre>\n");
        }

        ElementKind::BlockQuote => {
            open_block_tag("blockquote", el, indent, out);
            out.push('\n');
            out.push_str(inner);
            push_indent(indent, out);
            out.push_str("</blockquote>\n");
        }

        ElementKind::Header { level } => {
            let tag = format!("h{level}");
            open_block_tag(&tag, el, indent, out);
            out.push_str(inner);
            close_tag(&tag, out);
            out.push('\n');
        }

        ElementKind::HorizontalRule => {
            push_indent(indent, out);
            out.push_str("<hr />\n");
        }

        ElementKind::List(kind) => {
            let tag = kind.tag();
            open_block_tag(tag, el, indent, out);
            out.push('\n');
            out.push_str(inner);
            push_indent(indent, out);
            close_tag(tag, out);
            out.push('\n');
        }

        ElementKind::ListItem { first_as_para } => {
            open_block_tag("li", el, indent, out);
            if *first_as_para {
                out.push('\n');
                out.push_str(inner);
                push_indent(indent, out);
            } else if el.children.len() > 1 {
                out.push_str(inner);
                push_indent(indent, out);
            } else {
                out.push_str(inner);
            }
            out.push_str("</li>\n");
        }

        ElementKind::Emphasis => inline_tag("em", el, inner, out),

        ElementKind::Strong => inline_tag("strong", el, inner, out),

        ElementKind::Link => inline_tag("a", el, inner, out),

        ElementKind::Image => {
            out.push_str("<img");
            out.push_str(&format_attributes(el.attrs.as_ref()));
            out.push_str(" />");
        }

        ElementKind::CodeSpan(value) => inline_tag("code", el, &escape_html(value, true), out),

        ElementKind::HtmlInline(value) => out.push_str(value),

        ElementKind::HtmlBlock(value) => {
            out.push_str(value);
            out.push('\n');
        }

        ElementKind::LineBreak => out.push_str("<br />"),

        ElementKind::EndOfBlock => {}

        ElementKind::Other(tag) => return Err(RenderError::UnsupportedNodeType(tag.clone())),
    }

    Ok(())
}

fn push_indent(indent: i32, out: &mut String) {
    for _ in 0..indent.max(0) {
        out.push(' ');
    }
}

/// Write indent, `<tag`, the element's attributes and `>`
fn open_block_tag(tag: &str, el: &Element, indent: i32, out: &mut String) {
    push_indent(indent, out);
    open_tag(tag, el, out);
}

fn open_tag(tag: &str, el: &Element, out: &mut String) {
    out.push('<');
    out.push_str(tag);
    out.push_str(&format_attributes(el.attrs.as_ref()));
    out.push('>');
}

fn close_tag(tag: &str, out: &mut String) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn inline_tag(tag: &str, el: &Element, content: &str, out: &mut String) {
    open_tag(tag, el, out);
    out.push_str(content);
    close_tag(tag, out);
}
