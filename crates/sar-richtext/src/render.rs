//! HTML rendering of rich-text documents.

use std::fmt::Write;

use crate::document::{Document, Image, MarkKind, Node, NodeKind};

/// Escape HTML special characters in text content.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Render a document tree to HTML.
///
/// Embedded-asset nodes are substituted with `<img>` elements resolved from
/// `images` by asset id; references with no matching image render nothing.
/// Unknown node types render their children unchanged.
#[must_use]
pub fn render_document(document: &Document, images: &[Image]) -> String {
    let mut out = String::with_capacity(1024);
    for node in &document.content {
        render_node(node, images, &mut out);
    }
    out
}

/// Render one node into `out`.
fn render_node(node: &Node, images: &[Image], out: &mut String) {
    match node.kind() {
        NodeKind::Document | NodeKind::Unknown => render_children(node, images, out),
        NodeKind::Paragraph => render_wrapped("p", node, images, out),
        NodeKind::Heading(level) => render_wrapped(&format!("h{level}"), node, images, out),
        NodeKind::UnorderedList => render_wrapped("ul", node, images, out),
        NodeKind::OrderedList => render_wrapped("ol", node, images, out),
        NodeKind::ListItem => render_wrapped("li", node, images, out),
        NodeKind::Blockquote => render_wrapped("blockquote", node, images, out),
        NodeKind::Hr => out.push_str("<hr>"),
        NodeKind::Hyperlink => render_hyperlink(node, images, out),
        NodeKind::Text => render_text(node, out),
        NodeKind::EmbeddedAsset => render_embedded_asset(node, images, out),
    }
}

/// Render a node's children in order.
fn render_children(node: &Node, images: &[Image], out: &mut String) {
    for child in &node.content {
        render_node(child, images, out);
    }
}

/// Render children wrapped in a single element.
fn render_wrapped(tag: &str, node: &Node, images: &[Image], out: &mut String) {
    write!(out, "<{tag}>").unwrap();
    render_children(node, images, out);
    write!(out, "</{tag}>").unwrap();
}

/// Render a hyperlink node.
///
/// A hyperlink without a target URI degrades to its children.
fn render_hyperlink(node: &Node, images: &[Image], out: &mut String) {
    let Some(uri) = node.data.uri.as_deref() else {
        render_children(node, images, out);
        return;
    };
    write!(out, r#"<a href="{}">"#, escape_html(uri)).unwrap();
    render_children(node, images, out);
    out.push_str("</a>");
}

/// Render a text run, wrapping it per formatting mark.
fn render_text(node: &Node, out: &mut String) {
    let tags: Vec<&str> = node
        .marks
        .iter()
        .filter_map(|mark| match mark.kind {
            MarkKind::Bold => Some("strong"),
            MarkKind::Italic => Some("em"),
            MarkKind::Underline => Some("u"),
            MarkKind::Code => Some("code"),
            MarkKind::Unknown => None,
        })
        .collect();

    for tag in &tags {
        write!(out, "<{tag}>").unwrap();
    }
    out.push_str(&escape_html(&node.value));
    for tag in tags.iter().rev() {
        write!(out, "</{tag}>").unwrap();
    }
}

/// Render an embedded-asset node as an image element.
///
/// The referenced id is looked up in the supplied image list; a miss renders
/// nothing for this node.
fn render_embedded_asset(node: &Node, images: &[Image], out: &mut String) {
    let Some(id) = node.target_id() else {
        return;
    };
    let Some(image) = images.iter().find(|image| image.id == id) else {
        return;
    };
    write!(
        out,
        r#"<figure><img src="{}" alt="{}" width="{}" height="{}"></figure>"#,
        escape_html(&image.url),
        escape_html(&image.title),
        image.width,
        image.height
    )
    .unwrap();
}
