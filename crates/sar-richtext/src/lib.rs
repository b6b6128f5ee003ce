//! Rich-text document model and HTML rendering.
//!
//! The content store delivers page bodies as structured documents: a tree of
//! typed block and inline nodes, with embedded-asset references pointing into
//! a side-loaded asset list. This crate decodes that tree into an explicit
//! schema ([`Document`]) and renders it to HTML, substituting embedded-asset
//! nodes with `<img>` elements resolved from a caller-supplied image list.
//!
//! Rendering is a pure function of `(document, images)`: unknown node types
//! fall back to rendering their children, and an asset reference with no
//! matching image renders nothing. Neither case is an error, so the renderer
//! tolerates content-model evolution in the store.
//!
//! # Example
//!
//! ```
//! use sar_richtext::{Document, Image, render_document};
//!
//! let document = Document::default();
//! let images: Vec<Image> = Vec::new();
//! let html = render_document(&document, &images);
//! assert!(html.is_empty());
//! ```

mod document;
mod render;

pub use document::{Document, Image, Link, LinkSys, Mark, MarkKind, Node, NodeData, NodeKind};
pub use render::{escape_html, render_document};
