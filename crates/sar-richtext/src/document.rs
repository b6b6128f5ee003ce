//! Rich-text document schema.
//!
//! Explicit schema for the store's rich-text JSON. Every node carries a
//! `nodeType` discriminator plus optional `content`, `data`, `value`, and
//! `marks` members; the uniform shape is kept as-is and classified lazily
//! via [`Node::kind`], so unrecognized node types survive decoding.

use serde::Deserialize;

/// A rich-text document: the root of a node tree.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Document {
    /// Top-level block nodes.
    #[serde(default)]
    pub content: Vec<Node>,
}

/// A single node in the document tree.
///
/// Serde ignores unknown fields from the store response.
#[derive(Debug, Clone, Deserialize)]
pub struct Node {
    /// Node type discriminator (e.g. `"paragraph"`, `"embedded-asset-block"`).
    #[serde(rename = "nodeType")]
    pub node_type: String,
    /// Child nodes (empty for leaf nodes).
    #[serde(default)]
    pub content: Vec<Node>,
    /// Node data (asset/entry references, hyperlink targets).
    #[serde(default)]
    pub data: NodeData,
    /// Text content (text nodes only).
    #[serde(default)]
    pub value: String,
    /// Formatting marks (text nodes only).
    #[serde(default)]
    pub marks: Vec<Mark>,
}

/// Node data payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NodeData {
    /// Referenced asset or entry (embedded-asset nodes).
    #[serde(default)]
    pub target: Option<Link>,
    /// Hyperlink target (hyperlink nodes).
    #[serde(default)]
    pub uri: Option<String>,
}

/// Reference to another record in the content store.
#[derive(Debug, Clone, Deserialize)]
pub struct Link {
    /// Link system metadata.
    pub sys: LinkSys,
}

/// System metadata of a link.
#[derive(Debug, Clone, Deserialize)]
pub struct LinkSys {
    /// Id of the referenced record.
    pub id: String,
}

/// A formatting mark on a text node.
#[derive(Debug, Clone, Deserialize)]
pub struct Mark {
    /// Mark type.
    #[serde(rename = "type")]
    pub kind: MarkKind,
}

/// Recognized mark types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkKind {
    /// Bold text.
    Bold,
    /// Italic text.
    Italic,
    /// Underlined text.
    Underline,
    /// Inline code.
    Code,
    /// Any mark this renderer does not know about.
    #[serde(other)]
    Unknown,
}

/// Classified node type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Document root.
    Document,
    /// Paragraph block.
    Paragraph,
    /// Heading block with level 1-6.
    Heading(u8),
    /// Unordered list block.
    UnorderedList,
    /// Ordered list block.
    OrderedList,
    /// List item block.
    ListItem,
    /// Blockquote block.
    Blockquote,
    /// Horizontal rule.
    Hr,
    /// Inline hyperlink.
    Hyperlink,
    /// Text run.
    Text,
    /// Embedded asset reference block.
    EmbeddedAsset,
    /// Any node type this renderer does not know about.
    Unknown,
}

impl Node {
    /// Classify this node's type.
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        match self.node_type.as_str() {
            "document" => NodeKind::Document,
            "paragraph" => NodeKind::Paragraph,
            "heading-1" => NodeKind::Heading(1),
            "heading-2" => NodeKind::Heading(2),
            "heading-3" => NodeKind::Heading(3),
            "heading-4" => NodeKind::Heading(4),
            "heading-5" => NodeKind::Heading(5),
            "heading-6" => NodeKind::Heading(6),
            "unordered-list" => NodeKind::UnorderedList,
            "ordered-list" => NodeKind::OrderedList,
            "list-item" => NodeKind::ListItem,
            "blockquote" => NodeKind::Blockquote,
            "hr" => NodeKind::Hr,
            "hyperlink" => NodeKind::Hyperlink,
            "text" => NodeKind::Text,
            "embedded-asset-block" => NodeKind::EmbeddedAsset,
            _ => NodeKind::Unknown,
        }
    }

    /// Id of the asset or entry this node references, if any.
    #[must_use]
    pub fn target_id(&self) -> Option<&str> {
        self.data.target.as_ref().map(|link| link.sys.id.as_str())
    }
}

/// A resolved image from the content store's asset list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    /// Asset id.
    pub id: String,
    /// Absolute image URL.
    pub url: String,
    /// Natural width in pixels (0 when unknown).
    pub width: u32,
    /// Natural height in pixels (0 when unknown).
    pub height: u32,
    /// Image title (empty when absent).
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_deserialize_paragraph_with_text() {
        let doc: Document = serde_json::from_value(json!({
            "nodeType": "document",
            "content": [{
                "nodeType": "paragraph",
                "content": [{
                    "nodeType": "text",
                    "value": "hello",
                    "marks": [{"type": "bold"}]
                }]
            }]
        }))
        .unwrap();

        assert_eq!(doc.content.len(), 1);
        let para = &doc.content[0];
        assert_eq!(para.kind(), NodeKind::Paragraph);
        let text = &para.content[0];
        assert_eq!(text.kind(), NodeKind::Text);
        assert_eq!(text.value, "hello");
        assert_eq!(text.marks[0].kind, MarkKind::Bold);
    }

    #[test]
    fn test_deserialize_embedded_asset_target() {
        let node: Node = serde_json::from_value(json!({
            "nodeType": "embedded-asset-block",
            "data": {"target": {"sys": {"id": "asset1", "type": "Link", "linkType": "Asset"}}},
            "content": []
        }))
        .unwrap();

        assert_eq!(node.kind(), NodeKind::EmbeddedAsset);
        assert_eq!(node.target_id(), Some("asset1"));
    }

    #[test]
    fn test_deserialize_hyperlink_uri() {
        let node: Node = serde_json::from_value(json!({
            "nodeType": "hyperlink",
            "data": {"uri": "https://example.com"},
            "content": [{"nodeType": "text", "value": "link"}]
        }))
        .unwrap();

        assert_eq!(node.kind(), NodeKind::Hyperlink);
        assert_eq!(node.data.uri.as_deref(), Some("https://example.com"));
    }

    #[test]
    fn test_unknown_node_type_survives_decoding() {
        let node: Node = serde_json::from_value(json!({
            "nodeType": "embedded-entry-block",
            "content": [{"nodeType": "text", "value": "kept"}]
        }))
        .unwrap();

        assert_eq!(node.kind(), NodeKind::Unknown);
        assert_eq!(node.content.len(), 1);
    }

    #[test]
    fn test_unknown_mark_survives_decoding() {
        let node: Node = serde_json::from_value(json!({
            "nodeType": "text",
            "value": "x",
            "marks": [{"type": "superscript"}]
        }))
        .unwrap();

        assert_eq!(node.marks[0].kind, MarkKind::Unknown);
    }

    #[test]
    fn test_heading_levels() {
        for level in 1..=6u8 {
            let node: Node = serde_json::from_value(json!({
                "nodeType": format!("heading-{level}"),
                "content": []
            }))
            .unwrap();
            assert_eq!(node.kind(), NodeKind::Heading(level));
        }
    }
}
