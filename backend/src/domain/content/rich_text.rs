//! Block content tree shared by every long-form field.
//!
//! Blocks are tagged by `_type`. Text blocks carry spans with decorator or
//! annotation marks; image blocks carry an image reference; every other
//! block type decodes to [`Block::Unknown`] and is skipped when rendering.

use serde::Deserialize;

use super::media::ImageRef;
use super::nullable::or_default;

/// Ordered list of blocks.
pub type RichText = Vec<Block>;

/// One block of rich content.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "_type")]
pub enum Block {
    /// Paragraph, heading, quote or list item.
    #[serde(rename = "block")]
    Text(TextBlock),
    /// Inline image.
    #[serde(rename = "image")]
    Image(ImageRef),
    /// Block type this site does not render.
    #[serde(other)]
    Unknown,
}

/// Paragraph-level style of a text block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockStyle {
    Normal,
    Heading(u8),
    Blockquote,
}

/// List kind for list-item blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Bullet,
    Number,
}

/// Text block with spans and mark definitions.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextBlock {
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default)]
    pub list_item: Option<String>,
    #[serde(default, deserialize_with = "or_default")]
    pub children: Vec<Span>,
    #[serde(default, deserialize_with = "or_default")]
    pub mark_defs: Vec<MarkDef>,
}

impl TextBlock {
    /// Paragraph style; unrecognised styles render as normal paragraphs.
    pub fn style(&self) -> BlockStyle {
        match self.style.as_deref() {
            Some("h1") => BlockStyle::Heading(1),
            Some("h2") => BlockStyle::Heading(2),
            Some("h3") => BlockStyle::Heading(3),
            Some("h4") => BlockStyle::Heading(4),
            Some("blockquote") => BlockStyle::Blockquote,
            _ => BlockStyle::Normal,
        }
    }

    /// List kind, when this block is a list item.
    pub fn list_kind(&self) -> Option<ListKind> {
        match self.list_item.as_deref() {
            Some("bullet") => Some(ListKind::Bullet),
            Some("number") => Some(ListKind::Number),
            _ => None,
        }
    }

    /// Concatenated span text without marks.
    pub fn plain_text(&self) -> String {
        self.children.iter().map(|span| span.text.as_str()).collect()
    }

    /// Mark definition referenced by `key`.
    pub fn mark_def(&self, key: &str) -> Option<&MarkDef> {
        self.mark_defs.iter().find(|def| def.key == key)
    }
}

/// Run of text sharing the same marks.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Span {
    #[serde(default, deserialize_with = "or_default")]
    pub text: String,
    /// Decorator names (`strong`, `em`, ...) or keys into the block's
    /// mark definitions.
    #[serde(default, deserialize_with = "or_default")]
    pub marks: Vec<String>,
}

/// Annotation referenced from span marks.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct MarkDef {
    #[serde(rename = "_key", default, deserialize_with = "or_default")]
    pub key: String,
    #[serde(rename = "_type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default)]
    pub blank: Option<bool>,
}

impl MarkDef {
    /// Link target, when this definition is a link annotation.
    pub fn link_href(&self) -> Option<&str> {
        match self.kind.as_deref() {
            Some("link") => self.href.as_deref().filter(|href| !href.trim().is_empty()),
            _ => None,
        }
    }
}

/// First non-empty paragraph of `blocks` as plain text.
pub fn first_paragraph(blocks: &[Block]) -> Option<String> {
    blocks.iter().find_map(|block| match block {
        Block::Text(text) => Some(text.plain_text()).filter(|value| !value.trim().is_empty()),
        _ => None,
    })
}
