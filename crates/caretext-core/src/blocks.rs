// SPDX-License-Identifier: AGPL-3.0-or-later
//! Output units of the response formatter
//!
//! A block is one paragraph of the source text, already entity-escaped and
//! inline-substituted. The two kinds differ only by the CSS class on the
//! wrapping element, never by structural list parsing.

use serde::{Deserialize, Serialize};

/// Classification of a formatted block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    /// Prose paragraph
    Paragraph,
    /// Paragraph whose first glyph is a bullet marker
    BulletList,
}

impl BlockKind {
    /// CSS class carried by the wrapping element, if any
    pub const fn css_class(&self) -> Option<&'static str> {
        match self {
            Self::Paragraph => None,
            Self::BulletList => Some("bullet-list"),
        }
    }
}

/// One markup-ready unit of formatter output
///
/// `content` is the inline body: entity-escaped input text interleaved with
/// the `<strong>`, `<em>` and `<br>` markers the formatter inserted. It is
/// safe to splice into a live document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedBlock {
    pub kind: BlockKind,
    pub content: String,
}

impl FormattedBlock {
    pub fn new(kind: BlockKind, content: impl Into<String>) -> Self {
        Self {
            kind,
            content: content.into(),
        }
    }

    /// Render the block-level wrapping
    pub fn to_html(&self) -> String {
        match self.kind.css_class() {
            Some(class) => format!("<p class=\"{}\">{}</p>", class, self.content),
            None => format!("<p>{}</p>", self.content),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_paragraph_to_html() {
        let block = FormattedBlock::new(BlockKind::Paragraph, "hello");
        assert_eq!(block.to_html(), "<p>hello</p>");
    }

    #[test]
    fn test_bullet_list_to_html() {
        let block = FormattedBlock::new(BlockKind::BulletList, "• one<br>• two");
        assert_eq!(
            block.to_html(),
            "<p class=\"bullet-list\">• one<br>• two</p>"
        );
    }

    #[test]
    fn test_empty_block_to_html() {
        let block = FormattedBlock::new(BlockKind::Paragraph, "");
        assert_eq!(block.to_html(), "<p></p>");
    }

    #[test]
    fn test_kind_serde_roundtrip() {
        let json = serde_json::to_string(&BlockKind::BulletList).expect("serialize");
        assert_eq!(json, "\"bullet_list\"");
        let kind: BlockKind = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(kind, BlockKind::BulletList);
    }

    #[test]
    fn test_block_serde_roundtrip() {
        let block = FormattedBlock::new(BlockKind::Paragraph, "a<br>b");
        let json = serde_json::to_string(&block).expect("serialize");
        let back: FormattedBlock = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(block, back);
    }
}
