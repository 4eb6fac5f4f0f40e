//! A minimal block document hosting embeds.
//!
//! Commands need a place to insert into: a flat list of blocks, a
//! selection, and a schema saying which block kinds the host accepts.

use nvembed_core::{Attrs, EmbedNode};
use std::collections::BTreeSet;

/// One top-level block of content.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Paragraph(String),
    Embed(EmbedNode),
}

impl Block {
    /// The schema name of this block kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Block::Paragraph(_) => "paragraph",
            Block::Embed(_) => "embed",
        }
    }

    /// A paragraph with no text, the preferred insertion target.
    pub fn is_empty_paragraph(&self) -> bool {
        matches!(self, Block::Paragraph(text) if text.is_empty())
    }

    pub fn as_embed(&self) -> Option<&EmbedNode> {
        match self {
            Block::Embed(node) => Some(node),
            _ => None,
        }
    }

    pub fn as_embed_mut(&mut self) -> Option<&mut EmbedNode> {
        match self {
            Block::Embed(node) => Some(node),
            _ => None,
        }
    }
}

/// Which block kinds the host document accepts as children.
#[derive(Debug, Clone)]
pub struct DocumentSchema {
    allowed: BTreeSet<String>,
}

impl DocumentSchema {
    /// Accepts paragraphs and embeds.
    pub fn permissive() -> Self {
        Self {
            allowed: ["paragraph", "embed"].iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Remove a block kind from the accepted set.
    pub fn without(mut self, kind: &str) -> Self {
        self.allowed.remove(kind);
        self
    }

    pub fn check_child(&self, kind: &str) -> bool {
        self.allowed.contains(kind)
    }
}

impl Default for DocumentSchema {
    fn default() -> Self {
        Self::permissive()
    }
}

/// Caret position plus the formatting attributes active at it. Those
/// attributes are carried onto inserted embeds when the schema allows
/// them on an embed.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    pub index: usize,
    pub attributes: Attrs,
}

#[derive(Debug, Clone)]
pub struct Document {
    pub blocks: Vec<Block>,
    pub selection: Selection,
    pub schema: DocumentSchema,
}

impl Document {
    /// An empty document: one empty paragraph, selected.
    pub fn new(schema: DocumentSchema) -> Self {
        Self {
            blocks: vec![Block::Paragraph(String::new())],
            selection: Selection::default(),
            schema,
        }
    }

    pub fn selected_block(&self) -> Option<&Block> {
        self.blocks.get(self.selection.index)
    }

    pub fn selected_block_mut(&mut self) -> Option<&mut Block> {
        self.blocks.get_mut(self.selection.index)
    }

    /// Whether an embed may be inserted at the current selection.
    ///
    /// Embeds only live at the top level, so the check is the host
    /// schema accepting the kind at all.
    pub fn is_embed_allowed(&self) -> bool {
        self.schema.check_child("embed")
    }

    /// Insert a block at the optimal position: replace the selected
    /// block when it is an empty paragraph, otherwise insert right
    /// after it. The inserted block becomes the selection. Returns the
    /// index it landed at.
    pub fn insert_at_optimal_position(&mut self, block: Block) -> usize {
        let index = match self.selected_block() {
            Some(current) if current.is_empty_paragraph() => {
                self.blocks[self.selection.index] = block;
                self.selection.index
            }
            Some(_) => {
                let index = self.selection.index + 1;
                self.blocks.insert(index, block);
                index
            }
            None => {
                self.blocks.push(block);
                self.blocks.len() - 1
            }
        };
        self.selection.index = index;
        index
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new(DocumentSchema::permissive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_replaces_empty_paragraph() {
        let mut doc = Document::default();
        let index = doc.insert_at_optimal_position(Block::Embed(EmbedNode::new("/v")));
        assert_eq!(index, 0);
        assert_eq!(doc.blocks.len(), 1);
        assert!(doc.selected_block().unwrap().as_embed().is_some());
    }

    #[test]
    fn test_insert_after_non_empty_block() {
        let mut doc = Document::default();
        doc.blocks[0] = Block::Paragraph("text".into());
        let index = doc.insert_at_optimal_position(Block::Embed(EmbedNode::new("/v")));
        assert_eq!(index, 1);
        assert_eq!(doc.blocks.len(), 2);
        assert_eq!(doc.selection.index, 1);
    }

    #[test]
    fn test_schema_gates_embeds() {
        let doc = Document::new(DocumentSchema::permissive().without("embed"));
        assert!(!doc.is_embed_allowed());
        assert!(Document::default().is_embed_allowed());
    }
}
