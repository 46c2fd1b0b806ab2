//! The top-level unit produced by the editor.

use crate::block::Block;

/// A parsed editor document: declared variables plus the top-level blocks.
///
/// Top-level blocks are normally function definitions; anything else is
/// ignored when the document is turned into a [`Module`](crate::Module).
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Document {
    /// Variable names declared in the editor workspace.
    ///
    /// Informational only: variables are created on first assignment.
    pub variables: Vec<String>,
    pub blocks: Vec<Block>,
}

impl Document {
    /// Create a document from top-level blocks.
    pub fn new(blocks: Vec<Block>) -> Self {
        Document {
            variables: Vec::new(),
            blocks,
        }
    }
}
