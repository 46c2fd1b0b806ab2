//! Block nodes of the pre-parsed script tree.
//!
//! A block mirrors one node of the editor document:
//!
//! ```text
//! <block type="math_arithmetic">
//!   <field name="OP">ADD</field>
//!   <value name="A"><block type="math_number">…</block></value>
//!   <value name="B"><block type="math_number">…</block></value>
//!   <next><block …/></next>
//! </block>
//! ```
//!
//! Value slots must hold exactly one child when consumed; statement slots
//! hold zero or one child (the head of a `next` chain).

use std::fmt;

/// A literal, non-evaluated input of a block.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct Field {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub value: String,
}

/// A named child slot. Used for both value inputs and statement inputs.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct Slot {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub blocks: Vec<Block>,
}

/// A parameter entry of a procedure mutation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct MutationArg {
    pub name: String,
}

/// Structured metadata carried by a block.
///
/// Only the attributes the runtime reads are modelled: branch counts for
/// `controls_if`, the callee name and parameter list for procedures, and
/// free-form mode flags.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Mutation {
    /// Number of `else if` branches (`IF1..IFn`).
    pub elseif: u32,
    /// Non-zero when an `ELSE` statement slot is present.
    #[cfg_attr(feature = "serde", serde(rename = "else"))]
    pub else_count: u32,
    /// Item count for variadic blocks.
    pub items: u32,
    /// Iteration or lookup mode.
    pub mode: Option<String>,
    /// Whether a procedure definition has a body statement.
    pub statements: bool,
    /// Callee name for procedure calls.
    pub name: Option<String>,
    /// Parameter names, in declaration order.
    pub args: Vec<MutationArg>,
}

impl Mutation {
    /// Mutation for a procedure definition or call.
    pub fn procedure<I, S>(name: impl Into<String>, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Mutation {
            name: Some(name.into()),
            args: params
                .into_iter()
                .map(|p| MutationArg { name: p.into() })
                .collect(),
            statements: true,
            ..Mutation::default()
        }
    }

    /// Mutation for a `controls_if` block.
    pub fn branches(elseif: u32, has_else: bool) -> Self {
        Mutation {
            elseif,
            else_count: u32::from(has_else),
            ..Mutation::default()
        }
    }

    /// Parameter names in declaration order.
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.args.iter().map(|a| a.name.as_str())
    }
}

/// Failure to resolve a child slot.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SlotError {
    /// The block has no slot with this name.
    #[error("missing slot {name}")]
    Missing { name: String },
    /// The slot exists but does not hold exactly one child.
    #[error("slot {name} holds {count} blocks")]
    NotSingle { name: String, count: usize },
}

impl SlotError {
    /// Name of the slot that failed to resolve.
    pub fn name(&self) -> &str {
        match self {
            SlotError::Missing { name } | SlotError::NotSingle { name, .. } => name,
        }
    }
}

/// One node of the script tree.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Block {
    /// Block type tag, the key into the handler registry.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: String,
    pub fields: Vec<Field>,
    pub values: Vec<Slot>,
    pub statements: Vec<Slot>,
    pub mutation: Option<Mutation>,
    /// Sibling executed after this block.
    pub next: Option<Box<Block>>,
}

impl Default for Block {
    fn default() -> Self {
        Block {
            kind: String::new(),
            fields: Vec::new(),
            values: Vec::new(),
            statements: Vec::new(),
            mutation: None,
            next: None,
        }
    }
}

impl Block {
    /// Create a bare block of the given type.
    pub fn new(kind: impl Into<String>) -> Self {
        Block {
            kind: kind.into(),
            ..Block::default()
        }
    }

    /// Link blocks into a `next` chain, returning its head.
    ///
    /// Returns `None` for an empty sequence.
    pub fn sequence<I>(blocks: I) -> Option<Block>
    where
        I: IntoIterator<Item = Block>,
        I::IntoIter: DoubleEndedIterator,
    {
        blocks.into_iter().rev().fold(None, |next, mut block| {
            if let Some(next) = next {
                block.append(Box::new(next));
            }
            Some(block)
        })
    }

    /// Attach `tail` after the last block of this chain.
    fn append(&mut self, tail: Box<Block>) {
        match self.next.as_deref_mut() {
            Some(next) => next.append(tail),
            None => self.next = Some(tail),
        }
    }

    /// Text of the field `name`, if present.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.as_str())
    }

    /// The value slot `name`, if present.
    pub fn value_slot(&self, name: &str) -> Option<&Slot> {
        self.values.iter().find(|v| v.name == name)
    }

    /// Whether a value slot named `name` exists (regardless of its contents).
    pub fn has_value(&self, name: &str) -> bool {
        self.value_slot(name).is_some()
    }

    /// Resolve the single child of the value slot `name`.
    pub fn value(&self, name: &str) -> Result<&Block, SlotError> {
        let slot = self.value_slot(name).ok_or_else(|| SlotError::Missing {
            name: name.to_string(),
        })?;
        match slot.blocks.as_slice() {
            [only] => Ok(only),
            other => Err(SlotError::NotSingle {
                name: name.to_string(),
                count: other.len(),
            }),
        }
    }

    /// Resolve the statement slot `name`.
    ///
    /// An absent or empty slot is `Ok(None)`; more than one child is an error.
    pub fn statement(&self, name: &str) -> Result<Option<&Block>, SlotError> {
        let Some(slot) = self.statements.iter().find(|s| s.name == name) else {
            return Ok(None);
        };
        match slot.blocks.as_slice() {
            [] => Ok(None),
            [only] => Ok(Some(only)),
            other => Err(SlotError::NotSingle {
                name: name.to_string(),
                count: other.len(),
            }),
        }
    }

    /// Iterate this block followed by its `next` siblings.
    pub fn chain(&self) -> Chain<'_> {
        Chain { cur: Some(self) }
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.kind)
    }
}

/// Iterator over a `next` chain.
pub struct Chain<'a> {
    cur: Option<&'a Block>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a Block;

    fn next(&mut self) -> Option<&'a Block> {
        let block = self.cur?;
        self.cur = block.next.as_deref();
        Some(block)
    }
}

#[cfg(test)]
mod tests;
