//! Fluent construction of block trees.
//!
//! Hosts that build scripts in code (and the test suites) use this instead
//! of spelling out `Block` literals:
//!
//! ```text
//! let sum = BlockBuilder::new(tags::MATH_ARITHMETIC)
//!     .field("OP", "ADD")
//!     .value("A", BlockBuilder::number(3.0))
//!     .value("B", BlockBuilder::number(4.0))
//!     .build();
//! ```

use crate::block::{Block, Field, Mutation, Slot};
use crate::tags;

/// Builder for a single [`Block`].
#[derive(Clone, Debug)]
#[must_use]
pub struct BlockBuilder {
    block: Block,
}

impl BlockBuilder {
    /// Start a block of the given type.
    pub fn new(kind: impl Into<String>) -> Self {
        BlockBuilder {
            block: Block::new(kind),
        }
    }

    /// Add a literal field.
    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.block.fields.push(Field {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    /// Add a value slot holding one child.
    pub fn value(self, name: impl Into<String>, child: impl Into<Block>) -> Self {
        self.value_slot(name, vec![child.into()])
    }

    /// Add a value slot holding an arbitrary number of children.
    pub fn value_slot(mut self, name: impl Into<String>, blocks: Vec<Block>) -> Self {
        self.block.values.push(Slot {
            name: name.into(),
            blocks,
        });
        self
    }

    /// Add a statement slot holding a chain of blocks.
    ///
    /// An empty sequence produces an empty slot.
    pub fn statement<I, B>(mut self, name: impl Into<String>, body: I) -> Self
    where
        I: IntoIterator<Item = B>,
        B: Into<Block>,
    {
        let blocks: Vec<Block> = body.into_iter().map(Into::into).collect();
        self.block.statements.push(Slot {
            name: name.into(),
            blocks: Block::sequence(blocks).into_iter().collect(),
        });
        self
    }

    /// Attach mutation metadata.
    pub fn mutation(mut self, mutation: Mutation) -> Self {
        self.block.mutation = Some(mutation);
        self
    }

    /// Set the sibling executed after this block.
    pub fn next(mut self, next: impl Into<Block>) -> Self {
        self.block.next = Some(Box::new(next.into()));
        self
    }

    /// Finish the block.
    pub fn build(self) -> Block {
        self.block
    }

    // Shorthands for the literal and variable blocks used everywhere.

    /// `math_number` literal.
    pub fn number(n: f64) -> Self {
        BlockBuilder::new(tags::MATH_NUMBER).field("NUM", n.to_string())
    }

    /// `text` literal.
    pub fn text(s: impl Into<String>) -> Self {
        BlockBuilder::new(tags::TEXT).field("TEXT", s)
    }

    /// `logic_boolean` literal.
    pub fn boolean(b: bool) -> Self {
        BlockBuilder::new(tags::LOGIC_BOOLEAN).field("BOOL", if b { "TRUE" } else { "FALSE" })
    }

    /// `variables_get` for `name`.
    pub fn get(name: impl Into<String>) -> Self {
        BlockBuilder::new(tags::VARIABLES_GET).field("VAR", name)
    }

    /// `variables_set` of `name` to `value`.
    pub fn set(name: impl Into<String>, value: impl Into<Block>) -> Self {
        BlockBuilder::new(tags::VARIABLES_SET)
            .field("VAR", name)
            .value("VALUE", value)
    }

    /// `procedures_defreturn` with `params`, a body chain and an optional return expression.
    pub fn function<I, S, B>(name: &str, params: I, body: Vec<B>, ret: Option<Block>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        B: Into<Block>,
    {
        let kind = if ret.is_some() {
            tags::PROCEDURES_DEF_RETURN
        } else {
            tags::PROCEDURES_DEF_NO_RETURN
        };
        let mut builder = BlockBuilder::new(kind)
            .field("NAME", name)
            .mutation(Mutation::procedure(name, params))
            .statement("STACK", body);
        if let Some(ret) = ret {
            builder = builder.value("RETURN", ret);
        }
        builder
    }

    /// `procedures_callreturn` of `name` with positional arguments.
    pub fn call<I, S>(name: &str, params: I, args: Vec<Block>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut builder = BlockBuilder::new(tags::PROCEDURES_CALL_RETURN)
            .mutation(Mutation::procedure(name, params));
        for (i, arg) in args.into_iter().enumerate() {
            builder = builder.value(format!("ARG{i}"), arg);
        }
        builder
    }
}

impl From<BlockBuilder> for Block {
    fn from(builder: BlockBuilder) -> Self {
        builder.block
    }
}
