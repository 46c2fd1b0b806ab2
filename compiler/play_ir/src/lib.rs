//! Play IR - Block tree types for the Play runtime.
//!
//! This crate contains the read-only data structures the evaluator walks:
//! - `Block`: one node of a pre-parsed visual script
//! - `Field`, `Slot`, `Mutation`: the literal, child and metadata parts of a block
//! - `Document`: the top-level unit produced by the editor
//! - `FunctionDef` and `Module`: function tables extracted from a document
//! - `BlockBuilder`: construction helper for hosts and tests
//!
//! # Immutability
//!
//! Blocks are built once when a module is registered and never mutated
//! afterwards. A `Module` is shared behind `Arc` by every concurrent
//! invocation, so nothing in this crate offers `&mut` access once a module
//! has been constructed.
//!
//! # Features
//!
//! - `serde`: derive `Deserialize` for `Document` and its parts, so a host can
//!   load the editor's wire document directly.

mod block;
mod builder;
mod document;
mod module;
pub mod tags;

pub use block::{Block, Chain, Field, Mutation, MutationArg, Slot, SlotError};
pub use builder::BlockBuilder;
pub use document::Document;
pub use module::{FunctionDef, Module};
