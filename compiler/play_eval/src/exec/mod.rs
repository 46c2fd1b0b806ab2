//! Evaluation helpers shared by the built-in handlers.
//!
//! - `control`: loop signal narrowing and counting ranges
//!
//! Handlers in `crate::handlers` delegate here for anything that is not
//! slot plumbing.

pub mod control;
