//! Block-type to handler mapping.
//!
//! The registry is filled during startup (builtins first, then extension
//! handlers) and frozen inside a [`Player`](crate::Player) before the first
//! invocation. There is no runtime re-registration.

use std::fmt;

use play_ir::Block;
use play_value::EvalResult;
use rustc_hash::FxHashMap;

use crate::interpreter::Interpreter;

/// Evaluation function for one block type.
///
/// Receives the interpreter (environment, collaborators, recursion) and the
/// block being evaluated; the `next` chain is handled by the caller.
pub type HandlerFn = fn(&mut Interpreter<'_>, &Block) -> EvalResult;

/// Mapping from block type tag to [`HandlerFn`].
#[derive(Clone, Default)]
pub struct HandlerRegistry {
    handlers: FxHashMap<String, HandlerFn>,
}

impl HandlerRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding every built-in handler.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        crate::handlers::register_builtins(&mut registry);
        registry
    }

    /// Register `handler` for `tag`, replacing any previous handler.
    ///
    /// Returns `true` when an existing handler was replaced.
    pub fn register(&mut self, tag: impl Into<String>, handler: HandlerFn) -> bool {
        let tag = tag.into();
        let replaced = self.handlers.insert(tag.clone(), handler).is_some();
        if replaced {
            tracing::debug!(%tag, "handler replaced");
        }
        replaced
    }

    /// Handler for `tag`, if registered.
    #[inline]
    pub fn get(&self, tag: &str) -> Option<HandlerFn> {
        self.handlers.get(tag).copied()
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.handlers.contains_key(tag)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tags: Vec<_> = self.handlers.keys().collect();
        tags.sort();
        f.debug_struct("HandlerRegistry").field("tags", &tags).finish()
    }
}
