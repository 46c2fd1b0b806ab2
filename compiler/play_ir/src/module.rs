//! Function tables extracted from documents.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::block::Block;
use crate::document::Document;
use crate::tags;

/// An immutable function definition.
#[derive(Clone, Debug, PartialEq)]
pub struct FunctionDef {
    pub name: String,
    /// Parameter names, in declaration order.
    pub params: Vec<String>,
    /// Head of the body chain (the definition's `STACK` statement).
    pub body: Option<Block>,
    /// Expression evaluated when the body finishes without an explicit return.
    pub ret: Option<Block>,
}

impl FunctionDef {
    /// Extract a definition from a `procedures_def*` block.
    ///
    /// Returns `None` when the block has no `NAME` field. A malformed `STACK`
    /// (more than one child) is treated as an empty body.
    pub fn from_block(block: Block) -> Option<Self> {
        let name = block.field("NAME")?.to_string();
        let params = block
            .mutation
            .as_ref()
            .map(|m| m.param_names().map(str::to_string).collect())
            .unwrap_or_default();
        let Block {
            values, statements, ..
        } = block;
        let body = statements
            .into_iter()
            .find(|s| s.name == "STACK")
            .and_then(|s| single(s.blocks));
        // A RETURN slot with several children keeps the first, as the editor
        // never produces more than one.
        let ret = values
            .into_iter()
            .find(|v| v.name == "RETURN")
            .and_then(|v| v.blocks.into_iter().next());
        Some(FunctionDef {
            name,
            params,
            body,
            ret,
        })
    }
}

fn single(mut blocks: Vec<Block>) -> Option<Block> {
    if blocks.len() == 1 {
        blocks.pop()
    } else {
        None
    }
}

/// A registered script unit: its namespace and function table.
#[derive(Clone, Debug, Default)]
pub struct Module {
    namespace: String,
    functions: FxHashMap<String, Arc<FunctionDef>>,
}

impl Module {
    /// Create an empty module.
    pub fn new(namespace: impl Into<String>) -> Self {
        Module {
            namespace: namespace.into(),
            functions: FxHashMap::default(),
        }
    }

    /// Build a module from every named function definition in `document`.
    ///
    /// Top-level blocks that are not function definitions are skipped. When two
    /// definitions share a name, the later one wins.
    pub fn from_document(namespace: impl Into<String>, document: Document) -> Self {
        let mut module = Module::new(namespace);
        for block in document.blocks {
            if !tags::is_function_definition(&block.kind) {
                continue;
            }
            if let Some(def) = FunctionDef::from_block(block) {
                module.define(def);
            }
        }
        tracing::debug!(
            namespace = %module.namespace,
            functions = module.functions.len(),
            "module loaded"
        );
        module
    }

    /// Add or replace a function definition.
    pub fn define(&mut self, def: FunctionDef) {
        self.functions.insert(def.name.clone(), Arc::new(def));
    }

    /// Qualified name of this module.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Look up a function by name.
    #[inline]
    pub fn function(&self, name: &str) -> Option<&Arc<FunctionDef>> {
        self.functions.get(name)
    }

    /// Number of functions defined.
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    /// Whether the module defines no functions.
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Names of all defined functions, in no particular order.
    pub fn function_names(&self) -> impl Iterator<Item = &str> {
        self.functions.keys().map(String::as_str)
    }
}
