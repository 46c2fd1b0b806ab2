//! Per-invocation execution state.
//!
//! One `Environment` holds everything a single invocation may mutate:
//! - the variable table, shared by every function call in the call tree
//!   (dynamic scoping, see `interpreter::function_call`)
//! - the module whose functions are callable by name
//! - the two collaborator handles
//!
//! Environments are recycled through [`EnvironmentPool`](crate::EnvironmentPool);
//! [`Environment::reset`] returns one to its pristine state.

use std::fmt;
use std::sync::Arc;

use play_ir::Module;
use play_value::Value;
use rustc_hash::FxHashMap;

use crate::context::{Connection, HttpContext};

/// Variable table, function table and collaborator handles of one invocation.
#[derive(Default)]
pub struct Environment {
    vars: FxHashMap<String, Value>,
    module: Option<Arc<Module>>,
    conn: Option<Arc<dyn Connection>>,
    cntx: Option<Arc<dyn HttpContext>>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach the module and collaborators for an invocation.
    pub fn bind(
        &mut self,
        module: Arc<Module>,
        conn: Arc<dyn Connection>,
        cntx: Arc<dyn HttpContext>,
    ) {
        self.module = Some(module);
        self.conn = Some(conn);
        self.cntx = Some(cntx);
    }

    /// Drop every binding and handle.
    ///
    /// The variable table is replaced, not cleared, so nothing from the
    /// previous invocation survives in its allocation.
    pub fn reset(&mut self) {
        self.vars = FxHashMap::default();
        self.module = None;
        self.conn = None;
        self.cntx = None;
    }

    /// Whether the environment holds no state at all.
    pub fn is_pristine(&self) -> bool {
        self.vars.is_empty() && self.module.is_none() && self.conn.is_none() && self.cntx.is_none()
    }

    // Variables

    /// Look up a variable.
    #[inline]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.vars.get(name)
    }

    /// Value of a variable, `Null` when unbound.
    pub fn lookup(&self, name: &str) -> Value {
        self.vars.get(name).cloned().unwrap_or_default()
    }

    /// Bind or overwrite a variable, returning the displaced value.
    pub fn set(&mut self, name: impl Into<String>, value: Value) -> Option<Value> {
        self.vars.insert(name.into(), value)
    }

    /// Unbind a variable.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.vars.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    /// Number of bound variables.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Copy of the variable table, for assertions and diagnostics.
    pub fn variables(&self) -> FxHashMap<String, Value> {
        self.vars.clone()
    }

    // Handles

    /// Module whose functions are callable by name.
    pub fn module(&self) -> Option<&Arc<Module>> {
        self.module.as_ref()
    }

    pub fn connection(&self) -> Option<&Arc<dyn Connection>> {
        self.conn.as_ref()
    }

    pub fn context(&self) -> Option<&Arc<dyn HttpContext>> {
        self.cntx.as_ref()
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("vars", &self.vars)
            .field("module", &self.module.as_ref().map(|m| m.namespace()))
            .field("bound", &self.cntx.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests;
