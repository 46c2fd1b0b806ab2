//! Tree-walking interpreter for Play block trees.
//!
//! # Visiting
//!
//! [`Interpreter::visit`] evaluates a block and then every block reachable
//! through its `next` links, returning the value of the last one. Earlier
//! blocks run only for their side effects:
//!
//! ```text
//! set x = 1  ->  print x  ->  x + 1      visit(head) == value of `x + 1`
//! ```
//!
//! Each block is dispatched through the frozen [`HandlerRegistry`]; an
//! unknown type tag is fatal.
//!
//! # Signals
//!
//! Handlers return `EvalResult`, so `?` propagates break/continue/return and
//! fatal errors alike. Only three places intercept anything:
//! - loops (`handlers::control`) take `Break`/`Continue`
//! - function calls (`function_call.rs`) take `Return`
//! - the invocation boundary (`Player`) takes whatever is left
//!
//! # Environments
//!
//! The interpreter borrows the invocation's environment and call stack.
//! Cross-namespace execution (`execute.rs`) builds a child interpreter over a
//! second pooled environment that shares the collaborators and the call
//! stack but none of the variables.

mod execute;
mod function_call;
mod scope_guard;

pub use scope_guard::ScopedArguments;

use std::sync::Arc;

use play_ir::{Block, FunctionDef, Module};
use play_stack::ensure_sufficient_stack;
use play_value::{block_not_found, func_not_found, handler_not_found, EvalError, EvalResult, Value};

use crate::context::{Connection, HttpContext};
use crate::diagnostics::CallStack;
use crate::environment::Environment;
use crate::player::Runtime;

/// Evaluator for one invocation (or one cross-namespace execution within it).
pub struct Interpreter<'a> {
    pub(crate) env: &'a mut Environment,
    runtime: &'a Runtime,
    call_stack: &'a mut CallStack,
}

impl<'a> Interpreter<'a> {
    pub(crate) fn new(
        env: &'a mut Environment,
        runtime: &'a Runtime,
        call_stack: &'a mut CallStack,
    ) -> Self {
        Interpreter {
            env,
            runtime,
            call_stack,
        }
    }

    /// Evaluate `block` and its `next` chain; the last block's value wins.
    pub fn visit(&mut self, block: &Block) -> EvalResult {
        ensure_sufficient_stack(|| {
            let mut result = Value::Null;
            for step in block.chain() {
                result = self.dispatch(step)?;
            }
            Ok(result)
        })
    }

    /// Run the handler for a single block, ignoring its `next` link.
    fn dispatch(&mut self, block: &Block) -> EvalResult {
        let Some(handler) = self.runtime.registry.get(&block.kind) else {
            return Err(handler_not_found(&block.kind).into());
        };
        handler(self, block)
    }

    // Slot helpers for handlers

    /// Evaluate the single child of value slot `name`.
    pub fn eval_value(&mut self, block: &Block, name: &str) -> EvalResult {
        let child = block.value(name).map_err(|e| block_not_found(e.name()))?;
        self.visit(child)
    }

    /// Evaluate statement slot `name`; an absent or empty slot yields `Null`.
    pub fn eval_statement(&mut self, block: &Block, name: &str) -> EvalResult {
        match block.statement(name) {
            Ok(Some(body)) => self.visit(body),
            Ok(None) => Ok(Value::Null),
            Err(e) => Err(block_not_found(e.name()).into()),
        }
    }

    // State access

    pub fn env(&self) -> &Environment {
        &*self.env
    }

    pub fn env_mut(&mut self) -> &mut Environment {
        &mut *self.env
    }

    /// The request/response collaborator of this invocation.
    pub fn context(&self) -> Result<Arc<dyn HttpContext>, EvalError> {
        self.env
            .context()
            .cloned()
            .ok_or_else(|| EvalError::new("ContextNotBoundException"))
    }

    /// The database collaborator of this invocation.
    pub fn connection(&self) -> Result<Arc<dyn Connection>, EvalError> {
        self.env
            .connection()
            .cloned()
            .ok_or_else(|| EvalError::new("ConnectionNotBoundException"))
    }

    /// Current call nesting, across namespaces.
    pub fn call_depth(&self) -> usize {
        self.call_stack.depth()
    }

    /// Resolve `name` in the current module.
    pub(crate) fn resolve_function(
        &self,
        name: &str,
    ) -> Result<(Arc<Module>, Arc<FunctionDef>), EvalError> {
        let module = self.env.module().ok_or_else(|| func_not_found(name))?;
        let def = module.function(name).ok_or_else(|| func_not_found(name))?;
        Ok((Arc::clone(module), Arc::clone(def)))
    }
}
