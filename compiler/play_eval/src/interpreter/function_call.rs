//! Function call evaluation for the Interpreter.

use std::sync::Arc;

use play_ir::{FunctionDef, Module};
use play_value::{EvalResult, Value};

use super::Interpreter;
use crate::diagnostics::CallFrame;

impl Interpreter<'_> {
    /// Call `name` in the current module with named arguments.
    pub fn call_function(&mut self, name: &str, args: Vec<(String, Value)>) -> EvalResult {
        let (module, def) = self.resolve_function(name)?;
        self.call_resolved(&module, &def, args)
    }

    /// Call an already resolved function.
    ///
    /// Binds the arguments, evaluates the body intercepting only `Return`,
    /// falls back to the return expression (or `Null`), and restores the
    /// argument bindings on every exit path.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(module = module.namespace(), function = %def.name, depth = self.call_depth())
    )]
    pub(crate) fn call_resolved(
        &mut self,
        module: &Arc<Module>,
        def: &Arc<FunctionDef>,
        args: Vec<(String, Value)>,
    ) -> EvalResult {
        self.call_stack
            .push(CallFrame::new(module.namespace(), def.name.as_str()))
            .map_err(|err| self.call_stack.attach_backtrace(err))?;
        let result = self.run_body(def, args);
        let result = result.map_err(|action| {
            action.map_error(|err| self.call_stack.attach_backtrace(err))
        });
        self.call_stack.pop();
        result
    }

    fn run_body(&mut self, def: &FunctionDef, args: Vec<(String, Value)>) -> EvalResult {
        let mut scoped = self.bind_arguments(args);
        if let Some(body) = &def.body {
            if let Err(action) = scoped.visit(body) {
                return action.into_return();
            }
        }
        match &def.ret {
            Some(ret) => scoped.visit(ret),
            None => Ok(Value::Null),
        }
    }
}
