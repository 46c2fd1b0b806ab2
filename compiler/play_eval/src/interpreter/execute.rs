//! Cross-namespace execution.

use play_value::{module_not_found, EvalResult, Value};

use super::Interpreter;

impl Interpreter<'_> {
    /// Call `function` of the module registered as `namespace`.
    ///
    /// The callee runs in a separate pooled environment: it shares this
    /// invocation's collaborators and call stack, starts from an empty
    /// variable table, and resolves names against its own module. The
    /// environment goes back to the pool however the call ends.
    pub fn execute_module(
        &mut self,
        namespace: &str,
        function: &str,
        args: Vec<(String, Value)>,
    ) -> EvalResult {
        let runtime = self.runtime;
        let module = runtime
            .module(namespace)
            .ok_or_else(|| module_not_found(namespace))?;
        let conn = self.connection()?;
        let cntx = self.context()?;

        let mut env = runtime.pool.acquire();
        env.bind(module, conn, cntx);
        tracing::debug!(namespace, function, "cross-namespace execution");
        let mut callee = Interpreter::new(&mut env, runtime, &mut *self.call_stack);
        callee.call_function(function, args)
    }
}
