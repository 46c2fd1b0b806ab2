//! Invocation entry point.
//!
//! A [`Player`] is built once at startup and then shared by every request
//! thread:
//!
//! ```text
//! let player = PlayerBuilder::new()              // builtin handlers
//!     .register("db_query", db_query)            // extension handlers
//!     .document("shop.cart", document)           // modules
//!     .config(PlayConfig::from_env())
//!     .build();                                  // frozen from here on
//!
//! // per request
//! player.execute("shop.cart", conn, cntx)?;
//! ```
//!
//! Each invocation takes an environment from the pool, runs the entry
//! function, and renders any fatal error into the response before the
//! environment is returned.

use std::fmt;
use std::sync::Arc;

use play_ir::{Document, Module};
use play_value::{module_not_found, EvalError, Value};
use rustc_hash::FxHashMap;

use crate::config::PlayConfig;
use crate::context::{Connection, HttpContext};
use crate::diagnostics::CallStack;
use crate::interpreter::Interpreter;
use crate::pool::EnvironmentPool;
use crate::registry::{HandlerFn, HandlerRegistry};
use crate::shared::Frozen;

/// State shared by all invocations of one [`Player`].
pub(crate) struct Runtime {
    pub(crate) registry: Frozen<HandlerRegistry>,
    modules: FxHashMap<String, Arc<Module>>,
    pub(crate) pool: EnvironmentPool,
    pub(crate) config: PlayConfig,
}

impl Runtime {
    pub(crate) fn module(&self, namespace: &str) -> Option<Arc<Module>> {
        self.modules.get(namespace).cloned()
    }
}

/// How an invocation ended.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// The entry function returned this value.
    Completed(Value),
    /// A fatal error aborted the invocation; its text was echoed to the response.
    Failed(EvalError),
}

impl Outcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, Outcome::Completed(_))
    }

    /// The result value, if the invocation completed.
    pub fn value(&self) -> Option<&Value> {
        match self {
            Outcome::Completed(v) => Some(v),
            Outcome::Failed(_) => None,
        }
    }

    /// The error, if the invocation failed.
    pub fn error(&self) -> Option<&EvalError> {
        match self {
            Outcome::Completed(_) => None,
            Outcome::Failed(e) => Some(e),
        }
    }

    /// Convert to a `Result`.
    pub fn into_result(self) -> Result<Value, EvalError> {
        match self {
            Outcome::Completed(v) => Ok(v),
            Outcome::Failed(e) => Err(e),
        }
    }
}

/// Builder for a [`Player`].
///
/// Collects handlers, modules and configuration; [`build`](Self::build)
/// freezes them.
#[must_use]
pub struct PlayerBuilder {
    registry: HandlerRegistry,
    modules: FxHashMap<String, Arc<Module>>,
    config: PlayConfig,
}

impl PlayerBuilder {
    /// Start with every built-in handler registered.
    pub fn new() -> Self {
        Self::with_registry(HandlerRegistry::with_builtins())
    }

    /// Start with no handlers at all.
    pub fn bare() -> Self {
        Self::with_registry(HandlerRegistry::new())
    }

    fn with_registry(registry: HandlerRegistry) -> Self {
        PlayerBuilder {
            registry,
            modules: FxHashMap::default(),
            config: PlayConfig::default(),
        }
    }

    pub fn config(mut self, config: PlayConfig) -> Self {
        self.config = config;
        self
    }

    /// Register a handler, replacing any existing one for `tag`.
    pub fn register(mut self, tag: impl Into<String>, handler: HandlerFn) -> Self {
        self.registry.register(tag, handler);
        self
    }

    /// Add a module under its own namespace. A module already registered
    /// under that namespace is replaced.
    pub fn module(mut self, module: Module) -> Self {
        let namespace = module.namespace().to_string();
        if self.modules.insert(namespace.clone(), Arc::new(module)).is_some() {
            tracing::debug!(%namespace, "module replaced");
        }
        self
    }

    /// Load `document` as the module `namespace`.
    pub fn document(self, namespace: impl Into<String>, document: Document) -> Self {
        self.module(Module::from_document(namespace, document))
    }

    /// Freeze the registry and modules into a shareable [`Player`].
    pub fn build(self) -> Player {
        tracing::debug!(
            handlers = self.registry.len(),
            modules = self.modules.len(),
            pool_capacity = self.config.pool_capacity,
            "player built"
        );
        Player {
            runtime: Arc::new(Runtime {
                registry: Frozen::new(self.registry),
                modules: self.modules,
                pool: EnvironmentPool::new(self.config.pool_capacity),
                config: self.config,
            }),
        }
    }
}

impl Default for PlayerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable, thread-safe interpreter front end.
///
/// Cloning is cheap and shares the registry, modules and environment pool.
#[derive(Clone)]
pub struct Player {
    runtime: Arc<Runtime>,
}

impl Player {
    pub fn builder() -> PlayerBuilder {
        PlayerBuilder::new()
    }

    /// Run the function named after the request method (`cntx.method_name()`).
    pub fn execute(
        &self,
        namespace: &str,
        conn: Arc<dyn Connection>,
        cntx: Arc<dyn HttpContext>,
    ) -> Result<Outcome, EvalError> {
        let function = cntx.method_name();
        self.invoke(namespace, &function, Vec::new(), conn, cntx)
    }

    /// Run `function` of `namespace` without arguments.
    pub fn execute_function(
        &self,
        namespace: &str,
        function: &str,
        conn: Arc<dyn Connection>,
        cntx: Arc<dyn HttpContext>,
    ) -> Result<Outcome, EvalError> {
        self.invoke(namespace, function, Vec::new(), conn, cntx)
    }

    /// Run `function` of `namespace` with named arguments.
    ///
    /// An unknown namespace is returned as `Err` and nothing is written to
    /// the response. Every other failure is echoed to `cntx` and reported as
    /// [`Outcome::Failed`].
    pub fn invoke(
        &self,
        namespace: &str,
        function: &str,
        args: Vec<(String, Value)>,
        conn: Arc<dyn Connection>,
        cntx: Arc<dyn HttpContext>,
    ) -> Result<Outcome, EvalError> {
        let runtime = &*self.runtime;
        let module = runtime
            .module(namespace)
            .ok_or_else(|| module_not_found(namespace))?;

        let mut env = runtime.pool.acquire();
        env.bind(module, conn, Arc::clone(&cntx));
        let mut call_stack = CallStack::new(runtime.config.max_call_depth);
        let result = Interpreter::new(&mut env, runtime, &mut call_stack)
            .call_function(function, args);

        Ok(match result {
            Ok(value) => Outcome::Completed(value),
            Err(action) => {
                let err = action.into_eval_error();
                tracing::warn!(namespace, function, kind = ?err.kind, "invocation aborted");
                cntx.echo(&err.message);
                Outcome::Failed(err)
            }
        })
    }

    /// Whether a module is registered under `namespace`.
    pub fn has_module(&self, namespace: &str) -> bool {
        self.runtime.modules.contains_key(namespace)
    }

    /// Registered namespaces, in no particular order.
    pub fn namespaces(&self) -> impl Iterator<Item = &str> {
        self.runtime.modules.keys().map(String::as_str)
    }

    pub fn config(&self) -> &PlayConfig {
        &self.runtime.config
    }

    /// The shared environment pool.
    pub fn pool(&self) -> &EnvironmentPool {
        &self.runtime.pool
    }
}

impl fmt::Debug for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Player")
            .field("registry", &self.runtime.registry)
            .field("modules", &self.runtime.modules.len())
            .field("config", &self.runtime.config)
            .finish()
    }
}

#[cfg(test)]
mod tests;
