//! Play Eval - tree-walking evaluator for Play block trees.
//!
//! This crate runs the functions of registered modules against a request:
//!
//! # Architecture
//!
//! - `Player` / `PlayerBuilder`: startup configuration, then an immutable,
//!   thread-safe entry point
//! - `HandlerRegistry`: block type tag to handler function, frozen at build
//! - `Interpreter`: visits block chains, dispatches to handlers, manages
//!   function calls and cross-namespace execution
//! - `Environment` / `EnvironmentPool`: per-invocation variable table and
//!   collaborator handles, recycled across requests
//! - `CallStack`: call-depth limit and error backtraces
//! - `HttpContext` / `Connection`: the collaborators a host supplies
//!
//! Built-in handlers live in `handlers`; `register_builtins` installs them
//! and `PlayerBuilder::new` calls it for you.
//!
//! # Re-exports
//!
//! Value and error types from `play_value` and the block types from
//! `play_ir` are re-exported so hosts and extension handlers need only this
//! crate.

mod config;
mod context;
mod diagnostics;
mod environment;
pub mod exec;
mod handlers;
mod interpreter;
pub mod operators;
mod player;
mod pool;
mod registry;
mod shared;

#[cfg(test)]
mod test_support;

pub use play_ir::{Block, BlockBuilder, Document, FunctionDef, Module};
pub use play_value::{
    ControlAction, EvalBacktrace, EvalError, EvalErrorKind, EvalResult, ListValue, MapKey,
    MapValue, Value,
};

pub use config::{
    ConfigError, PlayConfig, DEFAULT_MAX_CALL_DEPTH, DEFAULT_POOL_CAPACITY, MAX_CALL_DEPTH_VAR,
    POOL_CAPACITY_VAR,
};
pub use context::{BufferContext, Connection, ContentType, HttpContext, NullConnection};
pub use diagnostics::{CallFrame, CallStack};
pub use environment::Environment;
pub use handlers::register_builtins;
pub use interpreter::{Interpreter, ScopedArguments};
pub use player::{Outcome, Player, PlayerBuilder};
pub use pool::{EnvironmentPool, PooledEnvironment};
pub use registry::{HandlerFn, HandlerRegistry};
pub use shared::Frozen;
pub use play_stack::ensure_sufficient_stack;
