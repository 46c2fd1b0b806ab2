//! Play Value - runtime values and evaluation signals.
//!
//! This crate provides:
//! - `Value`: the closed set of dynamically-typed runtime values
//!   (Null, Boolean, Number, String, List, Map) and their coercions
//! - `ListValue` / `MapValue`: containers with shared, aliasing storage
//! - `EvalError` / `EvalErrorKind`: the fatal error taxonomy
//! - `ControlAction`: break/continue/return signals threaded through evaluation
//!
//! # Signals vs. errors
//!
//! Every evaluation step returns `EvalResult = Result<Value, ControlAction>`.
//! `ControlAction` carries both non-local control flow and fatal errors, so a
//! single `?` propagates either one outward. Interception points narrow the
//! action they own and hand everything else back unchanged.

mod errors;
mod value;

pub use errors::{
    BacktraceFrame, ControlAction, EvalBacktrace, EvalError, EvalErrorKind, EvalResult,
};
pub use value::{ListValue, MapKey, MapValue, Value};

// Error constructors, grouped by where they are raised.
pub use errors::{
    // Block shape
    block_not_found, field_not_found,
    // Lookup
    func_not_found, handler_not_found, module_not_found,
    // Conversion
    coercion_failure, type_assertion, unhashable_key,
    // Operators and containers
    cyclic_container, index_out_of_bounds, unknown_operator,
    // Runtime limits and signals
    stack_overflow, unhandled_signal,
};
