//! Evaluation errors and control-flow signals.
//!
//! # Structured Error Categories
//!
//! `EvalErrorKind` is the closed taxonomy of fatal conditions. Its `Display`
//! output is exactly the text written to the response when an invocation
//! aborts, so the wording here is user-visible and stable.
//!
//! Factory functions (e.g. `func_not_found()`) are the public way to build
//! errors; they are `#[cold]` because every one of them ends an invocation.

use std::fmt;

use crate::value::Value;

/// Result of evaluating a block.
pub type EvalResult = Result<Value, ControlAction>;

/// Typed category of a fatal evaluation error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalErrorKind {
    // Block shape
    /// A handler required a literal field the block does not carry.
    #[error("FieldNotFoundException: {name}")]
    FieldNotFound { name: String },
    /// A value slot is missing or does not hold exactly one child.
    #[error("BlockNotFoundException: {name}")]
    BlockNotFound { name: String },

    // Lookup
    /// The current module defines no function with this name.
    #[error("FuncNotFoundException: {name}")]
    FuncNotFound { name: String },
    /// No handler is registered for this block type.
    #[error("HandlerNotFound: {tag}")]
    HandlerNotFound { tag: String },
    /// No module is registered under this namespace.
    #[error("ASTNotFoundException: {namespace}")]
    ModuleNotFound { namespace: String },

    // Conversion
    /// A value has no representation in the requested variant.
    #[error("{}AssertException: {variant} has no representation as {target}", assert_prefix(variant))]
    TypeAssertion {
        variant: &'static str,
        target: &'static str,
    },
    /// A string could not be parsed as a number.
    #[error("CoercionException: cannot parse {input:?} as {target}")]
    Coercion { input: String, target: &'static str },
    /// A list or map was used as a map key.
    #[error("KeyException: {variant} cannot be used as a map key")]
    UnhashableKey { variant: &'static str },

    // Operators and containers
    /// An operator field holds a value the block does not understand.
    #[error("{block}Exception: {op}")]
    UnknownOperator { block: &'static str, op: String },
    /// Inserting a container would make it reachable from itself.
    #[error("CycleException: {variant} cannot contain itself")]
    CyclicContainer { variant: &'static str },
    /// A list index outside `0..len`.
    #[error("IndexOutOfBoundsException: index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: i64, len: usize },

    // Runtime limits and signals
    /// Function calls nested deeper than the configured limit.
    #[error("StackOverflowException: maximum call depth exceeded (limit: {depth})")]
    StackOverflow { depth: usize },
    /// A break/continue/return reached a boundary that does not intercept it.
    #[error("UnhandledSignalException: {signal}")]
    UnhandledSignal { signal: &'static str },

    /// Raised by extension handlers with their own message.
    #[error("{message}")]
    Custom { message: String },
}

/// `number` -> `Number`, the prefix used by assertion messages.
fn assert_prefix(variant: &str) -> String {
    let mut chars = variant.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// A single frame in an evaluation backtrace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BacktraceFrame {
    /// `namespace::function` of the call.
    pub name: String,
}

/// Snapshot of the call stack at the point an error left a function.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EvalBacktrace {
    frames: Vec<BacktraceFrame>,
}

impl EvalBacktrace {
    /// Create a backtrace from frames, most recent call first.
    pub fn new(frames: Vec<BacktraceFrame>) -> Self {
        Self { frames }
    }

    pub fn frames(&self) -> &[BacktraceFrame] {
        &self.frames
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }
}

impl fmt::Display for EvalBacktrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.frames.is_empty() {
            return Ok(());
        }
        writeln!(f, "call backtrace:")?;
        for (i, frame) in self.frames.iter().enumerate() {
            writeln!(f, "  {i}: {}", frame.name)?;
        }
        Ok(())
    }
}

/// A fatal evaluation error.
///
/// `message` is the rendered kind; the backtrace is diagnostic only and is
/// never part of the response text.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct EvalError {
    pub message: String,
    pub kind: EvalErrorKind,
    /// Call stack captured when the error first crossed a call boundary.
    pub backtrace: Option<EvalBacktrace>,
}

impl EvalError {
    /// Create a `Custom` error with a free-form message.
    pub fn new(message: impl Into<String>) -> Self {
        Self::from_kind(EvalErrorKind::Custom {
            message: message.into(),
        })
    }

    fn from_kind(kind: EvalErrorKind) -> Self {
        Self {
            message: kind.to_string(),
            kind,
            backtrace: None,
        }
    }

    /// Attach a backtrace unless one is already present.
    #[must_use]
    pub fn with_backtrace(mut self, backtrace: EvalBacktrace) -> Self {
        if self.backtrace.is_none() {
            self.backtrace = Some(backtrace);
        }
        self
    }
}

/// Non-local exit from a block.
///
/// `Break` and `Continue` are owned by loops, `Return` by function calls and
/// `Error` by the top-level invocation boundary. An interception point matches
/// only the variants it owns and re-raises every other action untouched.
#[derive(Clone, Debug, PartialEq)]
pub enum ControlAction {
    /// Leave the innermost loop.
    Break,
    /// Skip to the next iteration of the innermost loop.
    Continue,
    /// Leave the innermost function call with a value.
    Return(Value),
    /// Fatal error; unwinds the whole invocation.
    Error(Box<EvalError>),
}

impl ControlAction {
    /// Whether this is a fatal error rather than a control signal.
    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, ControlAction::Error(_))
    }

    /// Name of the signal (`break`, `continue`, `return`), `None` for errors.
    pub fn signal_name(&self) -> Option<&'static str> {
        match self {
            ControlAction::Break => Some("break"),
            ControlAction::Continue => Some("continue"),
            ControlAction::Return(_) => Some("return"),
            ControlAction::Error(_) => None,
        }
    }

    /// Narrow to a function-call result: `Return(v)` becomes `Ok(v)`,
    /// anything else is handed back as `Err` unchanged.
    #[inline]
    pub fn into_return(self) -> Result<Value, ControlAction> {
        match self {
            ControlAction::Return(value) => Ok(value),
            other => Err(other),
        }
    }

    /// Convert to an error at a boundary that owns no signal.
    ///
    /// A stray signal becomes `UnhandledSignal`.
    pub fn into_eval_error(self) -> EvalError {
        match self {
            ControlAction::Error(e) => *e,
            signal => unhandled_signal(signal.signal_name().unwrap_or("unknown")),
        }
    }

    /// Apply `f` to the error payload, leaving signals untouched.
    #[must_use]
    pub fn map_error(self, f: impl FnOnce(EvalError) -> EvalError) -> Self {
        match self {
            ControlAction::Error(e) => ControlAction::Error(Box::new(f(*e))),
            signal => signal,
        }
    }
}

impl From<EvalError> for ControlAction {
    #[inline]
    fn from(err: EvalError) -> Self {
        ControlAction::Error(Box::new(err))
    }
}

// Block Shape Errors

/// A required literal field is missing.
#[cold]
pub fn field_not_found(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::FieldNotFound {
        name: name.to_string(),
    })
}

/// A required value slot is missing or does not hold exactly one child.
#[cold]
pub fn block_not_found(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::BlockNotFound {
        name: name.to_string(),
    })
}

// Lookup Errors

/// Unknown function in the current module.
#[cold]
pub fn func_not_found(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::FuncNotFound {
        name: name.to_string(),
    })
}

/// No handler registered for a block type.
#[cold]
pub fn handler_not_found(tag: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::HandlerNotFound {
        tag: tag.to_string(),
    })
}

/// Unknown module namespace.
#[cold]
pub fn module_not_found(namespace: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ModuleNotFound {
        namespace: namespace.to_string(),
    })
}

// Conversion Errors

/// `variant` cannot be converted to `target`.
#[cold]
pub fn type_assertion(variant: &'static str, target: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeAssertion { variant, target })
}

/// `input` is not a valid `target`.
#[cold]
pub fn coercion_failure(input: &str, target: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::Coercion {
        input: input.to_string(),
        target,
    })
}

/// A container was used as a map key.
#[cold]
pub fn unhashable_key(variant: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnhashableKey { variant })
}

// Operator and Container Errors

/// `op` is not an operator of `block` (e.g. `MathArithmetic`).
#[cold]
pub fn unknown_operator(block: &'static str, op: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnknownOperator {
        block,
        op: op.to_string(),
    })
}

/// Inserting into a `variant` would close a reference cycle.
#[cold]
pub fn cyclic_container(variant: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::CyclicContainer { variant })
}

/// List index outside `0..len`.
#[cold]
pub fn index_out_of_bounds(index: i64, len: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IndexOutOfBounds { index, len })
}

// Runtime Limit and Signal Errors

/// Call depth limit exceeded.
#[cold]
pub fn stack_overflow(depth: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::StackOverflow { depth })
}

/// A control signal escaped every interception point.
#[cold]
pub fn unhandled_signal(signal: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnhandledSignal { signal })
}
