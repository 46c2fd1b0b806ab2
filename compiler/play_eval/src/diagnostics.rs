//! Call tracking for one invocation.
//!
//! `CallStack` bounds the nesting of function calls and snapshots the live
//! frames into an [`EvalBacktrace`] when an error leaves a call.

use play_value::{stack_overflow, BacktraceFrame, EvalBacktrace, EvalError};

/// One active function call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallFrame {
    pub namespace: String,
    pub function: String,
}

impl CallFrame {
    pub fn new(namespace: impl Into<String>, function: impl Into<String>) -> Self {
        CallFrame {
            namespace: namespace.into(),
            function: function.into(),
        }
    }

    /// `namespace::function`
    pub fn qualified_name(&self) -> String {
        format!("{}::{}", self.namespace, self.function)
    }
}

/// Live function calls of one invocation, across namespaces.
#[derive(Clone, Debug, Default)]
pub struct CallStack {
    frames: Vec<CallFrame>,
    max_depth: Option<usize>,
}

impl CallStack {
    /// Create an empty stack; `None` means no depth limit.
    pub fn new(max_depth: Option<usize>) -> Self {
        CallStack {
            frames: Vec::new(),
            max_depth,
        }
    }

    /// Enter a call. Fails without pushing when the limit is reached.
    pub fn push(&mut self, frame: CallFrame) -> Result<(), EvalError> {
        if let Some(max) = self.max_depth {
            if self.frames.len() >= max {
                return Err(stack_overflow(max));
            }
        }
        self.frames.push(frame);
        Ok(())
    }

    /// Leave the innermost call.
    pub fn pop(&mut self) {
        debug_assert!(!self.frames.is_empty(), "CallStack::pop on empty stack");
        self.frames.pop();
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn current_frame(&self) -> Option<&CallFrame> {
        self.frames.last()
    }

    /// Snapshot of the live frames, most recent first.
    pub fn capture(&self) -> EvalBacktrace {
        EvalBacktrace::new(
            self.frames
                .iter()
                .rev()
                .map(|f| BacktraceFrame {
                    name: f.qualified_name(),
                })
                .collect(),
        )
    }

    /// Attach a backtrace unless the error already carries one.
    pub fn attach_backtrace(&self, err: EvalError) -> EvalError {
        if self.frames.is_empty() || err.backtrace.is_some() {
            return err;
        }
        err.with_backtrace(self.capture())
    }
}

#[cfg(test)]
mod tests;
