//! Loop control flow.
//!
//! Loops own `Break` and `Continue` and nothing else. A loop body's result is
//! narrowed with [`to_loop_action`]; every other action goes back to the
//! caller unchanged, so a `Return` raised inside a loop still reaches the
//! enclosing function call.

use play_value::{unknown_operator, ControlAction, EvalError, EvalResult, Value};

/// What a loop should do after one pass of its body.
#[derive(Clone, Debug, PartialEq)]
pub enum LoopAction {
    /// The body ran to completion with this value.
    Completed(Value),
    /// `continue`: start the next pass, keeping the previous value.
    Continue,
    /// `break`: leave the loop, keeping the previous value.
    Break,
}

/// Narrow a body result to a [`LoopAction`].
///
/// `Return` and fatal errors are handed back as `Err` untouched.
#[inline]
pub fn to_loop_action(result: EvalResult) -> Result<LoopAction, ControlAction> {
    match result {
        Ok(value) => Ok(LoopAction::Completed(value)),
        Err(ControlAction::Break) => Ok(LoopAction::Break),
        Err(ControlAction::Continue) => Ok(LoopAction::Continue),
        Err(other) => Err(other),
    }
}

/// Run `body` until it breaks or `keep_going` returns `false`.
///
/// `keep_going` is consulted before every pass. Returns the value of the last
/// pass that completed, or `Null` if none did.
pub fn eval_loop<S, C, B>(state: &mut S, mut keep_going: C, mut body: B) -> EvalResult
where
    C: FnMut(&mut S) -> Result<bool, ControlAction>,
    B: FnMut(&mut S) -> EvalResult,
{
    let mut last = Value::Null;
    while keep_going(state)? {
        match to_loop_action(body(state))? {
            LoopAction::Completed(value) => last = value,
            LoopAction::Continue => {}
            LoopAction::Break => break,
        }
    }
    Ok(last)
}

/// Inclusive counting range used by `controls_for`.
///
/// The step is taken as an absolute value; the direction comes from the
/// bounds, counting down when `from > to`.
#[derive(Clone, Debug, PartialEq)]
pub struct CountRange {
    next: f64,
    to: f64,
    step: f64,
    ascending: bool,
}

impl CountRange {
    /// Build the range, rejecting a zero or NaN step, which would never end.
    pub fn new(from: f64, to: f64, by: f64) -> Result<Self, EvalError> {
        let step = by.abs();
        if step == 0.0 || step.is_nan() {
            return Err(unknown_operator("ControlsFor", &format!("BY {by}")));
        }
        Ok(CountRange {
            next: from,
            to,
            step,
            ascending: from <= to,
        })
    }
}

impl Iterator for CountRange {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        let current = self.next;
        let in_range = if self.ascending {
            current <= self.to
        } else {
            current >= self.to
        };
        if !in_range {
            return None;
        }
        self.next = if self.ascending {
            current + self.step
        } else {
            current - self.step
        };
        Some(current)
    }
}
