//! Conditionals and loops.
//!
//! Loops intercept only `Break` and `Continue` (via `exec::control`); a
//! `Return` raised in a loop body passes through to the enclosing call.

use play_ir::Block;
use play_value::{field_not_found, unknown_operator, ControlAction, EvalResult, Value};

use super::required_field;
use crate::exec::control::{eval_loop, CountRange};
use crate::interpreter::Interpreter;

/// `if IF0 then DO0 else if IF1 then DO1 ... else ELSE`.
///
/// The mutation gives the number of `else if` branches and whether `ELSE`
/// exists. A branch without a `DO` body is skipped without evaluating its
/// condition.
pub fn controls_if(interp: &mut Interpreter<'_>, block: &Block) -> EvalResult {
    let (elseif, else_count) = block
        .mutation
        .as_ref()
        .map_or((0, 0), |m| (m.elseif, m.else_count));

    for i in 0..=elseif {
        let body = match block.statement(&format!("DO{i}")) {
            Ok(Some(body)) => body,
            Ok(None) | Err(_) => continue,
        };
        if interp.eval_value(block, &format!("IF{i}"))?.to_boolean()? {
            return interp.visit(body);
        }
    }
    if else_count > 0 {
        return interp.eval_statement(block, "ELSE");
    }
    Ok(Value::Null)
}

#[derive(Clone, Copy)]
enum WhileMode {
    While,
    Until,
}

/// Loop on `BOOL` (`MODE` WHILE) or its negation (`MODE` UNTIL).
///
/// Evaluates to the value of the last body pass that completed.
pub fn controls_while_until(interp: &mut Interpreter<'_>, block: &Block) -> EvalResult {
    let mode = match required_field(block, "MODE")? {
        "WHILE" => WhileMode::While,
        "UNTIL" => WhileMode::Until,
        other => return Err(unknown_operator("ControlsWhileUntil", other).into()),
    };
    eval_loop(
        interp,
        |interp| {
            let cond = interp.eval_value(block, "BOOL")?.to_boolean()?;
            Ok(match mode {
                WhileMode::While => cond,
                WhileMode::Until => !cond,
            })
        },
        |interp| interp.eval_statement(block, "DO"),
    )
}

/// Count `VAR` from `FROM` to `TO` inclusive in steps of `|BY|`.
///
/// `VAR` is written into the variable table before every pass and keeps its
/// last value afterwards.
pub fn controls_for(interp: &mut Interpreter<'_>, block: &Block) -> EvalResult {
    let var = required_field(block, "VAR")?;
    let from = interp.eval_value(block, "FROM")?.to_float()?;
    let to = interp.eval_value(block, "TO")?.to_float()?;
    let by = interp.eval_value(block, "BY")?.to_float()?;
    let mut range = CountRange::new(from, to, by)?;
    eval_loop(
        interp,
        |interp| {
            Ok(match range.next() {
                Some(i) => {
                    interp.env_mut().set(var, Value::Number(i));
                    true
                }
                None => false,
            })
        },
        |interp| interp.eval_statement(block, "DO"),
    )
}

/// `FLOW` BREAK or CONTINUE raises the signal; anything else is a no-op.
pub fn controls_flow_statements(_: &mut Interpreter<'_>, block: &Block) -> EvalResult {
    match block.field("FLOW") {
        Some("BREAK") => Err(ControlAction::Break),
        Some("CONTINUE") => Err(ControlAction::Continue),
        Some(_) => Ok(Value::Null),
        None => Err(field_not_found("FLOW").into()),
    }
}
