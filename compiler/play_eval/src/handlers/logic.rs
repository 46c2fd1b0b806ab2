//! Comparison and boolean logic.

use play_ir::Block;
use play_value::{EvalResult, Value};

use super::required_field;
use crate::interpreter::Interpreter;
use crate::operators::{evaluate_compare, evaluate_logic, CompareOp, LogicOp};

pub fn logic_compare(interp: &mut Interpreter<'_>, block: &Block) -> EvalResult {
    let a = interp.eval_value(block, "A")?;
    let b = interp.eval_value(block, "B")?;
    let op = CompareOp::from_field(required_field(block, "OP")?)?;
    Ok(Value::Bool(evaluate_compare(&a, &b, op)?))
}

/// `AND`/`OR`/`XOR`. Both operands are always evaluated.
pub fn logic_operation(interp: &mut Interpreter<'_>, block: &Block) -> EvalResult {
    let a = interp.eval_value(block, "A")?.to_boolean()?;
    let b = interp.eval_value(block, "B")?.to_boolean()?;
    let op = LogicOp::from_field(required_field(block, "OP")?)?;
    Ok(Value::Bool(evaluate_logic(a, b, op)))
}

pub fn logic_negate(interp: &mut Interpreter<'_>, block: &Block) -> EvalResult {
    Ok(Value::Bool(!interp.eval_value(block, "BOOL")?.to_boolean()?))
}

/// `IF ? THEN : ELSE`; only the chosen branch is evaluated.
pub fn logic_ternary(interp: &mut Interpreter<'_>, block: &Block) -> EvalResult {
    let branch = if interp.eval_value(block, "IF")?.to_boolean()? {
        "THEN"
    } else {
        "ELSE"
    };
    interp.eval_value(block, branch)
}
