//! Arithmetic.

use play_ir::Block;
use play_value::{EvalResult, Value};

use super::required_field;
use crate::interpreter::Interpreter;
use crate::operators::{evaluate_arithmetic, ArithOp};

/// `A OP B` over the numeric forms of both operands.
///
/// Both operands are evaluated before the operator is looked at.
pub fn math_arithmetic(interp: &mut Interpreter<'_>, block: &Block) -> EvalResult {
    let a = interp.eval_value(block, "A")?.to_float()?;
    let b = interp.eval_value(block, "B")?.to_float()?;
    let op = ArithOp::from_field(required_field(block, "OP")?)?;
    Ok(Value::Number(evaluate_arithmetic(a, b, op)))
}
