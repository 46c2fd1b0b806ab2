//! Literal blocks.

use play_ir::Block;
use play_value::{coercion_failure, EvalResult, Value};

use super::required_field;
use crate::interpreter::Interpreter;

pub fn math_number(_: &mut Interpreter<'_>, block: &Block) -> EvalResult {
    let text = required_field(block, "NUM")?;
    let n: f64 = text
        .parse()
        .map_err(|_| coercion_failure(text, "number"))?;
    Ok(Value::Number(n))
}

pub fn text(_: &mut Interpreter<'_>, block: &Block) -> EvalResult {
    Ok(Value::string(required_field(block, "TEXT")?))
}

/// Only the exact text `TRUE` is true.
pub fn logic_boolean(_: &mut Interpreter<'_>, block: &Block) -> EvalResult {
    Ok(Value::Bool(required_field(block, "BOOL")? == "TRUE"))
}

pub fn logic_null(_: &mut Interpreter<'_>, _: &Block) -> EvalResult {
    Ok(Value::Null)
}
