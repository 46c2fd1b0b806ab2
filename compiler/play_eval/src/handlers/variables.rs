//! Variable access against the shared variable table.

use play_ir::Block;
use play_value::{EvalResult, Value};

use super::required_field;
use crate::interpreter::Interpreter;

/// Value of `VAR`, or `Null` when unbound.
pub fn variables_get(interp: &mut Interpreter<'_>, block: &Block) -> EvalResult {
    let name = required_field(block, "VAR")?;
    Ok(interp.env().lookup(name))
}

/// Store `VALUE` under `VAR`. Evaluates to `Null`.
pub fn variables_set(interp: &mut Interpreter<'_>, block: &Block) -> EvalResult {
    let name = required_field(block, "VAR")?;
    let value = interp.eval_value(block, "VALUE")?;
    interp.env_mut().set(name, value);
    Ok(Value::Null)
}
