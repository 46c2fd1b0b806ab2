//! Map operations on the map held in variable `VAR`, keyed by `KEY`.
//!
//! Like the list operations, an unbound `VAR` short-circuits to `Null`
//! (`false` for `map_exists`) without evaluating `KEY` or `VALUE`.

use play_ir::Block;
use play_value::{EvalError, EvalResult, MapValue, Value};

use super::bound_variable;
use crate::interpreter::Interpreter;

fn bound_map(interp: &Interpreter<'_>, block: &Block) -> Result<Option<MapValue>, EvalError> {
    bound_variable(interp, block)?
        .map(|value| value.to_map())
        .transpose()
}

pub fn map_create(_: &mut Interpreter<'_>, _: &Block) -> EvalResult {
    Ok(Value::map())
}

pub fn map_size(interp: &mut Interpreter<'_>, block: &Block) -> EvalResult {
    Ok(match bound_map(interp, block)? {
        Some(map) => Value::Number(map.len() as f64),
        None => Value::Null,
    })
}

/// Value under `KEY`, `Null` when absent.
pub fn map_get(interp: &mut Interpreter<'_>, block: &Block) -> EvalResult {
    let Some(map) = bound_map(interp, block)? else {
        return Ok(Value::Null);
    };
    let key = interp.eval_value(block, "KEY")?;
    Ok(map.get(&key)?)
}

pub fn map_exists(interp: &mut Interpreter<'_>, block: &Block) -> EvalResult {
    let Some(map) = bound_map(interp, block)? else {
        return Ok(Value::Bool(false));
    };
    let key = interp.eval_value(block, "KEY")?;
    Ok(Value::Bool(map.contains_key(&key)?))
}

/// Store `VALUE` under `KEY`; `KEY` is evaluated first.
pub fn map_put(interp: &mut Interpreter<'_>, block: &Block) -> EvalResult {
    if let Some(map) = bound_map(interp, block)? {
        let key = interp.eval_value(block, "KEY")?;
        let value = interp.eval_value(block, "VALUE")?;
        map.put(&key, value)?;
    }
    Ok(Value::Null)
}

pub fn map_delete(interp: &mut Interpreter<'_>, block: &Block) -> EvalResult {
    if let Some(map) = bound_map(interp, block)? {
        let key = interp.eval_value(block, "KEY")?;
        map.remove(&key)?;
    }
    Ok(Value::Null)
}
