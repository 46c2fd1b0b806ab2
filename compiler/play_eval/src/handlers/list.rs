//! List operations on the list held in variable `VAR`.
//!
//! Every operation except `list_create` first looks up `VAR`. When it is
//! unbound the operation evaluates nothing and yields `Null` (`false` for
//! `list_exists`). A bound value that is not a list is a type assertion.
//! Inserting a list into itself, directly or through nested containers, is
//! a `CycleException`.

use play_ir::Block;
use play_value::{index_out_of_bounds, EvalError, EvalResult, ListValue, Value};

use super::bound_variable;
use crate::interpreter::Interpreter;

/// The list in `VAR`, `None` when unbound.
fn bound_list(interp: &Interpreter<'_>, block: &Block) -> Result<Option<ListValue>, EvalError> {
    bound_variable(interp, block)?
        .map(|value| value.to_list())
        .transpose()
}

/// A new, empty list. Assign it with `variables_set` to use it.
pub fn list_create(_: &mut Interpreter<'_>, _: &Block) -> EvalResult {
    Ok(Value::list(Vec::new()))
}

pub fn list_size(interp: &mut Interpreter<'_>, block: &Block) -> EvalResult {
    Ok(match bound_list(interp, block)? {
        Some(list) => Value::Number(list.len() as f64),
        None => Value::Null,
    })
}

/// Element at index `VALUE`; an index outside the list is fatal.
pub fn list_get(interp: &mut Interpreter<'_>, block: &Block) -> EvalResult {
    let Some(list) = bound_list(interp, block)? else {
        return Ok(Value::Null);
    };
    let index = interp.eval_value(block, "VALUE")?.to_int()?;
    usize::try_from(index)
        .ok()
        .and_then(|i| list.get(i))
        .ok_or_else(|| index_out_of_bounds(index, list.len()).into())
}

/// Whether any element equals `VALUE`.
pub fn list_exists(interp: &mut Interpreter<'_>, block: &Block) -> EvalResult {
    let Some(list) = bound_list(interp, block)? else {
        return Ok(Value::Bool(false));
    };
    let needle = interp.eval_value(block, "VALUE")?;
    Ok(Value::Bool(list.contains(&needle)))
}

pub fn list_push(interp: &mut Interpreter<'_>, block: &Block) -> EvalResult {
    if let Some(list) = bound_list(interp, block)? {
        list.push(interp.eval_value(block, "VALUE")?)?;
    }
    Ok(Value::Null)
}

/// Remove and return the last element; `Null` on an empty list.
pub fn list_pop(interp: &mut Interpreter<'_>, block: &Block) -> EvalResult {
    Ok(match bound_list(interp, block)? {
        Some(list) => list.pop(),
        None => Value::Null,
    })
}

/// Remove and return the first element; `Null` on an empty list.
pub fn list_shift(interp: &mut Interpreter<'_>, block: &Block) -> EvalResult {
    Ok(match bound_list(interp, block)? {
        Some(list) => list.shift(),
        None => Value::Null,
    })
}

pub fn list_unshift(interp: &mut Interpreter<'_>, block: &Block) -> EvalResult {
    if let Some(list) = bound_list(interp, block)? {
        list.unshift(interp.eval_value(block, "VALUE")?)?;
    }
    Ok(Value::Null)
}

/// Delete index `VALUE` by moving the last element into its place.
///
/// Element order is not preserved. An index outside the list is ignored.
pub fn list_delete(interp: &mut Interpreter<'_>, block: &Block) -> EvalResult {
    if let Some(list) = bound_list(interp, block)? {
        let index = interp.eval_value(block, "VALUE")?.to_int()?;
        if let Ok(index) = usize::try_from(index) {
            list.swap_remove(index);
        }
    }
    Ok(Value::Null)
}
