//! Function calls.

use play_ir::{Block, Mutation};
use play_value::{block_not_found, ControlAction, EvalResult, Value};

use super::required_field;
use crate::interpreter::Interpreter;

/// Evaluate `ARG0..ARGn` for the parameters listed in the mutation.
fn eval_arguments(
    interp: &mut Interpreter<'_>,
    block: &Block,
    mutation: &Mutation,
) -> Result<Vec<(String, Value)>, ControlAction> {
    mutation
        .param_names()
        .enumerate()
        .map(|(i, param)| -> Result<(String, Value), ControlAction> {
            let value = interp.eval_value(block, &format!("ARG{i}"))?;
            Ok((param.to_string(), value))
        })
        .collect()
}

/// `procedures_callreturn` / `procedures_callnoreturn`.
///
/// The callee is resolved before any argument is evaluated, so calling an
/// unknown function has no side effects.
pub fn call(interp: &mut Interpreter<'_>, block: &Block) -> EvalResult {
    let mutation = block
        .mutation
        .as_ref()
        .ok_or_else(|| block_not_found("Mutation"))?;
    let name = mutation.name.as_deref().unwrap_or_default();
    let (module, def) = interp.resolve_function(name)?;
    let args = eval_arguments(interp, block, mutation)?;
    interp.call_resolved(&module, &def, args)
}

/// `procedures_callmodule`: call `NAME` in the module registered as `MODULE`.
///
/// Arguments are evaluated in the caller's environment; the callee gets its
/// own.
pub fn call_module(interp: &mut Interpreter<'_>, block: &Block) -> EvalResult {
    let namespace = required_field(block, "MODULE")?;
    let function = required_field(block, "NAME")?;
    let args = match &block.mutation {
        Some(mutation) => eval_arguments(interp, block, mutation)?,
        None => Vec::new(),
    };
    interp.execute_module(namespace, function, args)
}

/// Return `VALUE` (or `Null` without one) from the enclosing call when
/// `CONDITION` holds.
pub fn if_return(interp: &mut Interpreter<'_>, block: &Block) -> EvalResult {
    if !interp.eval_value(block, "CONDITION")?.to_boolean()? {
        return Ok(Value::Null);
    }
    let value = if block.has_value("VALUE") {
        interp.eval_value(block, "VALUE")?
    } else {
        Value::Null
    };
    Err(ControlAction::Return(value))
}
