//! Request/response collaborator blocks.
//!
//! Parameter names and values come from the `NAME` and `VALUE` value slots
//! and are converted with their string form.

use play_ir::Block;
use play_value::{coercion_failure, ControlAction, EvalResult, Value};

use crate::context::ContentType;
use crate::interpreter::Interpreter;

fn text_slot(
    interp: &mut Interpreter<'_>,
    block: &Block,
    name: &str,
) -> Result<String, ControlAction> {
    Ok(interp.eval_value(block, name)?.to_text()?)
}

/// Request parameter `VALUE`, or `Null` when it is not set.
pub fn ctx_get(interp: &mut Interpreter<'_>, block: &Block) -> EvalResult {
    let name = text_slot(interp, block, "VALUE")?;
    Ok(interp
        .context()?
        .get(&name)
        .map_or(Value::Null, Value::string))
}

pub fn ctx_set(interp: &mut Interpreter<'_>, block: &Block) -> EvalResult {
    let name = text_slot(interp, block, "NAME")?;
    let value = text_slot(interp, block, "VALUE")?;
    interp.context()?.set(&name, &value);
    Ok(Value::Null)
}

pub fn ctx_unset(interp: &mut Interpreter<'_>, block: &Block) -> EvalResult {
    let name = text_slot(interp, block, "VALUE")?;
    let cntx = interp.context()?;
    if cntx.exists(&name) {
        cntx.unset(&name);
    }
    Ok(Value::Null)
}

/// Set the status code; a value outside `0..=65535` is a coercion failure.
pub fn ctx_code(interp: &mut Interpreter<'_>, block: &Block) -> EvalResult {
    let code = interp.eval_value(block, "VALUE")?.to_int()?;
    let status =
        u16::try_from(code).map_err(|_| coercion_failure(&code.to_string(), "status code"))?;
    interp.context()?.code(status);
    Ok(Value::Null)
}

pub fn ctx_redirect(interp: &mut Interpreter<'_>, block: &Block) -> EvalResult {
    let location = text_slot(interp, block, "VALUE")?;
    interp.context()?.redirect(&location);
    Ok(Value::Null)
}

pub fn ctx_header(interp: &mut Interpreter<'_>, block: &Block) -> EvalResult {
    let name = text_slot(interp, block, "NAME")?;
    let value = text_slot(interp, block, "VALUE")?;
    interp.context()?.header(&name, &value);
    Ok(Value::Null)
}

/// Set the response content type from `NAME` (TEXT, HTML, JSON or IMG).
///
/// Any other name leaves the content type unchanged.
pub fn ctx_content_type(interp: &mut Interpreter<'_>, block: &Block) -> EvalResult {
    let name = text_slot(interp, block, "NAME")?;
    match ContentType::from_name(&name) {
        Some(content_type) => interp.context()?.content_type(content_type),
        None => tracing::debug!(%name, "unknown content type ignored"),
    }
    Ok(Value::Null)
}
