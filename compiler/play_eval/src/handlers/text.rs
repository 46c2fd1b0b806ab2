//! Response output.

use play_ir::Block;
use play_value::{EvalResult, Value};

use crate::interpreter::Interpreter;

pub fn text_print(interp: &mut Interpreter<'_>, block: &Block) -> EvalResult {
    let text = interp.eval_value(block, "TEXT")?.to_text()?;
    interp.context()?.echo(&text);
    Ok(Value::Null)
}

/// Like `text_print`, followed by a CRLF.
pub fn text_println(interp: &mut Interpreter<'_>, block: &Block) -> EvalResult {
    let text = interp.eval_value(block, "TEXT")?.to_text()?;
    let cntx = interp.context()?;
    cntx.echo(&text);
    cntx.echo("\r\n");
    Ok(Value::Null)
}
