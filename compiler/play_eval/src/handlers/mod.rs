//! Built-in block handlers.
//!
//! Each submodule covers one block family and exposes plain functions with
//! the [`HandlerFn`](crate::HandlerFn) signature. [`register_builtins`] wires
//! them to their type tags; hosts add their own handlers on top through
//! [`PlayerBuilder::register`](crate::PlayerBuilder::register).
//!
//! Slot conventions:
//! - literal inputs are fields (`NUM`, `VAR`, `OP`, `MODE`, ...)
//! - evaluated inputs are value slots (`A`, `B`, `VALUE`, `KEY`, ...)
//! - bodies are statement slots (`DO`, `DO0`, `ELSE`, `STACK`)

mod control;
mod http;
mod list;
mod literals;
mod logic;
mod map;
mod math;
mod procedures;
mod text;
mod variables;

use play_ir::{tags, Block};
use play_value::{field_not_found, EvalError, Value};

use crate::interpreter::Interpreter;
use crate::registry::HandlerRegistry;

/// Register every built-in handler.
pub fn register_builtins(registry: &mut HandlerRegistry) {
    // Literals and variables
    registry.register(tags::MATH_NUMBER, literals::math_number);
    registry.register(tags::TEXT, literals::text);
    registry.register(tags::LOGIC_BOOLEAN, literals::logic_boolean);
    registry.register(tags::LOGIC_NULL, literals::logic_null);
    registry.register(tags::VARIABLES_GET, variables::variables_get);
    registry.register(tags::VARIABLES_SET, variables::variables_set);
    registry.register(tags::TEXT_PRINT, text::text_print);
    registry.register(tags::TEXT_PRINTLN, text::text_println);

    // Operators
    registry.register(tags::MATH_ARITHMETIC, math::math_arithmetic);
    registry.register(tags::LOGIC_COMPARE, logic::logic_compare);
    registry.register(tags::LOGIC_OPERATION, logic::logic_operation);
    registry.register(tags::LOGIC_NEGATE, logic::logic_negate);
    registry.register(tags::LOGIC_TERNARY, logic::logic_ternary);

    // Control flow
    registry.register(tags::CONTROLS_IF, control::controls_if);
    registry.register(tags::CONTROLS_WHILE_UNTIL, control::controls_while_until);
    registry.register(tags::CONTROLS_FOR, control::controls_for);
    registry.register(tags::CONTROLS_FLOW_STATEMENTS, control::controls_flow_statements);

    // Procedures
    registry.register(tags::PROCEDURES_CALL_RETURN, procedures::call);
    registry.register(tags::PROCEDURES_CALL_NO_RETURN, procedures::call);
    registry.register(tags::PROCEDURES_CALL_MODULE, procedures::call_module);
    registry.register(tags::PROCEDURES_IF_RETURN, procedures::if_return);

    // Containers
    registry.register(tags::LIST_CREATE, list::list_create);
    registry.register(tags::LIST_SIZE, list::list_size);
    registry.register(tags::LIST_GET, list::list_get);
    registry.register(tags::LIST_EXISTS, list::list_exists);
    registry.register(tags::LIST_PUSH, list::list_push);
    registry.register(tags::LIST_POP, list::list_pop);
    registry.register(tags::LIST_SHIFT, list::list_shift);
    registry.register(tags::LIST_UNSHIFT, list::list_unshift);
    registry.register(tags::LIST_DELETE, list::list_delete);
    registry.register(tags::MAP_CREATE, map::map_create);
    registry.register(tags::MAP_SIZE, map::map_size);
    registry.register(tags::MAP_GET, map::map_get);
    registry.register(tags::MAP_EXISTS, map::map_exists);
    registry.register(tags::MAP_PUT, map::map_put);
    registry.register(tags::MAP_DELETE, map::map_delete);

    // Request/response collaborator
    registry.register(tags::CTX_GET, http::ctx_get);
    registry.register(tags::CTX_SET, http::ctx_set);
    registry.register(tags::CTX_UNSET, http::ctx_unset);
    registry.register(tags::CTX_CODE, http::ctx_code);
    registry.register(tags::CTX_REDIRECT, http::ctx_redirect);
    registry.register(tags::CTX_HEADER, http::ctx_header);
    registry.register(tags::CTX_CONTENT_TYPE, http::ctx_content_type);
}

/// Text of a field the block cannot do without.
#[inline]
pub(crate) fn required_field<'b>(block: &'b Block, name: &str) -> Result<&'b str, EvalError> {
    block.field(name).ok_or_else(|| field_not_found(name))
}

/// Current value of the variable named by the `VAR` field, `None` when unbound.
pub(crate) fn bound_variable(
    interp: &Interpreter<'_>,
    block: &Block,
) -> Result<Option<Value>, EvalError> {
    let name = required_field(block, "VAR")?;
    Ok(interp.env().get(name).cloned())
}
