//! Block type tags understood by the built-in handlers.
//!
//! Tags follow the editor's naming (`<category>_<operation>`). Extension
//! handlers are free to register any other tag.

// Literals
pub const MATH_NUMBER: &str = "math_number";
pub const TEXT: &str = "text";
pub const LOGIC_BOOLEAN: &str = "logic_boolean";
pub const LOGIC_NULL: &str = "logic_null";

// Variables and output
pub const VARIABLES_GET: &str = "variables_get";
pub const VARIABLES_SET: &str = "variables_set";
pub const TEXT_PRINT: &str = "text_print";
pub const TEXT_PRINTLN: &str = "text_println";

// Operators
pub const MATH_ARITHMETIC: &str = "math_arithmetic";
pub const LOGIC_COMPARE: &str = "logic_compare";
pub const LOGIC_OPERATION: &str = "logic_operation";
pub const LOGIC_NEGATE: &str = "logic_negate";
pub const LOGIC_TERNARY: &str = "logic_ternary";

// Control flow
pub const CONTROLS_IF: &str = "controls_if";
pub const CONTROLS_WHILE_UNTIL: &str = "controls_whileUntil";
pub const CONTROLS_FOR: &str = "controls_for";
pub const CONTROLS_FLOW_STATEMENTS: &str = "controls_flow_statements";

// Procedures
pub const PROCEDURES_DEF_NO_RETURN: &str = "procedures_defnoreturn";
pub const PROCEDURES_DEF_RETURN: &str = "procedures_defreturn";
pub const PROCEDURES_CALL_NO_RETURN: &str = "procedures_callnoreturn";
pub const PROCEDURES_CALL_RETURN: &str = "procedures_callreturn";
pub const PROCEDURES_CALL_MODULE: &str = "procedures_callmodule";
pub const PROCEDURES_IF_RETURN: &str = "procedures_ifreturn";

// Lists
pub const LIST_CREATE: &str = "list_create";
pub const LIST_SIZE: &str = "list_size";
pub const LIST_GET: &str = "list_get";
pub const LIST_EXISTS: &str = "list_exists";
pub const LIST_PUSH: &str = "list_push";
pub const LIST_POP: &str = "list_pop";
pub const LIST_SHIFT: &str = "list_shift";
pub const LIST_UNSHIFT: &str = "list_unshift";
pub const LIST_DELETE: &str = "list_delete";

// Maps
pub const MAP_CREATE: &str = "map_create";
pub const MAP_SIZE: &str = "map_size";
pub const MAP_GET: &str = "map_get";
pub const MAP_EXISTS: &str = "map_exists";
pub const MAP_PUT: &str = "map_put";
pub const MAP_DELETE: &str = "map_delete";

// Request/response context
pub const CTX_GET: &str = "ctx_get";
pub const CTX_SET: &str = "ctx_set";
pub const CTX_UNSET: &str = "ctx_unset";
pub const CTX_CODE: &str = "ctx_code";
pub const CTX_REDIRECT: &str = "ctx_redirect";
pub const CTX_HEADER: &str = "ctx_header";
pub const CTX_CONTENT_TYPE: &str = "ctx_content_type";

/// Returns `true` for the two function-definition tags.
#[inline]
pub fn is_function_definition(tag: &str) -> bool {
    tag == PROCEDURES_DEF_NO_RETURN || tag == PROCEDURES_DEF_RETURN
}
