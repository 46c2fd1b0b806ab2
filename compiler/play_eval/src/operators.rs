//! Binary operator implementations for the built-in handlers.
//!
//! Operators arrive as the `OP` field text of a block and are parsed into an
//! enum before the operands are combined, so an unknown operator is reported
//! the same way whatever the operand values are. Dispatch is a plain `match`.

use play_value::{unknown_operator, EvalError, Value};

/// `math_arithmetic` operators. Operands are always numbers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArithOp {
    Add,
    Minus,
    Multiply,
    Divide,
    Power,
}

impl ArithOp {
    /// Parse the `OP` field, accepting both the long and the short names.
    pub fn from_field(op: &str) -> Result<Self, EvalError> {
        match op {
            "ADD" => Ok(ArithOp::Add),
            "MINUS" | "MIN" => Ok(ArithOp::Minus),
            "MULTIPLY" | "MUL" => Ok(ArithOp::Multiply),
            "DIVIDE" | "DIV" => Ok(ArithOp::Divide),
            "POWER" | "POW" => Ok(ArithOp::Power),
            other => Err(unknown_operator("MathArithmetic", other)),
        }
    }
}

/// IEEE-754 arithmetic: division by zero yields an infinity or NaN.
#[inline]
pub fn evaluate_arithmetic(a: f64, b: f64, op: ArithOp) -> f64 {
    match op {
        ArithOp::Add => a + b,
        ArithOp::Minus => a - b,
        ArithOp::Multiply => a * b,
        ArithOp::Divide => a / b,
        ArithOp::Power => a.powf(b),
    }
}

/// `logic_compare` operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompareOp {
    Eq,
    Neq,
    Lt,
    Lte,
    Gt,
    Gte,
}

impl CompareOp {
    pub fn from_field(op: &str) -> Result<Self, EvalError> {
        match op {
            "EQ" => Ok(CompareOp::Eq),
            "NEQ" => Ok(CompareOp::Neq),
            "LT" => Ok(CompareOp::Lt),
            "LTE" => Ok(CompareOp::Lte),
            "GT" => Ok(CompareOp::Gt),
            "GTE" => Ok(CompareOp::Gte),
            other => Err(unknown_operator("Bool", other)),
        }
    }
}

/// Compare two values with the value capabilities.
///
/// Everything derives from `equals` and `less_than` of the left operand, so
/// the asymmetries of `less_than` carry through: `GT` is `!(a < b) && a != b`
/// and `GTE` is `!(a < b)`, never `b < a`.
pub fn evaluate_compare(a: &Value, b: &Value, op: CompareOp) -> Result<bool, EvalError> {
    Ok(match op {
        CompareOp::Eq => a.equals(b),
        CompareOp::Neq => !a.equals(b),
        CompareOp::Lt => a.less_than(b)?,
        CompareOp::Lte => a.less_than(b)? || a.equals(b),
        CompareOp::Gt => !a.less_than(b)? && !a.equals(b),
        CompareOp::Gte => !a.less_than(b)?,
    })
}

/// `logic_operation` operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogicOp {
    And,
    Or,
    Xor,
}

impl LogicOp {
    pub fn from_field(op: &str) -> Result<Self, EvalError> {
        match op {
            "AND" => Ok(LogicOp::And),
            "OR" => Ok(LogicOp::Or),
            "XOR" => Ok(LogicOp::Xor),
            other => Err(unknown_operator("Bool", other)),
        }
    }
}

/// Both operands are already evaluated; there is no short-circuiting.
#[inline]
pub fn evaluate_logic(a: bool, b: bool, op: LogicOp) -> bool {
    match op {
        LogicOp::And => a && b,
        LogicOp::Or => a || b,
        LogicOp::Xor => a ^ b,
    }
}
