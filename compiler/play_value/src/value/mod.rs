//! Runtime values for the Play interpreter.
//!
//! # Variants and capabilities
//!
//! `Value` is a closed set of six variants. Every variant answers the same
//! capability set (`to_text`, `to_float`, `to_int`, `to_boolean`, `to_list`,
//! `to_map`, `equals`, `less_than`); a conversion the variant has no
//! representation for fails with a `TypeAssertion` error, which handlers
//! propagate with `?`.
//!
//! # Aliasing
//!
//! `Str` is immutable and shared through `Arc<str>`. `List` and `Map` are
//! handles to shared mutable storage: cloning a `Value::List` aliases the
//! same backing vector, so assignment is by reference.
//!
//! ```text
//! let a = Value::list(vec![]);
//! let b = a.clone();
//! b.to_list()?.push(Value::Number(1.0))?;  // visible through `a`
//! ```
//!
//! # Acyclic storage
//!
//! Container storage is reference counted, so a list that held itself would
//! never be freed and every recursive capability would loop forever on it.
//! `push`, `unshift` and `put` therefore refuse a value from which the
//! target container is reachable. Nesting depth is otherwise unbounded:
//! recursive capabilities run under `ensure_sufficient_stack`, and dropping
//! the last handle to a deep tree tears it down iteratively.

mod list;
mod map;

use std::fmt;
use std::sync::Arc;

use play_stack::ensure_sufficient_stack;
use rustc_hash::FxHashSet;

pub use list::ListValue;
pub use map::{MapKey, MapValue};

use crate::errors::{coercion_failure, type_assertion, EvalError};

/// Address of a container's backing storage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct StorageId(usize);

/// Runtime value in the Play interpreter.
#[derive(Clone, Debug, Default)]
pub enum Value {
    /// Absence of a value; every conversion fails.
    #[default]
    Null,
    Bool(bool),
    /// All numbers are double precision.
    Number(f64),
    Str(Arc<str>),
    /// Shared, mutable sequence.
    List(ListValue),
    /// Shared, mutable association with insertion-order key tracking.
    Map(MapValue),
}

impl Value {
    // Factories

    /// Create a string value.
    #[inline]
    pub fn string(s: impl Into<Arc<str>>) -> Self {
        Value::Str(s.into())
    }

    /// Create a list value with fresh storage.
    pub fn list(items: Vec<Value>) -> Self {
        Value::List(ListValue::from_vec(items))
    }

    /// Create an empty map value with fresh storage.
    pub fn map() -> Self {
        Value::Map(MapValue::new())
    }

    /// Lowercase variant name used in assertion messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::Str(_) => "string",
            Value::List(_) => "list",
            Value::Map(_) => "map",
        }
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Borrow the string payload without conversion.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    #[cold]
    fn no_representation(&self, target: &'static str) -> EvalError {
        type_assertion(self.type_name(), target)
    }

    // Conversions

    /// String form of the value.
    ///
    /// Lists join the string forms of their elements with `,`; any element
    /// without a string form fails the whole conversion.
    pub fn to_text(&self) -> Result<String, EvalError> {
        match self {
            Value::Bool(b) => Ok(if *b { "true" } else { "false" }.to_string()),
            Value::Number(n) => Ok(format_number(*n)),
            Value::Str(s) => Ok(s.to_string()),
            Value::List(list) => ensure_sufficient_stack(|| -> Result<String, EvalError> {
                let parts = list
                    .snapshot()
                    .iter()
                    .map(Value::to_text)
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(parts.join(","))
            }),
            Value::Null | Value::Map(_) => Err(self.no_representation("string")),
        }
    }

    /// Numeric form of the value. Strings are parsed verbatim (no trimming).
    pub fn to_float(&self) -> Result<f64, EvalError> {
        match self {
            Value::Number(n) => Ok(*n),
            Value::Str(s) => s.parse().map_err(|_| coercion_failure(s, "number")),
            _ => Err(self.no_representation("number")),
        }
    }

    /// Integer form of the value. Numbers truncate toward zero; strings must
    /// be integer literals.
    pub fn to_int(&self) -> Result<i64, EvalError> {
        match self {
            Value::Number(n) => Ok(n.trunc() as i64),
            Value::Str(s) => s.parse().map_err(|_| coercion_failure(s, "integer")),
            _ => Err(self.no_representation("integer")),
        }
    }

    /// Truth value: nonzero numbers and non-empty strings are true.
    pub fn to_boolean(&self) -> Result<bool, EvalError> {
        match self {
            Value::Bool(b) => Ok(*b),
            Value::Number(n) => Ok(*n != 0.0),
            Value::Str(s) => Ok(!s.is_empty()),
            _ => Err(self.no_representation("boolean")),
        }
    }

    /// The list handle; only a list converts to a list.
    pub fn to_list(&self) -> Result<ListValue, EvalError> {
        match self {
            Value::List(list) => Ok(list.clone()),
            _ => Err(self.no_representation("list")),
        }
    }

    /// The map handle; only a map converts to a map.
    pub fn to_map(&self) -> Result<MapValue, EvalError> {
        match self {
            Value::Map(map) => Ok(map.clone()),
            _ => Err(self.no_representation("map")),
        }
    }

    // Comparison

    /// Structural equality. Values of different variants are never equal.
    ///
    /// Lists compare element-wise in order; maps compare by key set and the
    /// value under each key, ignoring insertion order.
    pub fn equals(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::List(a), Value::List(b)) => {
                if a.ptr_eq(b) {
                    return true;
                }
                let (a, b) = (a.snapshot(), b.snapshot());
                a.len() == b.len()
                    && ensure_sufficient_stack(|| {
                        a.iter().zip(b.iter()).all(|(x, y)| x.equals(y))
                    })
            }
            (Value::Map(a), Value::Map(b)) => {
                if a.ptr_eq(b) {
                    return true;
                }
                if a.len() != b.len() {
                    return false;
                }
                ensure_sufficient_stack(|| {
                    a.entries().iter().all(|(key, value)| {
                        b.lookup(key).is_some_and(|other| value.equals(&other))
                    })
                })
            }
            _ => false,
        }
    }

    /// Ordering test used by `LT`, `LTE`, `GT` and `GTE`.
    ///
    /// The left operand decides the rule and the right operand is coerced to
    /// match it:
    /// - number: numeric `<` against `other.to_float()`
    /// - string: lexicographic `<` against `other.to_text()`
    /// - boolean: `true` is less than nothing; `false` is less than any
    ///   truthy value
    /// - null, list, map: "not equal"
    ///
    /// This is not a total order: `Null < x` and `x < Null` can both hold.
    pub fn less_than(&self, other: &Value) -> Result<bool, EvalError> {
        match self {
            Value::Number(n) => Ok(*n < other.to_float()?),
            Value::Str(s) => Ok(s.as_ref() < other.to_text()?.as_str()),
            Value::Bool(true) => Ok(false),
            Value::Bool(false) => other.to_boolean(),
            Value::Null | Value::List(_) | Value::Map(_) => Ok(!self.equals(other)),
        }
    }

    // Container graph

    fn storage_id(&self) -> Option<StorageId> {
        match self {
            Value::List(list) => Some(list.storage_id()),
            Value::Map(map) => Some(map.storage_id()),
            _ => None,
        }
    }

    /// Whether the storage `target` is this value or nested anywhere in it.
    pub(crate) fn reaches(&self, target: StorageId) -> bool {
        let mut pending = vec![self.clone()];
        let mut seen = FxHashSet::default();
        while let Some(value) = pending.pop() {
            let Some(id) = value.storage_id() else {
                continue;
            };
            if id == target {
                return true;
            }
            if !seen.insert(id) {
                continue;
            }
            match value {
                Value::List(list) => pending.extend(list.snapshot()),
                Value::Map(map) => pending.extend(map.entries().into_iter().map(|(_, v)| v)),
                _ => {}
            }
        }
        false
    }
}

/// Free the storage of `pending` and everything nested in it without
/// recursing. Storage another handle still refers to is left alone.
fn release_nested(mut pending: Vec<Value>) {
    while let Some(value) = pending.pop() {
        match value {
            Value::List(mut list) => list.take_unique(&mut pending),
            Value::Map(mut map) => map.take_unique(&mut pending),
            _ => {}
        }
    }
}

/// Decimal rendering of a number: integral values print without a fraction.
pub(crate) fn format_number(n: f64) -> String {
    if n.is_infinite() {
        return if n > 0.0 { "+Inf" } else { "-Inf" }.to_string();
    }
    format!("{n}")
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::string(s)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => write!(f, "{}", format_number(*n)),
            Value::Str(s) => write!(f, "{s:?}"),
            Value::List(list) => ensure_sufficient_stack(|| -> fmt::Result {
                write!(f, "[")?;
                for (i, item) in list.snapshot().iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }),
            Value::Map(map) => ensure_sufficient_stack(|| -> fmt::Result {
                write!(f, "{{")?;
                for (i, (key, value)) in map.entries().iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {value}", key.to_value())?;
                }
                write!(f, "}}")
            }),
        }
    }
}
