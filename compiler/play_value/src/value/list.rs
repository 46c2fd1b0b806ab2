//! Shared list storage.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use play_stack::ensure_sufficient_stack;

use super::{release_nested, StorageId, Value};
use crate::errors::{cyclic_container, EvalError};

/// Handle to a shared, mutable sequence of values.
///
/// Clones alias the same storage. Every operation takes the lock for its own
/// duration only; callers never hold a guard across evaluation.
#[derive(Clone, Default)]
pub struct ListValue(Arc<RwLock<Vec<Value>>>);

impl ListValue {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_vec(items: Vec<Value>) -> Self {
        ListValue(Arc::new(RwLock::new(items)))
    }

    pub fn len(&self) -> usize {
        self.0.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.read().is_empty()
    }

    /// Element at `index`, if in bounds.
    pub fn get(&self, index: usize) -> Option<Value> {
        self.0.read().get(index).cloned()
    }

    /// Linear scan for an element equal to `needle`.
    pub fn contains(&self, needle: &Value) -> bool {
        self.snapshot().iter().any(|v| v.equals(needle))
    }

    /// Append to the end.
    ///
    /// Fails without modifying the list if `value` is, or contains, this list.
    pub fn push(&self, value: Value) -> Result<(), EvalError> {
        self.check_insert(&value)?;
        self.0.write().push(value);
        Ok(())
    }

    /// Remove and return the last element; `Null` when empty.
    pub fn pop(&self) -> Value {
        self.0.write().pop().unwrap_or_default()
    }

    /// Remove and return the first element; `Null` when empty.
    pub fn shift(&self) -> Value {
        let mut items = self.0.write();
        if items.is_empty() {
            Value::Null
        } else {
            items.remove(0)
        }
    }

    /// Insert at the front. Same cycle rule as [`push`](Self::push).
    pub fn unshift(&self, value: Value) -> Result<(), EvalError> {
        self.check_insert(&value)?;
        self.0.write().insert(0, value);
        Ok(())
    }

    fn check_insert(&self, value: &Value) -> Result<(), EvalError> {
        if value.reaches(self.storage_id()) {
            return Err(cyclic_container("list"));
        }
        Ok(())
    }

    /// Remove the element at `index` by moving the last element into its
    /// place. Does not preserve order.
    pub fn swap_remove(&self, index: usize) -> Option<Value> {
        let mut items = self.0.write();
        (index < items.len()).then(|| items.swap_remove(index))
    }

    /// Whether both handles share one storage.
    pub fn ptr_eq(&self, other: &ListValue) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Copy of the current elements. Element handles still alias.
    pub fn snapshot(&self) -> Vec<Value> {
        self.0.read().clone()
    }

    pub(super) fn storage_id(&self) -> StorageId {
        StorageId(Arc::as_ptr(&self.0).cast::<()>() as usize)
    }

    /// Move the elements into `out` if this is the last handle to the storage.
    pub(super) fn take_unique(&mut self, out: &mut Vec<Value>) {
        if let Some(items) = Arc::get_mut(&mut self.0) {
            out.append(items.get_mut());
        }
    }
}

impl Drop for ListValue {
    fn drop(&mut self) {
        let mut children = Vec::new();
        self.take_unique(&mut children);
        if !children.is_empty() {
            release_nested(children);
        }
    }
}

impl fmt::Debug for ListValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| f.debug_list().entries(self.snapshot().iter()).finish())
    }
}
