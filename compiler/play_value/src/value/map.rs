//! Shared map storage with insertion-order key tracking.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use play_stack::ensure_sufficient_stack;
use rustc_hash::FxHashMap;

use super::{release_nested, StorageId, Value};
use crate::errors::{cyclic_container, unhashable_key, EvalError};

/// Hashable projection of a scalar value.
///
/// Numbers hash by their bit pattern with `-0.0` folded into `0.0`, so `0`
/// and `-0` address the same entry. `NaN` keys are distinct by payload.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum MapKey {
    Null,
    Bool(bool),
    Number(u64),
    Str(Arc<str>),
}

impl MapKey {
    /// Project a value to a key. Lists and maps cannot be keys.
    pub fn from_value(value: &Value) -> Result<Self, EvalError> {
        match value {
            Value::Null => Ok(MapKey::Null),
            Value::Bool(b) => Ok(MapKey::Bool(*b)),
            Value::Number(n) => {
                let n = if *n == 0.0 { 0.0 } else { *n };
                Ok(MapKey::Number(n.to_bits()))
            }
            Value::Str(s) => Ok(MapKey::Str(s.clone())),
            Value::List(_) | Value::Map(_) => Err(unhashable_key(value.type_name())),
        }
    }

    /// The value this key was projected from.
    pub fn to_value(&self) -> Value {
        match self {
            MapKey::Null => Value::Null,
            MapKey::Bool(b) => Value::Bool(*b),
            MapKey::Number(bits) => Value::Number(f64::from_bits(*bits)),
            MapKey::Str(s) => Value::Str(s.clone()),
        }
    }
}

#[derive(Default)]
struct MapStore {
    entries: FxHashMap<MapKey, Value>,
    /// Keys in first-insertion order.
    order: Vec<MapKey>,
    /// Iteration position. Carried with the storage, never advanced.
    cursor: usize,
}

/// Handle to a shared, mutable key/value association.
///
/// Clones alias the same storage.
#[derive(Clone, Default)]
pub struct MapValue(Arc<RwLock<MapStore>>);

impl MapValue {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.read().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.read().entries.is_empty()
    }

    /// Value under `key`, if present.
    pub fn lookup(&self, key: &MapKey) -> Option<Value> {
        self.0.read().entries.get(key).cloned()
    }

    /// Value under `key`; `Null` when absent.
    pub fn get(&self, key: &Value) -> Result<Value, EvalError> {
        let key = MapKey::from_value(key)?;
        Ok(self.lookup(&key).unwrap_or_default())
    }

    pub fn contains_key(&self, key: &Value) -> Result<bool, EvalError> {
        let key = MapKey::from_value(key)?;
        Ok(self.0.read().entries.contains_key(&key))
    }

    /// Insert or replace. A new key is appended to the order list.
    ///
    /// Fails without modifying the map if `value` is, or contains, this map.
    pub fn put(&self, key: &Value, value: Value) -> Result<(), EvalError> {
        let key = MapKey::from_value(key)?;
        if value.reaches(self.storage_id()) {
            return Err(cyclic_container("map"));
        }
        let mut store = self.0.write();
        if store.entries.insert(key.clone(), value).is_none() {
            store.order.push(key);
        }
        Ok(())
    }

    /// Remove `key`, returning its value. The key leaves the order list too.
    pub fn remove(&self, key: &Value) -> Result<Option<Value>, EvalError> {
        let key = MapKey::from_value(key)?;
        let mut store = self.0.write();
        let removed = store.entries.remove(&key);
        if removed.is_some() {
            store.order.retain(|k| *k != key);
        }
        Ok(removed)
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> Vec<Value> {
        self.0.read().order.iter().map(MapKey::to_value).collect()
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> Vec<(MapKey, Value)> {
        let store = self.0.read();
        store
            .order
            .iter()
            .filter_map(|k| store.entries.get(k).map(|v| (k.clone(), v.clone())))
            .collect()
    }

    /// Current iteration position.
    pub fn cursor(&self) -> usize {
        self.0.read().cursor
    }

    /// Whether both handles share one storage.
    pub fn ptr_eq(&self, other: &MapValue) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    pub(super) fn storage_id(&self) -> StorageId {
        StorageId(Arc::as_ptr(&self.0).cast::<()>() as usize)
    }

    /// Move the values into `out` if this is the last handle to the storage.
    pub(super) fn take_unique(&mut self, out: &mut Vec<Value>) {
        if let Some(store) = Arc::get_mut(&mut self.0) {
            let store = store.get_mut();
            out.extend(store.entries.drain().map(|(_, value)| value));
            store.order.clear();
        }
    }
}

impl Drop for MapValue {
    fn drop(&mut self) {
        let mut children = Vec::new();
        self.take_unique(&mut children);
        if !children.is_empty() {
            release_nested(children);
        }
    }
}

impl fmt::Debug for MapValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| {
            f.debug_map()
                .entries(self.entries().into_iter().map(|(k, v)| (k.to_value(), v)))
                .finish()
        })
    }
}
