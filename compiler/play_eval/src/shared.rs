//! Frozen, shareable registries.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// Read-only handle to a registry that was fully built before serving.
///
/// There is no way back to `&mut T`; once wrapped, a registry can only be read.
pub struct Frozen<T>(Arc<T>);

impl<T> Frozen<T> {
    pub fn new(registry: T) -> Self {
        Frozen(Arc::new(registry))
    }
}

impl<T> Clone for Frozen<T> {
    fn clone(&self) -> Self {
        Frozen(Arc::clone(&self.0))
    }
}

impl<T> Deref for Frozen<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: fmt::Debug> fmt::Debug for Frozen<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Frozen({:?})", &*self.0)
    }
}
