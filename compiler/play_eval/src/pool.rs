//! Recycling of execution environments across invocations.
//!
//! The free list is a bounded lock-free queue, so concurrent request threads
//! can acquire and release without contending on a mutex. When the queue is
//! empty a new environment is allocated; when it is full a released
//! environment is simply dropped.
//!
//! ```text
//! let mut env = pool.acquire();     // pristine environment
//! env.bind(module, conn, cntx);
//! ...                               // evaluate
//! // dropped here: reset, then pushed back onto the free list
//! ```

use std::ops::{Deref, DerefMut};
use std::sync::atomic::{AtomicUsize, Ordering};

use crossbeam::queue::ArrayQueue;

use crate::environment::Environment;

/// Bounded pool of reusable [`Environment`]s.
pub struct EnvironmentPool {
    free: ArrayQueue<Environment>,
    /// Environments allocated because the free list was empty.
    allocated: AtomicUsize,
}

impl EnvironmentPool {
    /// Create a pool that keeps at most `capacity` idle environments.
    ///
    /// A capacity of zero still keeps one.
    pub fn new(capacity: usize) -> Self {
        EnvironmentPool {
            free: ArrayQueue::new(capacity.max(1)),
            allocated: AtomicUsize::new(0),
        }
    }

    /// Take a pristine environment, allocating if none is idle.
    ///
    /// The returned guard puts the environment back on drop, on every exit
    /// path including unwinding.
    pub fn acquire(&self) -> PooledEnvironment<'_> {
        let env = self.free.pop().unwrap_or_else(|| {
            self.allocated.fetch_add(1, Ordering::Relaxed);
            tracing::trace!("environment pool empty, allocating");
            Environment::new()
        });
        debug_assert!(env.is_pristine(), "pooled environment was not reset");
        tracing::trace!(idle = self.free.len(), "environment acquired");
        PooledEnvironment { env, pool: self }
    }

    fn release(&self, mut env: Environment) {
        env.reset();
        if self.free.push(env).is_err() {
            tracing::trace!("environment pool full, dropping environment");
        } else {
            tracing::trace!(idle = self.free.len(), "environment released");
        }
    }

    /// Number of idle environments.
    pub fn idle(&self) -> usize {
        self.free.len()
    }

    /// Maximum number of idle environments kept.
    pub fn capacity(&self) -> usize {
        self.free.capacity()
    }

    /// Total environments ever allocated by this pool.
    pub fn allocated(&self) -> usize {
        self.allocated.load(Ordering::Relaxed)
    }
}

impl Default for EnvironmentPool {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_POOL_CAPACITY)
    }
}

/// An environment on loan from an [`EnvironmentPool`].
///
/// Derefs to [`Environment`]. Dropping the guard resets the environment and
/// returns it to the pool.
pub struct PooledEnvironment<'p> {
    env: Environment,
    pool: &'p EnvironmentPool,
}

impl Deref for PooledEnvironment<'_> {
    type Target = Environment;

    fn deref(&self) -> &Environment {
        &self.env
    }
}

impl DerefMut for PooledEnvironment<'_> {
    fn deref_mut(&mut self) -> &mut Environment {
        &mut self.env
    }
}

impl Drop for PooledEnvironment<'_> {
    fn drop(&mut self) {
        self.pool.release(std::mem::take(&mut self.env));
    }
}
