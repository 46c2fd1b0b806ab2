//! RAII guard for function-argument bindings.
//!
//! Play scopes dynamically: a call writes its arguments straight into the
//! shared variable table and undoes exactly those writes when it returns.
//! [`ScopedArguments`] records what each argument displaced and restores it
//! on drop, so the undo also happens when a signal, an error or a panic
//! leaves the call early.
//!
//! ```text
//! let mut scoped = interpreter.bind_arguments(args);   // a, b written
//! scoped.visit(body)?;                                 // may touch any variable
//! // dropped: a, b restored or removed; other writes are kept
//! ```

use std::ops::{Deref, DerefMut};

use play_value::Value;
use smallvec::SmallVec;

use super::Interpreter;

/// Argument names and the values they displaced (`None` = was unbound).
type Displaced = SmallVec<[(String, Option<Value>); 4]>;

/// Interpreter access with argument bindings that are undone on drop.
///
/// Derefs to [`Interpreter`].
pub struct ScopedArguments<'guard, 'interp> {
    interpreter: &'guard mut Interpreter<'interp>,
    displaced: Displaced,
}

impl Drop for ScopedArguments<'_, '_> {
    fn drop(&mut self) {
        // Reverse order, so a parameter name bound twice ends at its oldest value.
        for (name, previous) in self.displaced.drain(..).rev() {
            match previous {
                Some(value) => {
                    self.interpreter.env.set(name, value);
                }
                None => {
                    self.interpreter.env.remove(&name);
                }
            }
        }
    }
}

impl<'interp> Deref for ScopedArguments<'_, 'interp> {
    type Target = Interpreter<'interp>;

    fn deref(&self) -> &Self::Target {
        self.interpreter
    }
}

impl DerefMut for ScopedArguments<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.interpreter
    }
}

impl<'a> Interpreter<'a> {
    /// Write `args` into the variable table, returning a guard that restores
    /// every displaced binding when dropped.
    ///
    /// Only the argument names are restored. Anything else the callee writes
    /// stays visible to the caller.
    pub fn bind_arguments<I>(&mut self, args: I) -> ScopedArguments<'_, 'a>
    where
        I: IntoIterator<Item = (String, Value)>,
    {
        let mut displaced = Displaced::new();
        for (name, value) in args {
            let previous = self.env.set(name.clone(), value);
            displaced.push((name, previous));
        }
        ScopedArguments {
            interpreter: self,
            displaced,
        }
    }
}
