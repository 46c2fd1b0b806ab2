//! Stack growth for deep recursion.
//!
//! Both the interpreter (nested blocks, recursive script functions) and the
//! value system (nested lists and maps) recurse to a depth chosen by the
//! script. Wrapping those recursions in [`ensure_sufficient_stack`] grows the
//! native stack on demand instead of overflowing it.
//!
//! - **Native targets**: `stacker::maybe_grow`
//! - **WASM targets**: passthrough

/// Headroom that must remain before `f` runs (128 KiB).
#[cfg(not(target_arch = "wasm32"))]
const RED_ZONE: usize = 128 * 1024;

/// Size of each new stack segment (2 MiB).
#[cfg(not(target_arch = "wasm32"))]
const GROW_BY: usize = 2 * 1024 * 1024;

/// Run `f`, first moving to a fresh stack segment if less than [`RED_ZONE`]
/// bytes remain.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, GROW_BY, f)
}

/// WASM manages its own stack; run `f` directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deep_recursion_grows_the_stack() {
        fn depth(n: u64) -> u64 {
            ensure_sufficient_stack(|| if n == 0 { 0 } else { depth(n - 1) + 1 })
        }

        assert_eq!(depth(200_000), 200_000);
    }

    #[test]
    fn passes_results_through() {
        let result: Result<i32, &str> = ensure_sufficient_stack(|| Ok(7));
        assert_eq!(result, Ok(7));
    }
}
