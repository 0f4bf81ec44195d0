//! Stack safety for the recursive-descent parser and the tree walker.
//!
//! Both stages recurse once per nesting level of the source program, so a
//! long chain like `((((1))))` or deeply nested blocks can exhaust the
//! native stack. Wrapping the recursive entry points in
//! [`ensure_sufficient_stack`] grows the stack on demand instead.

/// Remaining stack below which we grow (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each new stack segment (2MB).
const GROW_BY: usize = 2 * 1024 * 1024;

/// Run `f`, growing the stack first if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, GROW_BY, f)
}

/// WASM manages its own stack; call straight through.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
