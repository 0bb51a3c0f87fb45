//! Stack growth for recursive descent.
//!
//! The parser recurses once per nested operand, so a long chain like
//! `- - - - x` or deeply parenthesized input can outrun the thread stack
//! long before the frame depth limit is reached. Recursive entry points
//! wrap their bodies in [`ensure_sufficient_stack`].

/// Grow when less than this much stack remains.
const RED_ZONE: usize = 100 * 1024;

/// Size of each freshly allocated stack segment.
const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, first moving onto a new stack segment if the current one is
/// nearly exhausted.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nesting(depth: u32) -> u32 {
        ensure_sufficient_stack(|| if depth == 0 { 0 } else { nesting(depth - 1) + 1 })
    }

    #[test]
    fn passes_through_the_result() {
        let result: Result<u8, &str> = ensure_sufficient_stack(|| Err("bad"));
        assert_eq!(result, Err("bad"));
    }

    #[test]
    fn survives_deep_recursion() {
        assert_eq!(nesting(200_000), 200_000);
    }
}
