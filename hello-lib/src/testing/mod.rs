//! Assertions for downstream test suites.

use crate::greeting::hello_world;

/// The exact greeting every caller must observe
pub const EXPECTED_GREETING: &str = "Hello, World!";

/// Panic unless `actual` is byte-for-byte the expected greeting.
pub fn assert_greeting(actual: &str) {
    assert!(
        actual == EXPECTED_GREETING,
        "expected greeting {EXPECTED_GREETING:?}, got {actual:?}"
    );
}

/// Call `hello_world` `n` times and panic if any call differs from the
/// expected greeting. Does nothing when `n` is zero.
pub fn assert_idempotent(n: usize) {
    if n == 0 {
        return;
    }
    let first = hello_world();
    assert_greeting(first);
    for i in 1..n {
        let next = hello_world();
        assert!(next == first, "call {i} returned {next:?}, first call returned {first:?}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assert_greeting_accepts_expected() {
        assert_greeting("Hello, World!");
    }

    #[test]
    #[should_panic(expected = "expected greeting")]
    fn test_assert_greeting_rejects_lowercase() {
        assert_greeting("hello, world!");
    }

    #[test]
    #[should_panic(expected = "expected greeting")]
    fn test_assert_greeting_rejects_missing_punctuation() {
        assert_greeting("Hello World");
    }

    #[test]
    fn test_assert_idempotent_zero_calls() {
        assert_idempotent(0);
    }

    #[test]
    fn test_assert_idempotent() {
        assert_idempotent(1);
        assert_idempotent(1000);
    }
}
