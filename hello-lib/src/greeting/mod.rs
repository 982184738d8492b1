/// The greeting returned by [`hello_world`]
pub const HELLO_WORLD: &str = "Hello, World!";

/// Return the constant greeting `"Hello, World!"`.
///
/// Pure and idempotent: safe to call from any thread, any number of times.
#[must_use]
pub fn hello_world() -> &'static str {
    HELLO_WORLD
}
