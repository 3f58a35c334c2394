//! Fibonacci number computation used by the `fibcalc` binary.

use log::debug;

/// Returns the `n`-th Fibonacci number, computed by naive recursion.
///
/// The base rule returns any `n <= 1` unchanged, which covers `fib(0) = 0`
/// and `fib(1) = 1` and also means negative inputs pass through rather than
/// being rejected. The result is exact as long as it fits in an `i64`,
/// i.e. up to `fib(92)`.
pub fn fib(n: i32) -> i64 {
    if n <= 1 {
        return i64::from(n);
    }
    fib(n - 1) + fib(n - 2)
}

/// Yields `(i, fib(i))` for every index `i` in `0..=last`, ascending.
pub fn sequence(last: i32) -> impl Iterator<Item = (i32, i64)> {
    debug!("computing fib(0) through fib({last})");
    (0..=last).map(|i| (i, fib(i)))
}
