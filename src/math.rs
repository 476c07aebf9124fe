//! Symmetric base-10 logarithm used by log-mode axes.
//!
//! `symlog(v) = sign(v) * log10(|v| + 1)` is defined for every finite value,
//! is odd, and passes through the origin, so a log axis can cover negative,
//! zero and positive data without a gap at zero.

/// -1, 0 or 1. Unlike [`f64::signum`], zero (of either sign) maps to 0.
fn sign(n: f64) -> f64 {
    if n > 0.0 {
        1.0
    } else if n < 0.0 {
        -1.0
    } else {
        0.0
    }
}

pub fn symlog(n: f64) -> f64 {
    sign(n) * (n.abs() + 1.0).log10()
}

/// Inverse of [`symlog`].
pub fn antisymlog(n: f64) -> f64 {
    sign(n) * (10f64.powf(n.abs()) - 1.0)
}
