//! Comparison utilities (translates `ql/math/comparison.hpp`).

use ql_core::Real;

/// Return `true` if `|a - b| <= epsilon`.
#[inline]
pub fn close(a: Real, b: Real, epsilon: Real) -> bool {
    (a - b).abs() <= epsilon
}

/// Return `true` if `a` and `b` agree to within `n` machine epsilons,
/// relative to the larger magnitude.
#[inline]
pub fn close_enough(a: Real, b: Real, n: u32) -> bool {
    if a == b {
        return true;
    }
    let eps = a.abs().max(b.abs()) * f64::EPSILON * n as Real;
    (a - b).abs() <= eps
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn close_absolute() {
        assert!(close(0.3, 0.3 + 5e-11, 1e-10));
        assert!(!close(0.3, 0.3 + 5e-10, 1e-10));
    }

    #[test]
    fn close_enough_relative() {
        assert!(close_enough(0.1125, 0.1125, 1));
        assert!(close_enough(1e6, 1e6 * (1.0 + 3.0 * f64::EPSILON), 4));
        assert!(!close_enough(1e6, 1e6 * (1.0 + 1e-12), 4));
    }
}
