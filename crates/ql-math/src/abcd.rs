//! Parameter validation for the abcd functional form
//! (translates `validateAbcdParameters` from `ql/math/abcdmathfunction.hpp`).
//!
//! The abcd family is `f(u) = (a + b·u)·exp(−c·u) + d`.  Any consumer that
//! builds a curve from a quadruple must run it through
//! [`validate_abcd_parameters`] first.

use ql_core::{
    errors::{Error, Result},
    Real,
};

/// Check that `(a, b, c, d)` describes a well-behaved abcd function.
///
/// * all four parameters are finite;
/// * `a + d ≥ 0`, so the short-term value `f(0)` is non-negative;
/// * `c > 0`, so the exponential decays and the closed-form integrals,
///   which divide by `c³`, are defined;
/// * `d ≥ 0`, so the long-term value is non-negative.
///
/// `b` is unconstrained beyond finiteness: a negative `b` gives a
/// monotonically decaying hump-less curve.
pub fn validate_abcd_parameters(a: Real, b: Real, c: Real, d: Real) -> Result<()> {
    let result = check(a, b, c, d);
    if let Err(e) = &result {
        log::debug!("rejected abcd parameters ({a}, {b}, {c}, {d}): {e}");
    }
    result
}

fn check(a: Real, b: Real, c: Real, d: Real) -> Result<()> {
    if !(a.is_finite() && b.is_finite() && c.is_finite() && d.is_finite()) {
        return Err(Error::InvalidParameters(format!(
            "a ({a}), b ({b}), c ({c}), d ({d}) must all be finite"
        )));
    }
    if a + d < 0.0 {
        return Err(Error::InvalidParameters(format!(
            "a+d ({a}, {d}) must be non negative"
        )));
    }
    if c <= 0.0 {
        return Err(Error::InvalidParameters(format!("c ({c}) must be positive")));
    }
    if d < 0.0 {
        return Err(Error::InvalidParameters(format!(
            "d ({d}) must be non negative"
        )));
    }
    Ok(())
}
