//! # ql-math
//!
//! Mathematical utilities: the abcd parameter contract, numerical
//! integration, and floating-point comparison.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Validation of abcd function parameters.
pub mod abcd;

/// Floating-point comparison utilities.
pub mod comparison;

/// Numerical integration rules.
pub mod integrals;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use abcd::validate_abcd_parameters;
pub use comparison::{close, close_enough};
pub use integrals::{GaussKronrodAdaptive, Integrator, SimpsonIntegral};
