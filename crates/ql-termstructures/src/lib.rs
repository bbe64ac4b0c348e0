//! # ql-termstructures
//!
//! Interest-rate volatility term structures.  Currently the abcd
//! instantaneous forward-rate volatility and its closed-form covariances.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Abcd` — parametric instantaneous volatility `(a + b·u)·e^{−c·u} + d`,
/// plus the `AbcdSquared` unary-function adapter.
pub mod abcd;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use abcd::{Abcd, AbcdParameters, AbcdSquared};
