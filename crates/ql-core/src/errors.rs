//! Error types for quantlib-rs.
//!
//! A single `thiserror`-derived enum covers every failure the workspace can
//! report.  `QL_REQUIRE` maps to the [`ensure!`](crate::ensure) macro; the
//! volatility-curve preconditions have dedicated variants so callers can
//! match on them.

use thiserror::Error;

use crate::Time;

/// The top-level error type used throughout quantlib-rs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Numerical routine failure (maps to `QL_FAIL`).
    #[error("{0}")]
    Runtime(String),

    /// Precondition violated (maps to `QL_REQUIRE`).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// A parameter set was rejected by its validation predicate.
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// Integration bounds supplied in reverse order.
    #[error("integration bounds ({start}, {end}) are in reverse order")]
    InvalidInterval {
        /// Lower bound as supplied by the caller.
        start: Time,
        /// Upper bound as supplied by the caller.
        end: Time,
    },
}

/// Shorthand `Result` type used throughout quantlib-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Equivalent to C++ `QL_REQUIRE(condition, message)`.
///
/// Returns `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use ql_core::{ensure, errors::Error};
/// fn positive(x: f64) -> ql_core::errors::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(matches!(positive(-1.0), Err(Error::Precondition(_))));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Returns `Err(Error::InvalidInterval { .. })` unless `start <= end`.
///
/// # Example
/// ```
/// use ql_core::{ensure_ordered, errors::Error};
/// fn width(a: f64, b: f64) -> ql_core::errors::Result<f64> {
///     ensure_ordered!(a, b);
///     Ok(b - a)
/// }
/// assert_eq!(width(1.0, 3.0), Ok(2.0));
/// assert_eq!(width(3.0, 1.0), Err(Error::InvalidInterval { start: 3.0, end: 1.0 }));
/// ```
#[macro_export]
macro_rules! ensure_ordered {
    ($start:expr, $end:expr) => {{
        let (start, end) = ($start, $end);
        if !(start <= end) {
            return Err($crate::errors::Error::InvalidInterval { start, end });
        }
    }};
}
