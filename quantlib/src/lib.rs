//! # quantlib
//!
//! Façade that re-exports the public items of the underlying workspace
//! crates. Application code should depend on this crate rather than the
//! individual `ql-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use quantlib::termstructures::Abcd;
//!
//! let abcd = Abcd::new(0.2, 0.4, 1.0, 0.1).unwrap();
//! assert!((abcd.maximum_location() - 0.5).abs() < 1e-15);
//!
//! // Average volatility of the forward fixing at T = 3 over [0, 2].
//! let vol = abcd.volatility(0.0, 2.0, 3.0).unwrap();
//! assert!(vol > abcd.long_term_volatility());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use ql_core as core;

/// Parameter contracts, integration, and comparison utilities.
pub use ql_math as math;

/// Volatility term structures.
pub use ql_termstructures as termstructures;

#[cfg(test)]
mod tests {
    use crate::math::{GaussKronrodAdaptive, Integrator};
    use crate::termstructures::{Abcd, AbcdSquared};
    use approx::assert_relative_eq;
    use std::sync::Arc;

    #[test]
    fn facade_wires_curve_to_integrator() {
        let abcd = Arc::new(Abcd::new(0.1, 0.6, 1.5, 0.12).unwrap());
        let sq = AbcdSquared::from_shared(Arc::clone(&abcd), 4.0, 6.0);
        let numeric = GaussKronrodAdaptive::new(1e-12, 1_000_000)
            .integrate(sq.as_fn(), 0.0, 4.0)
            .unwrap();
        let closed = abcd.covariance(0.0, 4.0, 4.0, 6.0).unwrap();
        assert_relative_eq!(closed, numeric, max_relative = 1e-8);
    }

    #[test]
    fn facade_surfaces_errors() {
        assert!(matches!(
            Abcd::new(0.1, 0.1, 1.0, -1.0),
            Err(ql_core::Error::InvalidParameters(_))
        ));
    }
}
