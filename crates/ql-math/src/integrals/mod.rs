//! Numerical integration (translates `ql/math/integrals/`).
//!
//! Provides a composite Simpson rule and an adaptive Gauss-Kronrod rule over
//! any `Fn(Real) -> Real`.  Closed-form integrals such as the abcd covariance
//! are checked against these.

use ql_core::{
    ensure,
    errors::{Error, Result},
    Real,
};

/// A numerical integrator.
///
/// Corresponds to the abstract `QuantLib::Integrator` class.
pub trait Integrator {
    /// Integrate `f` on `[a, b]`.
    fn integrate<F: Fn(Real) -> Real>(&self, f: F, a: Real, b: Real) -> Result<Real>;
}

fn budget_exhausted(rule: &str, max_evaluations: usize) -> Error {
    log::warn!("{rule}: evaluation budget of {max_evaluations} exhausted");
    Error::Runtime(format!(
        "{rule}: max evaluations ({max_evaluations}) exceeded"
    ))
}

// ── Simpson ───────────────────────────────────────────────────────────────────

/// Composite Simpson's rule with interval doubling.
///
/// Corresponds to `QuantLib::SimpsonIntegral`.
#[derive(Debug, Clone)]
pub struct SimpsonIntegral {
    absolute_accuracy: Real,
    max_evaluations: usize,
}

impl SimpsonIntegral {
    /// Create a new Simpson integrator.
    pub fn new(absolute_accuracy: Real, max_evaluations: usize) -> Self {
        Self {
            absolute_accuracy,
            max_evaluations,
        }
    }
}

impl Integrator for SimpsonIntegral {
    fn integrate<F: Fn(Real) -> Real>(&self, f: F, a: Real, b: Real) -> Result<Real> {
        ensure!(
            self.absolute_accuracy > 0.0,
            "absolute accuracy ({}) must be positive",
            self.absolute_accuracy
        );
        if a == b {
            return Ok(0.0);
        }

        // Trapezoid sums are refined in place; Simpson is (4·T₂ₙ − Tₙ)/3.
        let mut n = 1usize;
        let mut trapezoid = 0.5 * (b - a) * (f(a) + f(b));
        let mut old_value = trapezoid;
        let mut evals = 2usize;

        loop {
            let h = (b - a) / n as Real;
            let midpoints: Real = (0..n).map(|i| f(a + (i as Real + 0.5) * h)).sum();
            evals += n;
            let refined = 0.5 * (trapezoid + h * midpoints);
            let value = (4.0 * refined - trapezoid) / 3.0;

            if n > 2 && (value - old_value).abs() < self.absolute_accuracy {
                return Ok(value);
            }
            if evals >= self.max_evaluations {
                return Err(budget_exhausted("SimpsonIntegral", self.max_evaluations));
            }
            old_value = value;
            trapezoid = refined;
            n *= 2;
        }
    }
}

// ── Gauss-Kronrod ─────────────────────────────────────────────────────────────

// G3/K7 pair on [-1, 1]; the Kronrod rule reuses the Gauss nodes.
const G3_NODE: Real = 0.774_596_669_241_483_4;
const G3_WEIGHTS: [Real; 2] = [0.888_888_888_888_888_9, 0.555_555_555_555_555_6];
const K7_NODES: [Real; 4] = [
    0.0,
    0.434_243_749_346_802_6,
    G3_NODE,
    0.960_491_268_708_020_3,
];
const G3_INDEX: usize = 2;
const K7_WEIGHTS: [Real; 4] = [
    0.450_916_538_658_474_1,
    0.401_397_414_775_962_2,
    0.268_488_089_868_333_4,
    0.104_656_226_026_467_3,
];

/// Adaptive Gauss-Kronrod integration (3-point Gauss, 7-point Kronrod) with
/// recursive bisection.
///
/// Corresponds to `QuantLib::GaussKronrodAdaptive`.
#[derive(Debug, Clone)]
pub struct GaussKronrodAdaptive {
    absolute_accuracy: Real,
    max_evaluations: usize,
}

impl GaussKronrodAdaptive {
    /// Create a new integrator.
    pub fn new(absolute_accuracy: Real, max_evaluations: usize) -> Self {
        Self {
            absolute_accuracy,
            max_evaluations,
        }
    }

    fn integrate_recursive<F: Fn(Real) -> Real>(
        &self,
        f: &F,
        a: Real,
        b: Real,
        tolerance: Real,
        evals: &mut usize,
    ) -> Result<Real> {
        if *evals >= self.max_evaluations {
            return Err(budget_exhausted(
                "GaussKronrodAdaptive",
                self.max_evaluations,
            ));
        }

        let mid = 0.5 * (a + b);
        let half = 0.5 * (b - a);

        let f0 = f(mid);
        let mut gauss = G3_WEIGHTS[0] * f0;
        let mut kronrod = K7_WEIGHTS[0] * f0;
        for i in 1..K7_NODES.len() {
            let x = K7_NODES[i];
            let pair = f(mid - half * x) + f(mid + half * x);
            kronrod += K7_WEIGHTS[i] * pair;
            if i == G3_INDEX {
                gauss += G3_WEIGHTS[1] * pair;
            }
        }
        gauss *= half;
        kronrod *= half;
        *evals += 7;

        if (kronrod - gauss).abs() < tolerance || half.abs() < 1e-15 {
            return Ok(kronrod);
        }

        let left = self.integrate_recursive(f, a, mid, 0.5 * tolerance, evals)?;
        let right = self.integrate_recursive(f, mid, b, 0.5 * tolerance, evals)?;
        Ok(left + right)
    }
}

impl Integrator for GaussKronrodAdaptive {
    fn integrate<F: Fn(Real) -> Real>(&self, f: F, a: Real, b: Real) -> Result<Real> {
        ensure!(
            self.absolute_accuracy > 0.0,
            "absolute accuracy ({}) must be positive",
            self.absolute_accuracy
        );
        if a == b {
            return Ok(0.0);
        }
        let mut evals = 0;
        self.integrate_recursive(&f, a, b, self.absolute_accuracy, &mut evals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn simpson_cubic_is_exact() {
        let s = SimpsonIntegral::new(1e-12, 1_000);
        // ∫₀² x³ dx = 4
        let result = s.integrate(|x| x * x * x, 0.0, 2.0).unwrap();
        assert_abs_diff_eq!(result, 4.0, epsilon = 1e-12);
    }

    #[test]
    fn simpson_exp() {
        let s = SimpsonIntegral::new(1e-12, 100_000);
        let result = s.integrate(|x| x.exp(), 0.0, 1.0).unwrap();
        assert_abs_diff_eq!(result, std::f64::consts::E - 1.0, epsilon = 1e-11);
    }

    #[test]
    fn gauss_kronrod_sin() {
        let gk = GaussKronrodAdaptive::new(1e-12, 100_000);
        // ∫₀^π sin(x) dx = 2
        let result = gk.integrate(|x| x.sin(), 0.0, std::f64::consts::PI).unwrap();
        assert_abs_diff_eq!(result, 2.0, epsilon = 1e-11);
    }

    #[test]
    fn gauss_kronrod_exact_for_quintic() {
        let gk = GaussKronrodAdaptive::new(1e-10, 100);
        // ∫₋₁¹ (x⁵ + x⁴) dx = 2/5
        let result = gk.integrate(|x| x.powi(5) + x.powi(4), -1.0, 1.0).unwrap();
        assert_abs_diff_eq!(result, 0.4, epsilon = 1e-14);
    }

    #[test]
    fn gauss_kronrod_handles_jump() {
        let gk = GaussKronrodAdaptive::new(1e-12, 100_000);
        let step = |x: Real| if x < 0.3 { 1.0 } else { 0.0 };
        let result = gk.integrate(step, 0.0, 1.0).unwrap();
        assert_abs_diff_eq!(result, 0.3, epsilon = 1e-10);
    }

    #[test]
    fn empty_interval_is_zero() {
        let s = SimpsonIntegral::new(1e-8, 10);
        assert_eq!(s.integrate(|x| x, 1.0, 1.0).unwrap(), 0.0);
        let gk = GaussKronrodAdaptive::new(1e-8, 10);
        assert_eq!(gk.integrate(|x| x, 1.0, 1.0).unwrap(), 0.0);
    }

    #[test]
    fn budget_exhaustion_is_an_error() {
        let s = SimpsonIntegral::new(1e-15, 8);
        assert!(matches!(
            s.integrate(|x| x.sin() * 1e6, 0.0, 10.0),
            Err(Error::Runtime(_))
        ));
    }

    #[test]
    fn non_positive_accuracy_is_rejected() {
        let gk = GaussKronrodAdaptive::new(0.0, 100);
        assert!(matches!(
            gk.integrate(|x| x, 0.0, 1.0),
            Err(Error::Precondition(_))
        ));
    }
}
