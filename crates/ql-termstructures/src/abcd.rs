//! Abcd instantaneous forward-rate volatility
//! (translates `ql/termstructures/volatilities/interestrate/abcd.hpp`).
//!
//! ```text
//! f(u) = (a + b·u)·exp(−c·u) + d,   u = time to maturity ≥ 0
//! ```
//!
//! The covariance between two forward rates maturing at `T` and `S`,
//! accrued over `[t₁, t₂]`, is `∫ f(T−t)·f(S−t) dt`.  [`Abcd`] evaluates it
//! in closed form through [`Abcd::primitive`]; [`AbcdSquared`] exposes the
//! integrand as a unary function for generic numerical routines.

use ql_core::{ensure_ordered, Real, Result, Time, Volatility};
use ql_math::validate_abcd_parameters;
use std::sync::Arc;

/// The raw `(a, b, c, d)` quadruple, as produced by a calibration or read
/// from configuration.  Not validated until turned into an [`Abcd`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AbcdParameters {
    /// Level of the humped component.
    pub a: Real,
    /// Slope of the humped component.
    pub b: Real,
    /// Exponential decay rate.
    pub c: Real,
    /// Long-term volatility.
    pub d: Real,
}

/// Abcd functional form for instantaneous volatility.
///
/// Immutable once built; the quadruple has passed
/// [`validate_abcd_parameters`].
///
/// Corresponds to `QuantLib::Abcd`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Abcd {
    a: Real,
    b: Real,
    c: Real,
    d: Real,
}

impl Abcd {
    /// Build the curve, rejecting quadruples that fail validation with
    /// [`Error::InvalidParameters`](ql_core::Error::InvalidParameters).
    pub fn new(a: Real, b: Real, c: Real, d: Real) -> Result<Self> {
        validate_abcd_parameters(a, b, c, d)?;
        Ok(Self { a, b, c, d })
    }

    /// Build the curve from a configuration record.
    pub fn from_parameters(p: AbcdParameters) -> Result<Self> {
        Self::new(p.a, p.b, p.c, p.d)
    }

    /// The underlying quadruple.
    pub fn parameters(&self) -> AbcdParameters {
        AbcdParameters {
            a: self.a,
            b: self.b,
            c: self.c,
            d: self.d,
        }
    }

    /// Parameter `a`.
    pub fn a(&self) -> Real {
        self.a
    }

    /// Parameter `b`.
    pub fn b(&self) -> Real {
        self.b
    }

    /// Parameter `c`.
    pub fn c(&self) -> Real {
        self.c
    }

    /// Parameter `d`.
    pub fn d(&self) -> Real {
        self.d
    }

    /// Instantaneous volatility at time to maturity `u`; zero for `u < 0`.
    pub fn value(&self, u: Time) -> Volatility {
        if u < 0.0 {
            0.0
        } else {
            (self.a + self.b * u) * (-self.c * u).exp() + self.d
        }
    }

    /// `df/du`; zero for `u < 0`.
    pub fn derivative(&self, u: Time) -> Real {
        if u < 0.0 {
            0.0
        } else {
            (self.b - self.c * (self.a + self.b * u)) * (-self.c * u).exp()
        }
    }

    /// `f(0) = a + d`.
    pub fn short_term_volatility(&self) -> Volatility {
        self.a + self.d
    }

    /// `lim f(u)` as `u → ∞`, i.e. `d`.
    pub fn long_term_volatility(&self) -> Volatility {
        self.d
    }

    /// Time to maturity at which the volatility peaks.
    pub fn maximum_location(&self) -> Time {
        if self.b <= 0.0 {
            return 0.0;
        }
        let location = (self.b - self.c * self.a) / (self.c * self.b);
        if location > 0.0 {
            location
        } else {
            0.0
        }
    }

    /// Peak value of the volatility.
    pub fn maximum_volatility(&self) -> Volatility {
        if self.b <= 0.0 || (self.b - self.c * self.a) / (self.c * self.b) <= 0.0 {
            return self.short_term_volatility();
        }
        self.b / self.c * (-1.0 + self.c * self.a / self.b).exp() + self.d
    }

    // ── Instantaneous ────────────────────────────────────────────────────────

    /// `f(T−u)·f(S−u)`.
    pub fn instantaneous_covariance(&self, u: Time, big_t: Time, big_s: Time) -> Real {
        self.value(big_t - u) * self.value(big_s - u)
    }

    /// `f(T−u)²`.
    pub fn instantaneous_variance(&self, u: Time, big_t: Time) -> Real {
        self.instantaneous_covariance(u, big_t, big_t)
    }

    /// `f(T−u)`, computed as the root of the instantaneous variance.
    pub fn instantaneous_volatility(&self, u: Time, big_t: Time) -> Volatility {
        self.instantaneous_variance(u, big_t).sqrt()
    }

    // ── Integrated ───────────────────────────────────────────────────────────

    /// Integrand of the covariance at calendar time `t`: `f(T−t)·f(S−t)`.
    pub fn covariance_at(&self, t: Time, big_t: Time, big_s: Time) -> Real {
        self.value(big_t - t) * self.value(big_s - t)
    }

    /// `∫ f(T−t)·f(S−t) dt` over `[t1, t2]`.
    ///
    /// Fails with [`Error::InvalidInterval`](ql_core::Error::InvalidInterval)
    /// if `t1 > t2`.  Contributions past `min(T, S)` vanish.
    pub fn covariance(&self, t1: Time, t2: Time, big_t: Time, big_s: Time) -> Result<Real> {
        ensure_ordered!(t1, t2);
        let cut_off = big_s.min(big_t);
        if t1 >= cut_off {
            return Ok(0.0);
        }
        let upper = t2.min(cut_off);
        Ok(self.primitive(upper, big_t, big_s) - self.primitive(t1, big_t, big_s))
    }

    /// `∫ f(T−t)² dt` over `[t_min, t_max]`.
    pub fn variance(&self, t_min: Time, t_max: Time, big_t: Time) -> Result<Real> {
        self.covariance(t_min, t_max, big_t, big_t)
    }

    /// Root-mean-square volatility over `[t_min, t_max]`.
    ///
    /// Degenerates to the instantaneous volatility when `t_max == t_min`.
    pub fn volatility(&self, t_min: Time, t_max: Time, big_t: Time) -> Result<Volatility> {
        if t_max == t_min {
            return Ok(self.instantaneous_volatility(t_max, big_t));
        }
        ensure_ordered!(t_min, t_max);
        Ok((self.variance(t_min, t_max, big_t)? / (t_max - t_min)).sqrt())
    }

    /// Indefinite integral in `t` of `f(T−t)·f(S−t)`; zero once `t` passes
    /// either maturity.
    ///
    /// The grouping over the common denominator `4c³·e^{cS}·e^{cT}` keeps
    /// the large exponentials from cancelling; do not expand it.
    pub fn primitive(&self, t: Time, big_t: Time, big_s: Time) -> Real {
        if big_t < t || big_s < t {
            return 0.0;
        }
        let (a, b, c, d) = (self.a, self.b, self.c, self.d);
        let (s, tt) = (big_s, big_t);

        let k1 = (c * t).exp();
        let k2 = (c * s).exp();
        let k3 = (c * tt).exp();

        (b * b
            * (-1.0 - 2.0 * c * c * s * tt - c * (s + tt)
                + k1 * k1 * (1.0 + c * (s + tt - 2.0 * t) + 2.0 * c * c * (s - t) * (tt - t)))
            + 2.0
                * c
                * c
                * (2.0 * d * a * (k2 + k3) * (k1 - 1.0)
                    + a * a * (k1 * k1 - 1.0)
                    + 2.0 * c * d * d * k2 * k3 * t)
            + 2.0
                * b
                * c
                * (a * (-1.0 - c * (s + tt) + k1 * k1 * (1.0 + c * (s + tt - 2.0 * t)))
                    - 2.0
                        * d
                        * (k3 * (1.0 + c * s) + k2 * (1.0 + c * tt)
                            - k1 * k3 * (1.0 + c * (s - t))
                            - k1 * k2 * (1.0 + c * (tt - t)))))
            / (4.0 * c * c * c * k2 * k3)
    }
}

impl From<Abcd> for AbcdParameters {
    fn from(abcd: Abcd) -> Self {
        abcd.parameters()
    }
}

impl TryFrom<AbcdParameters> for Abcd {
    type Error = ql_core::Error;

    fn try_from(p: AbcdParameters) -> Result<Self> {
        Self::from_parameters(p)
    }
}

// ── AbcdSquared ───────────────────────────────────────────────────────────────

/// `t ↦ f(T−t)·f(S−t)` for a fixed pair of maturities.
///
/// Holds the curve through an `Arc`, so several adapters can share one
/// [`Abcd`].  Pass [`as_fn`](AbcdSquared::as_fn) to anything expecting a
/// unary real function, e.g. an
/// [`Integrator`](ql_math::integrals::Integrator).
///
/// Corresponds to `QuantLib::AbcdSquared`.
#[derive(Debug, Clone)]
pub struct AbcdSquared {
    abcd: Arc<Abcd>,
    big_t: Time,
    big_s: Time,
}

impl AbcdSquared {
    /// Build a fresh curve from `(a, b, c, d)` for maturities `T` and `S`.
    pub fn new(a: Real, b: Real, c: Real, d: Real, big_t: Time, big_s: Time) -> Result<Self> {
        Ok(Self::from_shared(Arc::new(Abcd::new(a, b, c, d)?), big_t, big_s))
    }

    /// Share an existing curve.
    pub fn from_shared(abcd: Arc<Abcd>, big_t: Time, big_s: Time) -> Self {
        Self { abcd, big_t, big_s }
    }

    /// The shared curve.
    pub fn curve(&self) -> &Arc<Abcd> {
        &self.abcd
    }

    /// First maturity `T`.
    pub fn big_t(&self) -> Time {
        self.big_t
    }

    /// Second maturity `S`.
    pub fn big_s(&self) -> Time {
        self.big_s
    }

    /// `f(T−t)·f(S−t)`.
    pub fn value(&self, t: Time) -> Real {
        self.abcd.covariance_at(t, self.big_t, self.big_s)
    }

    /// Borrow the adapter as a plain closure.
    pub fn as_fn(&self) -> impl Fn(Time) -> Real + '_ {
        move |t| self.value(t)
    }
}
