//! Exponential distribution utilities for waiting-time models.
//!
//! Provides PDF, CDF, and survival functions for the exponential
//! distribution, the memoryless special case of Gamma(1, β).
//!
//! # Parameterization
//!
//! Uses **rate parameterization**: `Exp(β)` where `β > 0` is the rate.
//! The density is `f(t) = β e^(-βt)` and the mean is `1/β`.
//!
//! Fitting from an observed mean inter-arrival time uses `from_mean`,
//! which is the scale view `θ = 1/β`.

use serde::{Deserialize, Serialize};

/// An exponential distribution with fixed rate.
///
/// Immutable after construction; survival queries never refit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Exponential {
    rate: f64,
}

impl Exponential {
    /// Create from a rate parameter.
    ///
    /// Returns `None` unless the rate is finite and positive.
    pub fn new(rate: f64) -> Option<Self> {
        if !rate.is_finite() || rate <= 0.0 {
            return None;
        }
        Some(Self { rate })
    }

    /// Create from a mean (scale) parameter: `rate = 1/mean`.
    pub fn from_mean(mean: f64) -> Option<Self> {
        if !mean.is_finite() || mean <= 0.0 {
            return None;
        }
        Self::new(1.0 / mean)
    }

    /// Rate parameter β.
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Mean 1/β.
    pub fn mean(&self) -> f64 {
        1.0 / self.rate
    }

    /// Density `f(t) = β e^(-βt)` for t ≥ 0, else 0.
    pub fn pdf(&self, t: f64) -> f64 {
        if t.is_nan() {
            return f64::NAN;
        }
        if t < 0.0 {
            return 0.0;
        }
        self.rate * (-self.rate * t).exp()
    }

    /// Log-density, `-∞` outside the support.
    pub fn log_pdf(&self, t: f64) -> f64 {
        if t.is_nan() {
            return f64::NAN;
        }
        if t < 0.0 {
            return f64::NEG_INFINITY;
        }
        self.rate.ln() - self.rate * t
    }

    /// CDF `P(X ≤ t) = 1 - e^(-βt)` for t ≥ 0, else 0.
    ///
    /// Uses `-expm1` to stay accurate for small `βt`.
    pub fn cdf(&self, t: f64) -> f64 {
        if t.is_nan() {
            return f64::NAN;
        }
        if t < 0.0 {
            return 0.0;
        }
        -(-self.rate * t).exp_m1()
    }

    /// Survival function `P(X > t) = e^(-βt)` for t ≥ 0, else 1.
    pub fn survival(&self, t: f64) -> f64 {
        if t.is_nan() {
            return f64::NAN;
        }
        if t < 0.0 {
            return 1.0;
        }
        (-self.rate * t).exp()
    }
}
