//! Area-inflation Monte Carlo bootstrap for local encounter probability.
//!
//! # Model
//!
//! Each sighting near a candidate location inflates from a point to a
//! small square (its plausible occupied area at the recorded moment). The
//! candidate's own square of the same half-width is the observer's
//! visibility footprint, and a larger square around the candidate bounds
//! where the subject could plausibly be that day.
//!
//! The analytic weight
//! ```text
//! p = Σ area(event square) / area(whale bounds)
//! ```
//! is the marginal chance that a uniformly random point in the daily
//! range lands in *some* occupied square. Areas are summed, not unioned:
//! overlapping squares double-count. That is a known modeling
//! simplification inherited from the method, kept on purpose.
//!
//! The Monte Carlo pass then refines `p` into a visibility-conditioned
//! estimate: each of `trials` draws succeeds with probability `p`, a
//! successful draw places the subject uniformly in the daily range, and a
//! hit is a placement inside the visibility footprint. The returned
//! probability is Laplace-smoothed, `(hits + 1) / (trials + 1)`, so it is
//! never exactly zero.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use ww_common::{BoundingBox, Error, GeoPoint, Result, SightingEvent};

/// Configuration for the bootstrap estimator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BootstrapConfig {
    /// Half-width in degrees of the daily-range square around the
    /// candidate. One degree ≈ 111 km, the subject's plausible daily range.
    pub daily_range: f64,
    /// Half-width in degrees of an inflated sighting square and of the
    /// visibility footprint. Overlapping squares double-count in the
    /// analytic weight; see the module docs.
    pub point_radius: f64,
    /// Monte Carlo draws per estimate.
    pub trials: u64,
    /// Fixed RNG seed for reproducible runs; `None` draws OS entropy.
    pub seed: Option<u64>,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            daily_range: 1.0,
            point_radius: 0.01,
            trials: 100_000,
            seed: None,
        }
    }
}

/// Result of a bootstrap estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BootstrapEstimate {
    /// Laplace-smoothed encounter probability, always in (0, 1].
    pub probability: f64,
    /// Analytic mixture weight `p` before Monte Carlo refinement.
    pub analytic_weight: f64,
    /// Successful draws that landed inside the visibility footprint.
    pub hits: u64,
    /// Monte Carlo draws performed.
    pub trials: u64,
    /// Sightings that survived the daily-range filter.
    pub nearby_events: usize,
}

/// Monte Carlo bootstrap estimator.
#[derive(Debug, Clone)]
pub struct AreaBootstrap {
    config: BootstrapConfig,
}

impl AreaBootstrap {
    /// Create an estimator with the given configuration.
    pub fn new(config: BootstrapConfig) -> Result<Self> {
        if !(config.daily_range > 0.0) || !config.daily_range.is_finite() {
            return Err(Error::InvalidConfiguration(
                "daily_range must be positive and finite".to_string(),
            ));
        }
        if !(config.point_radius > 0.0) || !config.point_radius.is_finite() {
            return Err(Error::InvalidConfiguration(
                "point_radius must be positive and finite".to_string(),
            ));
        }
        if config.trials == 0 {
            return Err(Error::InvalidConfiguration(
                "trials must be positive".to_string(),
            ));
        }
        Ok(Self { config })
    }

    /// Create an estimator with the default configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: BootstrapConfig::default(),
        }
    }

    /// Estimate the encounter probability at `candidate` from the pool of
    /// nearby sightings.
    ///
    /// The pool is re-filtered against the candidate's daily-range square
    /// even when the caller already applied a coarser filter. An empty
    /// surviving pool collapses the estimate to `1 / (trials + 1)`.
    pub fn estimate(
        &self,
        candidate: GeoPoint,
        events: &[SightingEvent],
    ) -> Result<BootstrapEstimate> {
        let whale_bounds = Self::bounds_around(candidate, self.config.daily_range)?;
        let sight_bounds = Self::bounds_around(candidate, self.config.point_radius)?;

        let nearby: Vec<GeoPoint> = events
            .iter()
            .map(SightingEvent::location)
            .filter(|point| whale_bounds.contains(*point))
            .collect();

        // Inflate each surviving point to a square and sum the areas.
        let side = 2.0 * self.config.point_radius;
        let event_space = nearby.len() as f64 * side * side;
        let analytic_weight = event_space / whale_bounds.area();

        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let mut hits = 0u64;
        for _ in 0..self.config.trials {
            let chance: f64 = rng.random();
            if chance <= analytic_weight {
                let placed = GeoPoint::new(
                    rng.random_range(whale_bounds.lat_min..whale_bounds.lat_max),
                    rng.random_range(whale_bounds.long_min..whale_bounds.long_max),
                );
                if sight_bounds.contains(placed) {
                    hits += 1;
                }
            }
        }

        let probability = (hits + 1) as f64 / (self.config.trials + 1) as f64;
        tracing::debug!(
            nearby = nearby.len(),
            analytic_weight,
            hits,
            trials = self.config.trials,
            probability,
            "bootstrap estimate complete"
        );

        Ok(BootstrapEstimate {
            probability,
            analytic_weight,
            hits,
            trials: self.config.trials,
            nearby_events: nearby.len(),
        })
    }

    fn bounds_around(candidate: GeoPoint, half_width: f64) -> Result<BoundingBox> {
        if !candidate.latitude.is_finite() || !candidate.longitude.is_finite() {
            return Err(Error::InvalidArgument(format!(
                "candidate coordinate is not finite: ({}, {})",
                candidate.latitude, candidate.longitude
            )));
        }
        BoundingBox::centered(candidate, half_width).ok_or_else(|| {
            Error::InvalidConfiguration(format!("degenerate bounds half-width {half_width}"))
        })
    }
}
