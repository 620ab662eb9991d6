//! Exponential waiting-time model over sighting inter-arrivals.
//!
//! Distinct sighting dates are treated as arrivals of a memoryless
//! process: consecutive gaps in hours are averaged into the mean
//! inter-arrival time, and an exponential distribution with rate
//! `1/mean` answers tail-probability queries (`P(wait > t)`). Multiple
//! sightings recorded at the identical instant count once.
//!
//! Dates convert to hours from a fixed midnight-UTC origin, so interval
//! math is identical across machines.

use std::collections::BTreeSet;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use ww_common::{Error, Result, SightingEvent};
use ww_math::Exponential;

/// Fitted waiting-time model. Stateless after construction; survival
/// queries never refit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InterArrivalModel {
    mean_hours: f64,
    distribution: Exponential,
}

impl InterArrivalModel {
    /// Fit the model from the full sighting history.
    ///
    /// Requires at least two distinct timestamps; duplicates collapse.
    pub fn fit(events: &[SightingEvent]) -> Result<Self> {
        let distinct: BTreeSet<NaiveDate> = events.iter().map(|event| event.date).collect();
        let hours: Vec<f64> = distinct.into_iter().map(date_to_hours).collect();
        Self::fit_hours(&hours)
    }

    /// Fit from raw arrival times in hours.
    ///
    /// Deduplicates identical instants and sorts before differencing.
    pub fn fit_hours(timestamps: &[f64]) -> Result<Self> {
        if timestamps.iter().any(|t| t.is_nan()) {
            return Err(Error::InvalidArgument(
                "arrival timestamps must not be NaN".to_string(),
            ));
        }
        let mut sorted = timestamps.to_vec();
        sorted.sort_by(f64::total_cmp);
        sorted.dedup();

        if sorted.len() < 2 {
            return Err(Error::InsufficientData {
                needed: 2,
                found: sorted.len(),
            });
        }

        let gaps: Vec<f64> = sorted.windows(2).map(|pair| pair[1] - pair[0]).collect();
        let mean_hours = gaps.iter().sum::<f64>() / gaps.len() as f64;
        let distribution = Exponential::from_mean(mean_hours).ok_or_else(|| {
            Error::InvalidConfiguration(format!(
                "non-positive mean inter-arrival time {mean_hours}"
            ))
        })?;

        tracing::debug!(arrivals = sorted.len(), mean_hours, "waiting-time model fitted");

        Ok(Self {
            mean_hours,
            distribution,
        })
    }

    /// Mean inter-arrival time in hours - the expected wait.
    pub fn mean_hours(&self) -> f64 {
        self.mean_hours
    }

    /// `P(wait > hours)` under the fitted exponential.
    ///
    /// Rejects negative waits; repeated queries are independent.
    pub fn survival(&self, hours: f64) -> Result<f64> {
        if hours.is_nan() || hours < 0.0 {
            return Err(Error::InvalidArgument(format!(
                "waiting time must be non-negative, got {hours}"
            )));
        }
        Ok(self.distribution.survival(hours))
    }
}

fn date_to_hours(date: NaiveDate) -> f64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp() as f64 / 3600.0
}
