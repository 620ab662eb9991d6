//! Laplace-smoothed pod classifier.
//!
//! Counts contemporaneous sightings near a candidate location by pod
//! label with add-one smoothing and returns the smoothed distribution
//! plus the mode. A recorded label may name several pods at once
//! (`"JKL"`, `"J and K"`); every pod code contained in the label is
//! credited, while the observation total advances once per sighting.
//! With such compound labels the per-pod masses are encounter
//! probabilities conditioned on a sighting and need not sum to 1.

use serde::{Deserialize, Serialize};
use ww_common::{BoundingBox, Error, GeoPoint, Result, SightingEvent};
use ww_math::LaplaceCategorical;

/// Smoothed pod distribution for a location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PodPosterior {
    /// Per-pod smoothed probability, in pod enumeration order.
    pub distribution: Vec<(String, f64)>,
    /// Highest-probability pod; ties go to the earlier pod.
    pub mode: String,
    /// Sightings that fell inside the candidate's range.
    pub nearby_events: usize,
}

/// Classifier over a fixed set of pod codes.
#[derive(Debug, Clone)]
pub struct PodClassifier {
    pods: Vec<String>,
    daily_range: f64,
}

impl PodClassifier {
    /// Create a classifier for the given pod codes.
    ///
    /// The pod set must be non-empty and the range positive.
    pub fn new(pods: Vec<String>, daily_range: f64) -> Result<Self> {
        if pods.is_empty() {
            return Err(Error::InvalidConfiguration(
                "pod set must not be empty".to_string(),
            ));
        }
        if !(daily_range > 0.0) || !daily_range.is_finite() {
            return Err(Error::InvalidConfiguration(
                "daily_range must be positive and finite".to_string(),
            ));
        }
        Ok(Self { pods, daily_range })
    }

    /// The pod codes this classifier scores, in enumeration order.
    pub fn pods(&self) -> &[String] {
        &self.pods
    }

    /// Classify the most likely pod near `candidate`.
    ///
    /// Filters `events` to the candidate's daily-range square, counts pod
    /// matches with add-one smoothing, and normalizes by the observation
    /// count. Zero nearby sightings still yield a strictly positive
    /// uniform distribution.
    pub fn classify(&self, events: &[SightingEvent], candidate: GeoPoint) -> Result<PodPosterior> {
        if !candidate.latitude.is_finite() || !candidate.longitude.is_finite() {
            return Err(Error::InvalidArgument(format!(
                "candidate coordinate is not finite: ({}, {})",
                candidate.latitude, candidate.longitude
            )));
        }
        let bounds = BoundingBox::centered(candidate, self.daily_range).ok_or_else(|| {
            Error::InvalidConfiguration(format!(
                "degenerate bounds half-width {}",
                self.daily_range
            ))
        })?;

        let mut counts = vec![0u64; self.pods.len()];
        let mut observations = 0u64;
        for event in events {
            if !bounds.contains(event.location()) {
                continue;
            }
            observations += 1;
            for (i, pod) in self.pods.iter().enumerate() {
                if event.pods.contains(pod.as_str()) {
                    counts[i] += 1;
                }
            }
        }

        let smoothed = LaplaceCategorical::new(counts, observations).ok_or_else(|| {
            Error::InvalidConfiguration("pod set must not be empty".to_string())
        })?;
        let mode = self.pods[smoothed.mode()].clone();
        let distribution: Vec<(String, f64)> = self
            .pods
            .iter()
            .cloned()
            .zip(smoothed.masses())
            .collect();

        tracing::debug!(
            nearby = observations,
            mode = %mode,
            "pod classification complete"
        );

        Ok(PodPosterior {
            distribution,
            mode,
            nearby_events: observations as usize,
        })
    }
}
