//! Engine facade over the four estimators.
//!
//! Holds the loaded sighting history plus validated parameters and
//! exposes the shell-facing queries. Estimators are rebuilt and re-run
//! per query; nothing is cached between calls, so concurrent queries
//! over the same engine are independent.

use serde::{Deserialize, Serialize};
use ww_common::{Error, GeoPoint, Result, SightingEvent};

use crate::config::Params;
use crate::inference::{
    AreaBootstrap, BootstrapConfig, BootstrapEstimate, DensityGrid, GridConfig, InterArrivalModel,
    PeakLocation, PodClassifier, PodPosterior,
};

/// Answer to a waiting-time query.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaitingTime {
    /// Queried wait in hours.
    pub hours: f64,
    /// Expected wait (mean inter-arrival) in hours.
    pub mean_hours: f64,
    /// Probability the wait lasts at least `hours`.
    pub survival: f64,
}

/// The sighting inference engine.
#[derive(Debug, Clone)]
pub struct SightingEngine {
    events: Vec<SightingEvent>,
    params: Params,
}

impl SightingEngine {
    /// Create an engine over a loaded sighting history.
    pub fn new(events: Vec<SightingEvent>, params: Params) -> Result<Self> {
        params.validate()?;
        Ok(Self { events, params })
    }

    /// The full, unfiltered sighting history.
    pub fn events(&self) -> &[SightingEvent] {
        &self.events
    }

    /// The engine's parameters.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Most likely encounter location for a month.
    ///
    /// `Error::EmptyInput` when the month has no sightings; the caller
    /// should offer a different period rather than treat it as zero
    /// density.
    pub fn peak_location(&self, month: u32) -> Result<PeakLocation> {
        let slice = self.month_slice(month)?;
        if slice.is_empty() {
            return Err(Error::EmptyInput(format!("no sightings in month {month}")));
        }
        let grid = DensityGrid::new(GridConfig {
            scale: self.params.grid_scale,
        })?;
        grid.peak_location(&slice)
    }

    /// Encounter probability at `location` during a month.
    ///
    /// A month with no sightings is not an error here: the bootstrap
    /// collapses to its smoothing floor instead.
    pub fn encounter_probability(
        &self,
        location: GeoPoint,
        month: u32,
    ) -> Result<BootstrapEstimate> {
        let slice = self.month_slice(month)?;
        let estimator = AreaBootstrap::new(BootstrapConfig {
            daily_range: self.params.daily_range,
            point_radius: self.params.point_radius,
            trials: self.params.trials,
            seed: self.params.seed,
        })?;
        estimator.estimate(location, &slice)
    }

    /// Smoothed pod distribution at `location` during a month.
    pub fn pod_posterior(&self, location: GeoPoint, month: u32) -> Result<PodPosterior> {
        let slice = self.month_slice(month)?;
        let classifier = PodClassifier::new(self.params.pods.clone(), self.params.daily_range)?;
        classifier.classify(&slice, location)
    }

    /// Expected wait and `P(wait > hours)` from the full history.
    ///
    /// The waiting-time model always fits on the unfiltered record, not
    /// a month slice.
    pub fn waiting_time(&self, hours: f64) -> Result<WaitingTime> {
        let model = InterArrivalModel::fit(&self.events)?;
        let survival = model.survival(hours)?;
        Ok(WaitingTime {
            hours,
            mean_hours: model.mean_hours(),
            survival,
        })
    }

    fn month_slice(&self, month: u32) -> Result<Vec<SightingEvent>> {
        if !(1..=12).contains(&month) {
            return Err(Error::InvalidArgument(format!(
                "month must be 1-12, got {month}"
            )));
        }
        Ok(self
            .events
            .iter()
            .filter(|event| event.month() == month)
            .cloned()
            .collect())
    }
}
