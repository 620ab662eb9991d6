//! Sparse-grid density estimator for peak sighting locations.
//!
//! Sightings are binned into a discretized coordinate grid by rounding
//! each coordinate at a fixed scale. At the default scale of 100 a bin is
//! 0.01° on a side, roughly 1.1 km at Salish Sea latitudes. The grid is a
//! sparse map keyed by `(bin_lat, bin_long)`; the full coordinate range is
//! never allocated.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use ww_common::{Error, GeoPoint, Result, SightingEvent};

/// Configuration for the density grid.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GridConfig {
    /// Bins per degree. A coordinate maps to `round(coordinate * scale)`.
    pub scale: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { scale: 100 }
    }
}

/// The grid cell with the highest sighting count, as a real coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeakLocation {
    /// Center of the winning bin.
    pub location: GeoPoint,
    /// Historical sightings in that bin.
    pub count: u32,
}

/// Density estimator over a discretized coordinate grid.
#[derive(Debug, Clone)]
pub struct DensityGrid {
    config: GridConfig,
}

impl DensityGrid {
    /// Create an estimator with the given configuration.
    pub fn new(config: GridConfig) -> Result<Self> {
        if config.scale == 0 {
            return Err(Error::InvalidConfiguration(
                "grid scale must be positive".to_string(),
            ));
        }
        Ok(Self { config })
    }

    /// Create an estimator with the default configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: GridConfig::default(),
        }
    }

    /// Find the bin with the maximum sighting count.
    ///
    /// Single pass over `events` in input order. A bin becomes the new
    /// best only when its count strictly exceeds the running maximum, so
    /// ties go to the first bin that reached the maximal count.
    pub fn peak_location(&self, events: &[SightingEvent]) -> Result<PeakLocation> {
        if events.is_empty() {
            return Err(Error::EmptyInput(
                "no sightings to bin for peak location".to_string(),
            ));
        }

        let scale = f64::from(self.config.scale);
        let mut grid: HashMap<(i32, i32), u32> = HashMap::new();
        let mut best_bin = (0i32, 0i32);
        let mut best_count = 0u32;

        for event in events {
            let bin = (
                (event.latitude * scale).round() as i32,
                (event.longitude * scale).round() as i32,
            );
            let count = grid.entry(bin).or_insert(0);
            *count += 1;
            if *count > best_count {
                best_count = *count;
                best_bin = bin;
            }
        }

        let location = GeoPoint::new(f64::from(best_bin.0) / scale, f64::from(best_bin.1) / scale);
        tracing::debug!(
            lat = location.latitude,
            long = location.longitude,
            count = best_count,
            bins = grid.len(),
            "density peak located"
        );

        Ok(PeakLocation {
            location,
            count: best_count,
        })
    }
}
