//! Statistical estimators over sighting records.
//!
//! Four independent, synchronous estimators, each pure over in-memory
//! data and re-derived per query:
//! - [`density`] - sparse-grid peak location
//! - [`bootstrap`] - area-inflation Monte Carlo encounter probability
//! - [`pods`] - Laplace-smoothed pod classification
//! - [`interarrival`] - exponential waiting-time model
//!
//! The estimators share no state; the bounding-box logic each needs is
//! derived independently from `ww_common` geometry.

pub mod bootstrap;
pub mod density;
pub mod interarrival;
pub mod pods;

pub use bootstrap::{AreaBootstrap, BootstrapConfig, BootstrapEstimate};
pub use density::{DensityGrid, GridConfig, PeakLocation};
pub use interarrival::InterArrivalModel;
pub use pods::{PodClassifier, PodPosterior};
