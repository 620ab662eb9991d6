//! Whale Watch common types, geometry, and errors.
//!
//! This crate provides foundational types shared across ww-core modules:
//! - Sighting event records and geographic value types
//! - Bounding-box geometry for the flat-earth approximation
//! - Common error types with stable codes
//! - Output format specifications

pub mod error;
pub mod event;
pub mod output;

pub use error::{Error, ErrorCategory, Result};
pub use event::{BoundingBox, GeoPoint, SightingEvent};
pub use output::OutputFormat;
