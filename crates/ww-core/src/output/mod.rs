//! Rendering of query results for the CLI shell.
//!
//! stdout carries exactly one payload per command: pretty JSON for
//! machine consumption or a short human-readable block. Everything else
//! (logs, prompts, errors) belongs on stderr.

use serde::{Deserialize, Serialize};
use std::fmt::Write;
use ww_common::{OutputFormat, Result};

use crate::engine::WaitingTime;
use crate::inference::{BootstrapEstimate, PeakLocation, PodPosterior};

/// Combined answer for the `report` command: all four queries for one
/// month in a single payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthReport {
    pub month: u32,
    pub peak: PeakLocation,
    pub probability: BootstrapEstimate,
    pub pods: PodPosterior,
    pub wait: WaitingTime,
}

/// Render the peak-location answer.
pub fn render_peak(peak: &PeakLocation, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(peak)?),
        OutputFormat::Text => Ok(format!(
            "Peak sighting location: {}\nHistorical sightings in that bin: {}",
            peak.location, peak.count
        )),
    }
}

/// Render the encounter-probability answer.
pub fn render_probability(estimate: &BootstrapEstimate, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(estimate)?),
        OutputFormat::Text => Ok(format!(
            "Encounter probability: {:.6}\n({} nearby sightings, {} hits over {} trials)",
            estimate.probability, estimate.nearby_events, estimate.hits, estimate.trials
        )),
    }
}

/// Render the pod-classification answer.
pub fn render_pods(posterior: &PodPosterior, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(posterior)?),
        OutputFormat::Text => {
            let mut text = format!("Most likely pod: {}\n", posterior.mode);
            for (pod, mass) in &posterior.distribution {
                // Rounded for display; full precision is in the JSON payload.
                let _ = writeln!(text, "  {pod}: {mass:.3}");
            }
            let _ = write!(
                text,
                "({} nearby sightings; a sighting may involve several pods)",
                posterior.nearby_events
            );
            Ok(text)
        }
    }
}

/// Render the waiting-time answer.
pub fn render_wait(wait: &WaitingTime, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(wait)?),
        OutputFormat::Text => Ok(format!(
            "Expected wait until the next sighting: {:.3} hours\nP(wait > {} h) = {:.3}",
            wait.mean_hours, wait.hours, wait.survival
        )),
    }
}

/// Render the combined month report.
pub fn render_report(report: &MonthReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Text => {
            let mut text = format!("Month {} report\n\n", report.month);
            let _ = writeln!(text, "{}\n", render_peak(&report.peak, format)?);
            let _ = writeln!(text, "{}\n", render_probability(&report.probability, format)?);
            let _ = writeln!(text, "{}\n", render_pods(&report.pods, format)?);
            let _ = write!(text, "{}", render_wait(&report.wait, format)?);
            Ok(text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ww_common::GeoPoint;

    fn sample_peak() -> PeakLocation {
        PeakLocation {
            location: GeoPoint::new(48.52, -123.15),
            count: 17,
        }
    }

    #[test]
    fn text_peak_mentions_count() {
        let text = render_peak(&sample_peak(), OutputFormat::Text).unwrap();
        assert!(text.contains("17"));
        assert!(text.contains("48.52"));
    }

    #[test]
    fn json_peak_round_trips() {
        let text = render_peak(&sample_peak(), OutputFormat::Json).unwrap();
        let parsed: PeakLocation = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, sample_peak());
    }

    #[test]
    fn text_pods_lists_every_pod() {
        let posterior = PodPosterior {
            distribution: vec![("J".to_string(), 0.5), ("K".to_string(), 0.25)],
            mode: "J".to_string(),
            nearby_events: 2,
        };
        let text = render_pods(&posterior, OutputFormat::Text).unwrap();
        assert!(text.contains("J: 0.500"));
        assert!(text.contains("K: 0.250"));
    }

    #[test]
    fn wait_text_has_both_numbers() {
        let wait = WaitingTime {
            hours: 12.0,
            mean_hours: 36.5,
            survival: 0.72,
        };
        let text = render_wait(&wait, OutputFormat::Text).unwrap();
        assert!(text.contains("36.5"));
        assert!(text.contains("0.72"));
    }
}
