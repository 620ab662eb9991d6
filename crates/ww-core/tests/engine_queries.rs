//! End-to-end engine tests over a synthetic sighting history.
//!
//! Exercises the full query surface the shell consumes: peak location,
//! encounter probability, pod posterior, and waiting time, plus the
//! recoverable error paths.

use chrono::NaiveDate;
use ww_common::{Error, GeoPoint, SightingEvent};
use ww_core::config::Params;
use ww_core::engine::SightingEngine;

fn sighting(y: i32, m: u32, d: u32, pods: &str, lat: f64, long: f64) -> SightingEvent {
    SightingEvent {
        date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
        pods: pods.to_string(),
        latitude: lat,
        longitude: long,
    }
}

/// A July cluster at San Juan Island, a thinner August spread near
/// Seattle, nothing in winter.
fn salish_history() -> Vec<SightingEvent> {
    let mut events = Vec::new();
    for day in 1..=6 {
        events.push(sighting(2019, 7, day, "J", 48.52, -123.15));
    }
    events.push(sighting(2019, 7, 10, "JK", 48.53, -123.17));
    events.push(sighting(2019, 7, 12, "L", 48.40, -122.95));
    events.push(sighting(2019, 8, 2, "K", 47.60, -122.33));
    events.push(sighting(2019, 8, 20, "KL", 47.62, -122.35));
    events
}

fn engine_with_seed(seed: u64) -> SightingEngine {
    let params = Params {
        trials: 50_000,
        seed: Some(seed),
        ..Params::default()
    };
    SightingEngine::new(salish_history(), params).unwrap()
}

#[test]
fn july_peak_is_the_san_juan_cluster() {
    let engine = engine_with_seed(3);
    let peak = engine.peak_location(7).unwrap();
    assert_eq!(peak.count, 6);
    assert!((peak.location.latitude - 48.52).abs() < 0.011);
    assert!((peak.location.longitude - -123.15).abs() < 0.011);
}

#[test]
fn winter_month_reports_empty_input() {
    let engine = engine_with_seed(3);
    match engine.peak_location(1) {
        Err(Error::EmptyInput(message)) => assert!(message.contains('1')),
        other => panic!("expected EmptyInput, got {other:?}"),
    }
}

#[test]
fn probability_at_the_peak_is_positive_and_bounded() {
    let engine = engine_with_seed(3);
    let peak = engine.peak_location(7).unwrap();
    let estimate = engine.encounter_probability(peak.location, 7).unwrap();
    assert!(estimate.probability > 0.0);
    assert!(estimate.probability <= 1.0);
    assert_eq!(estimate.nearby_events, 8); // all July sightings in range
}

#[test]
fn probability_is_reproducible_for_a_seed() {
    let location = GeoPoint::new(48.5, -123.1);
    let first = engine_with_seed(17)
        .encounter_probability(location, 7)
        .unwrap();
    let second = engine_with_seed(17)
        .encounter_probability(location, 7)
        .unwrap();
    assert_eq!(first, second);
}

#[test]
fn different_seeds_still_agree_statistically() {
    // Same pool, different RNG streams: the smoothed estimates stay
    // within stochastic tolerance of each other.
    let location = GeoPoint::new(48.5, -123.1);
    let a = engine_with_seed(1)
        .encounter_probability(location, 7)
        .unwrap();
    let b = engine_with_seed(2)
        .encounter_probability(location, 7)
        .unwrap();
    assert!((a.probability - b.probability).abs() < 0.01);
}

#[test]
fn july_pod_posterior_favors_j() {
    let engine = engine_with_seed(3);
    let posterior = engine
        .pod_posterior(GeoPoint::new(48.5, -123.1), 7)
        .unwrap();
    assert_eq!(posterior.mode, "J");
    let sum: f64 = posterior.distribution.iter().map(|(_, m)| m).sum();
    // July labels are single- or double-pod; every mass stays positive.
    for (_, mass) in &posterior.distribution {
        assert!(*mass > 0.0);
    }
    assert!(sum > 0.9 && sum < 1.2);
}

#[test]
fn pod_posterior_off_season_is_uniform() {
    let engine = engine_with_seed(3);
    let posterior = engine
        .pod_posterior(GeoPoint::new(48.5, -123.1), 3)
        .unwrap();
    assert_eq!(posterior.nearby_events, 0);
    for (_, mass) in &posterior.distribution {
        assert!((mass - 1.0 / 3.0).abs() < 1e-12);
    }
}

#[test]
fn waiting_time_uses_every_distinct_date() {
    let engine = engine_with_seed(3);
    let wait = engine.waiting_time(0.0).unwrap();
    // 10 distinct dates spanning 2019-07-01 to 2019-08-20: 50 days
    // over 9 gaps.
    let expected_mean = 50.0 * 24.0 / 9.0;
    assert!((wait.mean_hours - expected_mean).abs() < 1e-9);
    assert!((wait.survival - 1.0).abs() < 1e-12);
}

#[test]
fn waiting_time_survival_decreases_with_horizon() {
    let engine = engine_with_seed(3);
    let short = engine.waiting_time(12.0).unwrap();
    let lengthy = engine.waiting_time(240.0).unwrap();
    assert!(lengthy.survival < short.survival);
}

#[test]
fn single_date_history_cannot_fit_waiting_time() {
    let events = vec![
        sighting(2019, 7, 1, "J", 48.5, -123.0),
        sighting(2019, 7, 1, "K", 48.6, -123.1),
    ];
    let engine = SightingEngine::new(events, Params::default()).unwrap();
    assert!(matches!(
        engine.waiting_time(10.0).unwrap_err(),
        Error::InsufficientData { found: 1, .. }
    ));
}
