//! Fuzz target for sighting record loading.
//!
//! Tests that `load_sightings` handles arbitrary input without panicking.

#![no_main]

use libfuzzer_sys::fuzz_target;
use ww_core::collect::load_sightings;

fuzz_target!(|data: &[u8]| {
    // The loader should never panic, only return an error for malformed input
    let _ = load_sightings(data);
});
