//! Fuzz target for record date parsing.
//!
//! Tests that `parse_date` handles arbitrary input without panicking.

#![no_main]

use libfuzzer_sys::fuzz_target;
use ww_core::collect::parse_date;

fuzz_target!(|data: &str| {
    // The parser should never panic, only return None for malformed input
    let _ = parse_date(data);
});
