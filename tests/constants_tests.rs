// Host-side tests for the interaction tuning constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    assert!(DRAG_STEP_THRESHOLD_PX > 0.0);
    assert!(STEP_INTERVAL_MS > 0.0);
    assert!(TURNTABLE_FRAME_COUNT > 0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn step_cadence_supports_interactive_scrubbing() {
    // a full revolution at the rate limit completes in under ten seconds
    assert!(STEP_INTERVAL_MS * TURNTABLE_FRAME_COUNT as f64 <= 10_000.0);
    // the step threshold fits many times into a typical card width
    assert!(DRAG_STEP_THRESHOLD_PX < 100.0);
}
