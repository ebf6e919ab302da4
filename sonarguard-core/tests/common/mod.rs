//! Common test utilities for integration tests
//!
//! - Raw frame builders in sensor-native units
//! - A reference implementation of the clamp rule for cross-checking
//! - Float assertion helpers

#![allow(dead_code)]

use sonarguard_core::SamplePair;

/// Raw-to-meter divisor used by the default filter config
pub const RATIO: f32 = 1.481;

/// Raw reading that converts to `meters`
pub fn raw_for(meters: f32) -> f32 {
    meters * RATIO
}

/// Frames with identical readings on both channels
pub fn steady(raw: f32, count: usize) -> Vec<SamplePair> {
    vec![SamplePair::new(raw, raw); count]
}

/// Slow descent on the bottom channel with a forward wall approaching
///
/// Every `spike_every`-th frame carries a multipath spike on both channels.
pub fn descent_with_spikes(count: usize, spike_every: usize) -> Vec<SamplePair> {
    (0..count)
        .map(|i| {
            let front = raw_for(15.0 - 0.05 * i as f32);
            let bottom = raw_for(8.0 - 0.02 * i as f32);
            if spike_every > 0 && i % spike_every == spike_every - 1 {
                SamplePair::new(front * 3.0, bottom * 4.0)
            } else {
                SamplePair::new(front, bottom)
            }
        })
        .collect()
}

/// Clamp rule computed straight from its definition, in f64
pub fn reference_clamp(current: f32, window: &[f32]) -> f32 {
    let n = window.len() as f64;
    let mean = window.iter().map(|&h| h as f64).sum::<f64>() / n;
    let var = window
        .iter()
        .map(|&h| {
            let d = h as f64 - mean;
            d * d
        })
        .sum::<f64>()
        / n;
    let sd = var.sqrt();

    let x = current as f64;
    if x > mean + sd {
        (mean + sd) as f32
    } else if x < mean - sd {
        (mean - sd) as f32
    } else {
        current
    }
}

/// Assert two floats agree within `tol`
pub fn assert_close(actual: f32, expected: f32, tol: f32) {
    assert!(
        (actual - expected).abs() <= tol,
        "expected {} ± {}, got {}",
        expected,
        tol,
        actual
    );
}
