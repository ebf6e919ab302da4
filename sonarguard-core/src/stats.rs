//! Window Statistics and the Outlier Band
//!
//! ## Overview
//!
//! The filter replaces spikes (multipath returns, fish, bubbles) with the
//! nearest edge of a one-standard-deviation band around the window mean:
//!
//! ```text
//! mean     = Σh / N
//! variance = Σ(h - mean)² / N        (population, divisor N)
//! sd       = √variance
//!
//!          mean - sd        mean        mean + sd
//!   ─────────[═══════════════│═══════════════]─────────
//!   clamp up ↑     pass-through unchanged     ↓ clamp down
//! ```
//!
//! Costs O(N) per ping and keeps no covariance state, unlike a Kalman filter.
//!
//! ## Precision
//!
//! Sums are accumulated in `f64`. For a window of identical `f32` readings the
//! sum is exact, so the mean equals the reading and the variance is exactly
//! zero. Steady-state input therefore passes through with no drift.
//!
//! Square roots go through `libm` to keep the crate `no_std`.

use crate::buffer::CircularBuffer;
use crate::errors::{FilterError, FilterResult};

/// Arithmetic mean, `None` for an empty window
pub fn mean<I>(window: I) -> Option<f32>
where
    I: IntoIterator<Item = f32>,
{
    mean_f64(window).map(|m| m as f32)
}

/// Population variance (divisor N), `None` for an empty window
pub fn population_variance<I>(window: I) -> Option<f32>
where
    I: IntoIterator<Item = f32>,
    I::IntoIter: Clone,
{
    let iter = window.into_iter();
    let avg = mean_f64(iter.clone())?;
    Some(variance_about(iter, avg) as f32)
}

/// Population standard deviation, `None` for an empty window
pub fn std_dev<I>(window: I) -> Option<f32>
where
    I: IntoIterator<Item = f32>,
    I::IntoIter: Clone,
{
    population_variance(window).map(|var| libm::sqrtf(var))
}

/// Apply the outlier clamp to `current` using `window`
///
/// Returns `current` unchanged for an empty window.
pub fn clamp_to_band<I>(current: f32, window: I) -> f32
where
    I: IntoIterator<Item = f32>,
    I::IntoIter: Clone,
{
    match OutlierBand::from_window(window) {
        Some(band) => band.clamp(current),
        None => current,
    }
}

fn mean_f64<I>(window: I) -> Option<f64>
where
    I: IntoIterator<Item = f32>,
{
    let (sum, count) = window
        .into_iter()
        .fold((0.0f64, 0usize), |(sum, count), h| (sum + h as f64, count + 1));

    if count == 0 {
        return None;
    }
    Some(sum / count as f64)
}

fn variance_about<I>(window: I, avg: f64) -> f64
where
    I: Iterator<Item = f32>,
{
    let (sq_sum, count) = window.fold((0.0f64, 0usize), |(acc, count), h| {
        let d = h as f64 - avg;
        (acc + d * d, count + 1)
    });

    if count == 0 {
        return 0.0;
    }
    sq_sum / count as f64
}

/// One-standard-deviation band around a window mean
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutlierBand {
    mean: f64,
    std_dev: f64,
}

impl OutlierBand {
    /// Build a band from any non-empty window
    pub fn from_window<I>(window: I) -> Option<Self>
    where
        I: IntoIterator<Item = f32>,
        I::IntoIter: Clone,
    {
        let iter = window.into_iter();
        let mean = mean_f64(iter.clone())?;
        let std_dev = libm::sqrt(variance_about(iter, mean));
        Some(Self { mean, std_dev })
    }

    /// Build a band from a history, requiring it to be full
    pub fn from_full_history<const N: usize>(history: &CircularBuffer<N>) -> FilterResult<Self> {
        if !history.is_full() {
            return Err(FilterError::InsufficientHistory {
                required: N,
                available: history.len(),
            });
        }

        Self::from_window(history.iter()).ok_or(FilterError::InsufficientHistory {
            required: N,
            available: 0,
        })
    }

    /// Window mean
    pub fn mean(&self) -> f32 {
        self.mean as f32
    }

    /// Population standard deviation of the window
    pub fn std_dev(&self) -> f32 {
        self.std_dev as f32
    }

    /// Lower clamp bound, `mean - sd`
    pub fn lower(&self) -> f32 {
        (self.mean - self.std_dev) as f32
    }

    /// Upper clamp bound, `mean + sd`
    pub fn upper(&self) -> f32 {
        (self.mean + self.std_dev) as f32
    }

    /// Whether `x` passes through unchanged
    pub fn contains(&self, x: f32) -> bool {
        let x = x as f64;
        x <= self.mean + self.std_dev && x >= self.mean - self.std_dev
    }

    /// Clamp `x` to the band
    ///
    /// Comparisons run in `f64` against the exact bounds; only the returned
    /// bound is rounded to `f32`. NaN falls through unchanged.
    pub fn clamp(&self, x: f32) -> f32 {
        let wide = x as f64;
        if wide > self.mean + self.std_dev {
            self.upper()
        } else if wide < self.mean - self.std_dev {
            self.lower()
        } else {
            x
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn empty_window_has_no_statistics() {
        let empty: [f32; 0] = [];
        assert!(mean(empty).is_none());
        assert!(population_variance(empty).is_none());
        assert!(std_dev(empty).is_none());
        assert!(OutlierBand::from_window(empty).is_none());
        assert_eq!(clamp_to_band(3.0, empty), 3.0);
    }

    #[test]
    fn population_not_sample_variance() {
        // Sample variance would be 3.2 here
        let window = [1.0, 1.0, 1.0, 1.0, 5.0];
        assert!(approx(mean(window).unwrap(), 1.8));
        assert!(approx(population_variance(window).unwrap(), 2.56));
        assert!(approx(std_dev(window).unwrap(), 1.6));
    }

    #[test]
    fn spike_clamps_high() {
        let window = [1.0, 1.0, 1.0, 1.0, 5.0];
        assert!(approx(clamp_to_band(5.0, window), 3.4));
    }

    #[test]
    fn dip_clamps_low() {
        let window = [5.0, 5.0, 5.0, 5.0, 1.0];
        // mean 4.2, sd 1.6
        assert!(approx(clamp_to_band(1.0, window), 2.6));
    }

    #[test]
    fn in_band_passes_through_exactly() {
        let window = [2.0, 2.5, 3.0, 2.5, 2.0];
        let band = OutlierBand::from_window(window).unwrap();
        assert!(band.contains(2.5));
        assert_eq!(band.clamp(2.5), 2.5);
    }

    #[test]
    fn identical_readings_have_zero_variance() {
        let value = 0.1f32 / 1.481;
        let window = [value; 5];
        let band = OutlierBand::from_window(window).unwrap();

        assert_eq!(band.std_dev(), 0.0);
        assert_eq!(band.mean(), value);
        assert_eq!(band.clamp(value), value);
    }

    #[test]
    fn full_history_required() {
        let mut history = CircularBuffer::<5>::new();
        history.push(1.0);
        history.push(2.0);

        assert_eq!(
            OutlierBand::from_full_history(&history),
            Err(FilterError::InsufficientHistory { required: 5, available: 2 })
        );

        for v in [3.0, 4.0, 5.0] {
            history.push(v);
        }
        let band = OutlierBand::from_full_history(&history).unwrap();
        assert!(approx(band.mean(), 3.0));
    }
}
