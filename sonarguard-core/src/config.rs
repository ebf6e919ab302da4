//! Filter configuration
//!
//! The window length is a const generic on the filter and is not part of
//! the runtime config.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::constants::sonar::{RAW_TO_METERS_DIVISOR, TIMEOUT_SENTINEL};

/// Runtime settings for `WindowedOutlierFilter`
///
/// Deserialized configs go through [`FilterConfig::new_with_divisor`], so a
/// config file cannot smuggle in a zero divisor.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "FilterConfigFields"))]
pub struct FilterConfig {
    /// Raw reading divided by this gives meters
    pub divisor: f32,

    /// Raw value the sensor reports on timeout
    pub timeout_sentinel: f32,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            divisor: RAW_TO_METERS_DIVISOR,
            timeout_sentinel: TIMEOUT_SENTINEL,
        }
    }
}

/// Wire form of [`FilterConfig`]; missing fields take the defaults
#[cfg(feature = "serde")]
#[derive(Deserialize)]
#[serde(default)]
struct FilterConfigFields {
    divisor: f32,
    timeout_sentinel: f32,
}

#[cfg(feature = "serde")]
impl Default for FilterConfigFields {
    fn default() -> Self {
        let config = FilterConfig::default();
        Self {
            divisor: config.divisor,
            timeout_sentinel: config.timeout_sentinel,
        }
    }
}

#[cfg(feature = "serde")]
impl From<FilterConfigFields> for FilterConfig {
    fn from(fields: FilterConfigFields) -> Self {
        Self::new_with_divisor(fields.divisor).with_timeout_sentinel(fields.timeout_sentinel)
    }
}

impl FilterConfig {
    /// Config with a custom conversion divisor
    ///
    /// A zero or non-finite divisor would turn every reading into NaN or
    /// infinity, so those fall back to the default.
    pub fn new_with_divisor(divisor: f32) -> Self {
        let divisor = if divisor.is_finite() && divisor != 0.0 {
            divisor
        } else {
            RAW_TO_METERS_DIVISOR
        };

        Self {
            divisor,
            ..Self::default()
        }
    }

    /// Replace the timeout sentinel
    pub fn with_timeout_sentinel(mut self, sentinel: f32) -> Self {
        self.timeout_sentinel = sentinel;
        self
    }

    /// Convert a raw reading to meters
    pub fn to_meters(&self, raw: f32) -> f32 {
        raw / self.divisor
    }

    /// Whether `raw` is the timeout sentinel
    pub fn is_timeout(&self, raw: f32) -> bool {
        raw == self.timeout_sentinel
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_ratio_is_one_meter() {
        let config = FilterConfig::default();
        assert!((config.to_meters(1.481) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn sentinel_detection() {
        let config = FilterConfig::default();
        assert!(config.is_timeout(-1.0));
        assert!(!config.is_timeout(-1.0001));
        assert!(!config.is_timeout(0.0));

        let custom = FilterConfig::default().with_timeout_sentinel(0.0);
        assert!(custom.is_timeout(0.0));
    }

    #[test]
    fn degenerate_divisor_falls_back() {
        assert_eq!(FilterConfig::new_with_divisor(0.0).divisor, RAW_TO_METERS_DIVISOR);
        assert_eq!(FilterConfig::new_with_divisor(f32::NAN).divisor, RAW_TO_METERS_DIVISOR);
        assert_eq!(FilterConfig::new_with_divisor(2.0).divisor, 2.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialized_divisor_falls_back() {
        let zero: FilterConfig = serde_json::from_str(r#"{ "divisor": 0.0 }"#).unwrap();
        assert_eq!(zero.divisor, RAW_TO_METERS_DIVISOR);

        // Out of f32 range, parses to infinity
        let huge: FilterConfig =
            serde_json::from_str(r#"{ "divisor": 1e39, "timeout_sentinel": 0.0 }"#).unwrap();
        assert_eq!(huge.divisor, RAW_TO_METERS_DIVISOR);
        assert_eq!(huge.timeout_sentinel, 0.0);

        let empty: FilterConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, FilterConfig::default());
    }
}
