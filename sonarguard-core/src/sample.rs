//! Sample types flowing into and out of the filter
//!
//! A sonar frame always carries both channels together. Raw pairs are in
//! sensor-native units (round-trip milliseconds); filtered pairs are meters.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Physical sonar channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum Channel {
    /// Forward-looking transducer
    Front = 0,
    /// Downward-looking transducer
    Bottom = 1,
}

impl Channel {
    /// Both channels, in wire order
    pub const ALL: [Channel; 2] = [Channel::Front, Channel::Bottom];

    /// Get human-readable name
    pub const fn name(&self) -> &'static str {
        match self {
            Channel::Front => "front",
            Channel::Bottom => "bottom",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Raw reading pair as delivered by the sensor
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SamplePair {
    /// Front transducer, raw round-trip reading
    pub front: f32,
    /// Bottom transducer, raw round-trip reading
    pub bottom: f32,
}

impl SamplePair {
    /// Pair from raw readings
    pub const fn new(front: f32, bottom: f32) -> Self {
        Self { front, bottom }
    }

    /// Reading for one channel
    pub const fn get(&self, channel: Channel) -> f32 {
        match channel {
            Channel::Front => self.front,
            Channel::Bottom => self.bottom,
        }
    }

    /// Apply `f` to both readings
    pub fn map(self, mut f: impl FnMut(Channel, f32) -> f32) -> Self {
        Self {
            front: f(Channel::Front, self.front),
            bottom: f(Channel::Bottom, self.bottom),
        }
    }
}

impl From<(f32, f32)> for SamplePair {
    fn from((front, bottom): (f32, f32)) -> Self {
        Self::new(front, bottom)
    }
}

impl From<[f32; 2]> for SamplePair {
    fn from([front, bottom]: [f32; 2]) -> Self {
        Self::new(front, bottom)
    }
}

/// Filtered distance pair in meters
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FilteredPair {
    /// Distance ahead (m)
    pub front: f32,
    /// Distance to the bottom (m)
    pub bottom: f32,
}

impl FilteredPair {
    /// Pair from filtered distances
    pub const fn new(front: f32, bottom: f32) -> Self {
        Self { front, bottom }
    }

    /// Filtered distance for one channel
    pub const fn get(&self, channel: Channel) -> f32 {
        match channel {
            Channel::Front => self.front,
            Channel::Bottom => self.bottom,
        }
    }

    /// Wire layout used by array-based transports
    pub const fn to_array(self) -> [f32; 2] {
        [self.front, self.bottom]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_names() {
        assert_eq!(Channel::Front.name(), "front");
        assert_eq!(format!("{}", Channel::Bottom), "bottom");
    }

    #[test]
    fn pair_accessors() {
        let pair = SamplePair::from([3.0, 4.0]);
        assert_eq!(pair.get(Channel::Front), 3.0);
        assert_eq!(pair.get(Channel::Bottom), 4.0);

        let doubled = pair.map(|_, v| v * 2.0);
        assert_eq!(doubled, SamplePair::new(6.0, 8.0));

        let out = FilteredPair::new(1.5, 2.5);
        assert_eq!(out.to_array(), [1.5, 2.5]);
    }
}
