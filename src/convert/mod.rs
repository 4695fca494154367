// src/convert/mod.rs

//! Round-trip duration to distance conversion.
//!
//! Pure functions only: no state, safe to call from any context.

pub mod legacy;

use core::fmt;
use core::str::FromStr;

use crate::common::timing::ROUND_TRIP_MICROSECONDS_PER_CM;

/// Output unit of a distance reading.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Unit {
    #[default]
    Centimeters,
    Meters,
    Millimeters,
    Inches,
    Yards,
    Miles,
}

impl Unit {
    /// Every supported unit, in declaration order.
    pub const ALL: [Unit; 6] = [
        Unit::Centimeters,
        Unit::Meters,
        Unit::Millimeters,
        Unit::Inches,
        Unit::Yards,
        Unit::Miles,
    ];

    /// Scales a distance in centimeters into this unit. No rounding, no clamping.
    pub fn scale_centimeters(self, centimeters: f32) -> f32 {
        match self {
            Unit::Centimeters => centimeters,
            Unit::Meters => centimeters / 100.0,
            Unit::Millimeters => centimeters * 10.0,
            Unit::Inches => centimeters / 2.54,
            Unit::Yards => centimeters / 91.44,
            Unit::Miles => centimeters / 160_934.4,
        }
    }

    /// Short symbol, also accepted by `FromStr`.
    pub const fn symbol(&self) -> &'static str {
        match self {
            Unit::Centimeters => "cm",
            Unit::Meters => "m",
            Unit::Millimeters => "mm",
            Unit::Inches => "in",
            Unit::Yards => "yd",
            Unit::Miles => "mi",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Error returned when a string names no known [`Unit`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, thiserror::Error)]
#[error("unknown distance unit")]
pub struct UnknownUnit;

impl FromStr for Unit {
    type Err = UnknownUnit;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Unit::ALL
            .iter()
            .copied()
            .find(|unit| unit.symbol() == s)
            .ok_or(UnknownUnit)
    }
}

/// Converts a round-trip echo duration into a distance in `unit`.
///
/// The single division by the round-trip time per centimeter accounts for
/// both the speed of sound and the out-and-back halving. Sensors are
/// unreliable below roughly 2 cm; range checks are up to the caller.
pub fn to_distance(duration_us: u32, unit: Unit) -> f32 {
    let centimeters = duration_us as f32 / ROUND_TRIP_MICROSECONDS_PER_CM;
    unit.scale_centimeters(centimeters)
}
