// src/sensor/config.rs

use crate::common::{PinId, DEFAULT_TIMEOUT_US};
use crate::convert::Unit;
use crate::engine::EchoPins;

/// Per-sensor configuration, owned by one [`Ultrasonic`](super::Ultrasonic).
///
/// Nothing here is validated. A zero timeout or pins shared with another
/// sensor are caller errors.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorConfig {
    /// Trigger line, or the shared signal line in single-pin mode.
    pub signal_pin_primary: PinId,
    /// Echo line. Equal to the primary pin in single-pin mode.
    pub signal_pin_secondary: PinId,
    /// Trigger and echo share `signal_pin_primary`.
    pub single_pin_mode: bool,
    /// Bound on each of the two echo waits, in microseconds.
    pub timeout_us: u32,
    /// Unit used by `read()` when none is given.
    pub default_unit: Unit,
}

impl SensorConfig {
    /// 3-pin sensor with one shared signal line.
    pub const fn single_pin(signal: PinId) -> Self {
        SensorConfig {
            signal_pin_primary: signal,
            signal_pin_secondary: signal,
            single_pin_mode: true,
            timeout_us: DEFAULT_TIMEOUT_US,
            default_unit: Unit::Centimeters,
        }
    }

    /// 4-pin sensor with dedicated trigger and echo lines.
    pub const fn two_pin(trigger: PinId, echo: PinId) -> Self {
        SensorConfig {
            signal_pin_primary: trigger,
            signal_pin_secondary: echo,
            single_pin_mode: false,
            timeout_us: DEFAULT_TIMEOUT_US,
            default_unit: Unit::Centimeters,
        }
    }

    pub const fn with_timeout(mut self, timeout_us: u32) -> Self {
        self.timeout_us = timeout_us;
        self
    }

    pub const fn with_unit(mut self, unit: Unit) -> Self {
        self.default_unit = unit;
        self
    }

    pub(crate) fn echo_pins(&self) -> EchoPins {
        EchoPins {
            trigger: self.signal_pin_primary,
            echo: self.signal_pin_secondary,
            single_pin_mode: self.single_pin_mode,
        }
    }
}
