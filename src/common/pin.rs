// src/common/pin.rs

use core::fmt;

/// Identifies one GPIO line on the interface a sensor is attached to.
///
/// The meaning of the number belongs to the [`UltrasonicGpio`](super::UltrasonicGpio)
/// implementation (a board pin number, an index into owned pins, ...).
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinId(u8);

impl PinId {
    #[inline]
    pub const fn new(number: u8) -> Self {
        PinId(number)
    }

    #[inline]
    pub const fn number(&self) -> u8 {
        self.0
    }
}

impl From<u8> for PinId {
    fn from(number: u8) -> Self {
        PinId(number)
    }
}

impl fmt::Display for PinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Direction a pin is configured for.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinDirection {
    Input,
    Output,
}

impl fmt::Display for PinDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PinDirection::Input => write!(f, "input"),
            PinDirection::Output => write!(f, "output"),
        }
    }
}

/// Digital logic level of a line.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    Low,
    High,
}

impl Level {
    #[inline]
    pub const fn is_high(&self) -> bool {
        matches!(self, Level::High)
    }
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high {
            Level::High
        } else {
            Level::Low
        }
    }
}
