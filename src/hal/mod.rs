// src/hal/mod.rs

//! Adapters from `embedded-hal` 1.0 pins and delays to the sensor interface
//! traits (requires the `impl-embedded-hal` feature).
//!
//! - [`PinPair`]: dedicated trigger and echo pins (4-pin sensors).
//! - [`SinglePin`]: one pin that switches direction at runtime (3-pin sensors).
//!
//! `embedded-hal` has no clock trait, so both adapters also take a
//! [`MicrosClock`].

mod pair;
mod single;

pub use pair::PinPair;
pub use single::SinglePin;

use embedded_hal::digital::{self, ErrorKind, PinState};

use crate::common::{Level, PinDirection, PinId};

/// Free-running microsecond counter, allowed to wrap.
pub trait MicrosClock {
    fn now_us(&self) -> u32;
}

impl<F> MicrosClock for F
where
    F: Fn() -> u32,
{
    fn now_us(&self) -> u32 {
        self()
    }
}

/// A pin whose direction can be switched at runtime.
///
/// Implement this for a HAL's flexible/bidirectional pin type to drive a
/// 3-pin sensor through [`SinglePin`].
pub trait FlexPin: digital::InputPin + digital::OutputPin {
    fn set_direction(&mut self, direction: PinDirection) -> Result<(), Self::Error>;
}

/// Errors from the `embedded-hal` adapters.
#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HalError {
    /// The HAL pin reported an error.
    #[error("pin error: {0:?}")]
    Pin(ErrorKind),

    /// The adapter does not own a pin with this id.
    #[error("pin {0} is not wired to this adapter")]
    UnknownPin(PinId),

    /// The pin exists but cannot be used as requested (e.g. driving the echo line).
    #[error("pin {pin} cannot be used as {direction}")]
    Unsupported { pin: PinId, direction: PinDirection },
}

impl HalError {
    pub(crate) fn pin<E: digital::Error>(e: E) -> Self {
        HalError::Pin(e.kind())
    }
}

impl From<Level> for PinState {
    fn from(level: Level) -> Self {
        match level {
            Level::Low => PinState::Low,
            Level::High => PinState::High,
        }
    }
}

impl From<PinState> for Level {
    fn from(state: PinState) -> Self {
        match state {
            PinState::Low => Level::Low,
            PinState::High => Level::High,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    #[test]
    fn test_closure_clock() {
        let ticks = Cell::new(5u32);
        let clock = || {
            let now = ticks.get();
            ticks.set(now + 10);
            now
        };
        assert_eq!(clock.now_us(), 5);
        assert_eq!(clock.now_us(), 15);
    }

    #[test]
    fn test_level_pin_state_conversions() {
        assert_eq!(PinState::from(Level::High), PinState::High);
        assert_eq!(PinState::from(Level::Low), PinState::Low);
        assert_eq!(Level::from(PinState::High), Level::High);
        assert_eq!(Level::from(PinState::Low), Level::Low);
    }
}
