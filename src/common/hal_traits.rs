// src/common/hal_traits.rs

use super::pin::{Level, PinDirection, PinId};
use core::fmt::Debug;

/// Abstraction for the digital I/O a sensor needs.
///
/// Pins are addressed by [`PinId`] so that one implementation can serve both
/// the trigger and the echo line, or a single shared signal line. Adapters for
/// `embedded-hal` pins live in [`crate::hal`].
pub trait UltrasonicGpio {
    /// Associated error type for pin access errors.
    type Error: Debug;

    /// Switches `pin` to input or output.
    ///
    /// Only called on the shared line of a single-pin sensor during a
    /// measurement, and once per pin from `init()`.
    fn set_pin_mode(&mut self, pin: PinId, direction: PinDirection) -> Result<(), Self::Error>;

    /// Drives `pin` to `level`.
    fn write_digital(&mut self, pin: PinId, level: Level) -> Result<(), Self::Error>;

    /// Samples the current level of `pin`.
    fn read_digital(&mut self, pin: PinId) -> Result<Level, Self::Error>;
}

/// Abstraction for the microsecond timing a measurement needs.
pub trait UltrasonicTimer {
    /// Busy-waits for at least `us` microseconds.
    fn delay_us(&mut self, us: u32);

    /// Free-running microsecond counter.
    ///
    /// May wrap around; callers only ever look at `wrapping_sub` differences.
    fn now_us(&self) -> u32;
}
