// src/lib.rs

//! Driver for ultrasonic time-of-flight distance sensors.
//!
//! Works with 4-pin trigger/echo modules (HC-SR04 and friends) and 3-pin
//! modules that share a single signal line (Ping))), Grove). A reading sends
//! the fixed `LOW(2µs) → HIGH(10µs) → LOW` trigger pulse, times the echo
//! pulse against a configurable timeout and converts the round-trip duration
//! into one of six [`Unit`]s.
//!
//! The hardware is reached through [`UltrasonicGpio`] and [`UltrasonicTimer`].
//! With the `impl-embedded-hal` feature (on by default) the [`hal`] module
//! adapts `embedded-hal` 1.0 pins and delays to those traits.
//!
//! ## Features
//!
//! - `impl-embedded-hal`: `embedded-hal` adapters.
//! - `std`: `std::error::Error` support through `thiserror`.
//! - `defmt`: logging through `defmt`, and `defmt::Format` on public types.
//! - `log`: logging through `log`.

#![cfg_attr(not(test), no_std)]

#[cfg(all(feature = "defmt", feature = "log"))]
compile_error!(
    "Features \"defmt\" and \"log\" are mutually exclusive and cannot be enabled together"
);

pub mod common;
pub mod convert;
pub mod engine;
pub mod sensor;

#[cfg(feature = "impl-embedded-hal")]
pub mod hal;

#[cfg(test)]
mod mock;

// Re-export key types for convenience
pub use common::{
    EchoPhase, Level, Measurement, PinDirection, PinId, UltrasonicError, UltrasonicGpio,
    UltrasonicTimer,
};
pub use convert::{to_distance, Unit};
pub use sensor::{SensorConfig, Ultrasonic};
