// src/sensor/mod.rs

//! The public sensor handle.

mod config;

pub use config::SensorConfig;

use crate::common::logging::{log_trace, log_warn};
use crate::common::timing::ROUND_TRIP_MICROSECONDS_PER_CM;
use crate::common::{
    Level, Measurement, PinDirection, PinId, UltrasonicError, UltrasonicGpio, UltrasonicTimer,
};
use crate::convert::{to_distance, Unit};
use crate::engine;

/// An ultrasonic distance sensor attached to an interface `IF`.
///
/// Each read is one self-contained blocking cycle; nothing but the
/// configuration survives between calls. Reads on one instance are
/// sequential by construction (`&mut self`). Several sensors triggered
/// back to back can hear each other's echoes, so callers should space them
/// out.
#[derive(Debug)]
pub struct Ultrasonic<IF> {
    interface: IF,
    config: SensorConfig,
}

impl<IF> Ultrasonic<IF>
where
    IF: UltrasonicGpio + UltrasonicTimer,
{
    /// 3-pin sensor on one shared signal line, default timeout and unit.
    pub fn new_single_pin(interface: IF, signal: PinId) -> Self {
        Self::from_config(interface, SensorConfig::single_pin(signal))
    }

    /// 4-pin sensor with the default 20 ms timeout.
    pub fn new_two_pin(interface: IF, trigger: PinId, echo: PinId) -> Self {
        Self::from_config(interface, SensorConfig::two_pin(trigger, echo))
    }

    /// 4-pin sensor with an explicit timeout in microseconds.
    pub fn new_two_pin_with_timeout(
        interface: IF,
        trigger: PinId,
        echo: PinId,
        timeout_us: u32,
    ) -> Self {
        Self::from_config(
            interface,
            SensorConfig::two_pin(trigger, echo).with_timeout(timeout_us),
        )
    }

    pub fn from_config(interface: IF, config: SensorConfig) -> Self {
        if !config.single_pin_mode && config.signal_pin_primary == config.signal_pin_secondary {
            log_warn!(
                "two-pin sensor uses pin {} for both trigger and echo",
                config.signal_pin_primary.number()
            );
        }
        if config.timeout_us == 0 {
            log_warn!("sensor configured with a zero timeout");
        }
        Ultrasonic { interface, config }
    }

    /// Puts the lines into their idle state: trigger driven LOW, echo listening.
    ///
    /// Construction performs no I/O, call this once before the first read on
    /// interfaces where pin direction is configured at runtime.
    pub fn init(&mut self) -> Result<(), UltrasonicError<IF::Error>> {
        let pins = self.config.echo_pins();
        let trigger = pins.trigger;
        let echo = pins.echo_line();
        self.interface
            .set_pin_mode(trigger, PinDirection::Output)
            .map_err(UltrasonicError::Io)?;
        self.interface
            .write_digital(trigger, Level::Low)
            .map_err(UltrasonicError::Io)?;
        self.interface
            .set_pin_mode(echo, PinDirection::Input)
            .map_err(UltrasonicError::Io)?;
        Ok(())
    }

    // --- Reading ---

    /// Reads the distance in the default unit.
    ///
    /// Returns `0.0` when no valid reading was obtained (timeout or GPIO
    /// error). That zero is a sentinel, not an object touching the sensor.
    /// Blocks for up to twice the timeout.
    pub fn read(&mut self) -> f32 {
        self.read_in(self.config.default_unit)
    }

    /// Like [`read`](Self::read), in an explicit unit.
    pub fn read_in(&mut self, unit: Unit) -> f32 {
        match self.try_read_in(unit) {
            Ok(distance) => distance,
            Err(UltrasonicError::Timeout(_)) => 0.0,
            Err(UltrasonicError::Io(_)) => {
                log_warn!("GPIO error during read, reporting no reading");
                0.0
            }
        }
    }

    /// Reads the distance in the default unit, reporting why a reading failed.
    pub fn try_read(&mut self) -> Result<f32, UltrasonicError<IF::Error>> {
        self.try_read_in(self.config.default_unit)
    }

    pub fn try_read_in(&mut self, unit: Unit) -> Result<f32, UltrasonicError<IF::Error>> {
        match self.measure()? {
            Measurement::Echo { duration_us } => Ok(to_distance(duration_us, unit)),
            Measurement::Timeout(phase) => Err(UltrasonicError::Timeout(phase)),
        }
    }

    /// Runs one raw trigger/echo cycle.
    pub fn measure(&mut self) -> Result<Measurement, UltrasonicError<IF::Error>> {
        engine::measure(&mut self.interface, self.config.echo_pins(), self.config.timeout_us)
            .map_err(UltrasonicError::Io)
    }

    /// Reads with a legacy divisor constant (`legacy::CM`, `legacy::INC`).
    ///
    /// Returns the distance truncated to a whole number; unknown divisors
    /// read in centimeters. `0` still means no reading.
    pub fn read_legacy(&mut self, divisor: u8) -> u32 {
        let unit = Unit::from_legacy_divisor(divisor).unwrap_or_default();
        self.read_in(unit) as u32
    }

    // --- Configuration ---

    /// Replaces the per-wait timeout. Must not be zero.
    pub fn set_timeout(&mut self, timeout_us: u32) {
        if timeout_us == 0 {
            log_warn!("sensor configured with a zero timeout");
        }
        self.config.timeout_us = timeout_us;
    }

    pub fn timeout(&self) -> u32 {
        self.config.timeout_us
    }

    /// Sets the timeout to the round-trip time of an echo from `distance_cm`.
    pub fn set_max_distance(&mut self, distance_cm: u32) {
        let timeout_us = distance_cm as f32 * ROUND_TRIP_MICROSECONDS_PER_CM;
        log_trace!("max distance {} cm -> timeout {} us", distance_cm, timeout_us as u32);
        self.set_timeout(timeout_us as u32);
    }

    /// Largest distance the current timeout can report, in `unit`.
    pub fn max_range(&self, unit: Unit) -> f32 {
        to_distance(self.config.timeout_us, unit)
    }

    pub fn set_unit(&mut self, unit: Unit) {
        self.config.default_unit = unit;
    }

    pub fn unit(&self) -> Unit {
        self.config.default_unit
    }

    pub fn is_single_pin(&self) -> bool {
        self.config.single_pin_mode
    }

    /// `(trigger, echo)`; both are the signal line in single-pin mode.
    pub fn pins(&self) -> (PinId, PinId) {
        (self.config.signal_pin_primary, self.config.signal_pin_secondary)
    }

    pub fn config(&self) -> &SensorConfig {
        &self.config
    }

    /// Gives the interface back.
    pub fn release(self) -> IF {
        self.interface
    }
}
