// src/engine/mod.rs

//! One physical trigger/echo cycle.
//!
//! The engine drives the fixed trigger pulse, then times the echo pulse with
//! two bounded waits: one for the rising edge, one for the falling edge.
//! Each wait gets the full timeout window, so a cycle blocks for at most
//! about twice the timeout.

mod wait;

use crate::common::logging::{log_debug, log_trace};
use crate::common::timing::{TRIGGER_PULSE_US, TRIGGER_SETTLE_US};
use crate::common::{
    EchoPhase, Level, Measurement, PinDirection, PinId, UltrasonicGpio, UltrasonicTimer,
};

use wait::wait_for_level;

/// Lines used by one measurement cycle.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EchoPins {
    pub trigger: PinId,
    pub echo: PinId,
    /// Trigger and echo share the `trigger` line, whose direction is switched
    /// between the two phases. `echo` is ignored when set.
    pub single_pin_mode: bool,
}

impl EchoPins {
    /// The line the echo is read from.
    pub fn echo_line(&self) -> PinId {
        if self.single_pin_mode {
            self.trigger
        } else {
            self.echo
        }
    }
}

/// Runs one measurement cycle.
///
/// Sends `LOW(2µs) → HIGH(10µs) → LOW` on the trigger line, switching a
/// shared line to output before and back to input after the pulse. Then
/// waits up to `timeout_us` for the echo to go HIGH and, from that instant,
/// up to `timeout_us` again for it to go LOW.
///
/// A returned [`Measurement::Echo`] duration is never zero and never larger
/// than `timeout_us`; an echo exactly as long as the timeout is still a valid
/// reading. A pulse whose edges land on the same clock tick counts as a
/// timeout on [`EchoPhase::End`]. GPIO errors abort the cycle.
pub fn measure<IF>(
    iface: &mut IF,
    pins: EchoPins,
    timeout_us: u32,
) -> Result<Measurement, IF::Error>
where
    IF: UltrasonicGpio + UltrasonicTimer,
{
    let trigger = pins.trigger;
    let echo = pins.echo_line();

    // The previous cycle left a shared line listening
    if pins.single_pin_mode {
        iface.set_pin_mode(trigger, PinDirection::Output)?;
    }

    iface.write_digital(trigger, Level::Low)?;
    iface.delay_us(TRIGGER_SETTLE_US);
    iface.write_digital(trigger, Level::High)?;
    iface.delay_us(TRIGGER_PULSE_US);
    iface.write_digital(trigger, Level::Low)?;

    if pins.single_pin_mode {
        iface.set_pin_mode(trigger, PinDirection::Input)?;
    }

    let armed_at = iface.now_us();
    let Some(echo_start) = wait_for_level(iface, echo, Level::High, armed_at, timeout_us)? else {
        log_debug!("no echo start within {} us", timeout_us);
        return Ok(Measurement::Timeout(EchoPhase::Start));
    };

    let Some(echo_end) = wait_for_level(iface, echo, Level::Low, echo_start, timeout_us)? else {
        log_debug!("echo still high after {} us", timeout_us);
        return Ok(Measurement::Timeout(EchoPhase::End));
    };

    let duration_us = echo_end.wrapping_sub(echo_start);
    if duration_us == 0 {
        // Clock too coarse to resolve the pulse
        log_debug!("echo edges on the same clock tick");
        return Ok(Measurement::Timeout(EchoPhase::End));
    }
    log_trace!("echo pulse {} us", duration_us);
    Ok(Measurement::Echo { duration_us })
}
