// src/common/timing.rs

use core::time::Duration;

// === Trigger Pulse ===
// Every supported sensor family expects LOW(>= 2us) -> HIGH(10us) -> LOW.

/// LOW settling time before the trigger pulse, guarantees a clean rising edge.
pub const TRIGGER_SETTLE: Duration = Duration::from_micros(2);
/// Width of the HIGH trigger pulse.
pub const TRIGGER_PULSE: Duration = Duration::from_micros(10);

pub(crate) const TRIGGER_SETTLE_US: u32 = TRIGGER_SETTLE.as_micros() as u32;
pub(crate) const TRIGGER_PULSE_US: u32 = TRIGGER_PULSE.as_micros() as u32;

// === Echo Timeout ===

/// Default bound on each of the two echo waits (about 3.4 m of range).
pub const DEFAULT_TIMEOUT_US: u32 = 20_000;
/// [`DEFAULT_TIMEOUT_US`] as a `Duration`.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_micros(DEFAULT_TIMEOUT_US as u64);

// === Physics ===

/// Assumed speed of sound (dry air, 20 °C, sea level).
pub const SPEED_OF_SOUND_M_PER_S: f32 = 343.0;

/// One-way travel time of sound over one centimeter, in microseconds (≈29.15).
///
/// 343 m/s = 0.0343 cm/µs, so one centimeter takes 1 / 0.0343 µs.
pub const MICROSECONDS_PER_CM: f32 = 10_000.0 / SPEED_OF_SOUND_M_PER_S;

/// Round-trip travel time over one centimeter of target distance (≈58.3 µs).
pub const ROUND_TRIP_MICROSECONDS_PER_CM: f32 = 2.0 * MICROSECONDS_PER_CM;
