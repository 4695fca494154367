// src/common/types.rs

use core::fmt;

use crate::convert::{to_distance, Unit};

/// Which of the two echo waits ran out of time.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EchoPhase {
    /// The echo line never went HIGH (nothing in range, or a wiring fault).
    Start,
    /// The echo line went HIGH but never came back LOW in time.
    End,
}

impl fmt::Display for EchoPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EchoPhase::Start => write!(f, "waiting for echo start"),
            EchoPhase::End => write!(f, "waiting for echo end"),
        }
    }
}

/// Outcome of one trigger/echo cycle.
///
/// Produced per measurement and consumed immediately; nothing keeps it
/// around between reads. When it is an [`Measurement::Echo`], the duration
/// never exceeds the timeout window it was taken with.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Measurement {
    /// Round-trip duration of the echo pulse in microseconds.
    Echo { duration_us: u32 },
    /// The given wait expired before its transition was seen.
    Timeout(EchoPhase),
}

impl Measurement {
    /// Returns the round-trip duration, or `None` on timeout.
    pub fn duration_us(&self) -> Option<u32> {
        match self {
            Measurement::Echo { duration_us } => Some(*duration_us),
            Measurement::Timeout(_) => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Measurement::Timeout(_))
    }

    /// Converts an echo into a distance in `unit`, or `None` on timeout.
    pub fn distance(&self, unit: Unit) -> Option<f32> {
        self.duration_us().map(|us| to_distance(us, unit))
    }
}
