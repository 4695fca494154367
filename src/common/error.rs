// src/common/error.rs

use super::types::EchoPhase;

/// Errors surfaced by the fallible measurement API (`try_read`, `measure`).
///
/// The sentinel API (`read`) never returns these; it maps every variant to
/// `0.0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum UltrasonicError<E = ()>
where
    E: core::fmt::Debug, // Debug is enough for the Io message in no_std
{
    /// Underlying GPIO error from the interface implementation.
    #[error("GPIO error: {0:?}")]
    Io(E),

    /// No echo transition was observed inside the timeout window.
    ///
    /// Covers an empty field of view, a target beyond the configured range,
    /// and wiring or sensor faults.
    #[error("echo timed out {0}")]
    Timeout(EchoPhase),
}

impl<E: core::fmt::Debug> UltrasonicError<E> {
    /// Returns `true` for [`UltrasonicError::Timeout`], whichever phase expired.
    pub fn is_timeout(&self) -> bool {
        matches!(self, UltrasonicError::Timeout(_))
    }
}
