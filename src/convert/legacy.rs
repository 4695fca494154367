// src/convert/legacy.rs

//! Compatibility with the old integer "unit divisor" constants.
//!
//! Older firmware selected a unit by passing a divisor (`CM` or `INC`) to
//! `read`. These map onto [`Unit`]; the conversion math itself lives in the
//! parent module and is not duplicated here.

use super::Unit;

/// Legacy divisor selecting centimeters.
pub const CM: u8 = 28;
/// Legacy divisor selecting inches.
pub const INC: u8 = 71;

/// Legacy symbolic divisor -> unit.
const LEGACY_UNITS: [(u8, Unit); 2] = [(CM, Unit::Centimeters), (INC, Unit::Inches)];

impl Unit {
    /// Looks up the unit a legacy divisor constant stood for.
    pub fn from_legacy_divisor(divisor: u8) -> Option<Unit> {
        LEGACY_UNITS
            .iter()
            .find(|(legacy, _)| *legacy == divisor)
            .map(|(_, unit)| *unit)
    }

    /// Legacy divisor for this unit, if the old API had one.
    pub fn legacy_divisor(&self) -> Option<u8> {
        LEGACY_UNITS
            .iter()
            .find(|(_, unit)| unit == self)
            .map(|(legacy, _)| *legacy)
    }
}
