// src/common/mod.rs

// --- Declare all public modules within common ---
pub mod error;
pub mod hal_traits;
pub(crate) mod logging;
pub mod pin;
pub mod timing;
pub mod types;

// --- Re-export key types/traits for easier access ---

// From error.rs
pub use error::UltrasonicError;

// From hal_traits.rs
pub use hal_traits::{UltrasonicGpio, UltrasonicTimer};

// From pin.rs
pub use pin::{Level, PinDirection, PinId};

// From types.rs
pub use types::{EchoPhase, Measurement};

// From timing.rs (constants - users can access via common::timing::*)
pub use timing::DEFAULT_TIMEOUT_US;
