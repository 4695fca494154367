// src/common/logging.rs

// Crate-internal logging macros. They forward to `defmt` or `log` when the
// matching feature is enabled and expand to nothing otherwise. Arguments must
// be `Copy` (the no-backend arm evaluates them into a discarded tuple) and
// the format string may only use `{}`, which both backends understand.

#[cfg(feature = "defmt")]
macro_rules! log_trace {
    ($($arg:tt)*) => {{
        ::defmt::trace!($($arg)*);
    }};
}

#[cfg(feature = "log")]
macro_rules! log_trace {
    ($($arg:tt)*) => {{
        ::log::trace!($($arg)*);
    }};
}

#[cfg(not(any(feature = "defmt", feature = "log")))]
macro_rules! log_trace {
    ($($arg:tt)*) => {{
        let _ = ($($arg)*);
    }};
}

#[cfg(feature = "defmt")]
macro_rules! log_debug {
    ($($arg:tt)*) => {{
        ::defmt::debug!($($arg)*);
    }};
}

#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg:tt)*) => {{
        ::log::debug!($($arg)*);
    }};
}

#[cfg(not(any(feature = "defmt", feature = "log")))]
macro_rules! log_debug {
    ($($arg:tt)*) => {{
        let _ = ($($arg)*);
    }};
}

#[cfg(feature = "defmt")]
macro_rules! log_warn {
    ($($arg:tt)*) => {{
        ::defmt::warn!($($arg)*);
    }};
}

#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => {{
        ::log::warn!($($arg)*);
    }};
}

#[cfg(not(any(feature = "defmt", feature = "log")))]
macro_rules! log_warn {
    ($($arg:tt)*) => {{
        let _ = ($($arg)*);
    }};
}

pub(crate) use log_debug;
pub(crate) use log_trace;
pub(crate) use log_warn;
