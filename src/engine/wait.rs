// src/engine/wait.rs

use crate::common::{Level, PinId, UltrasonicGpio, UltrasonicTimer};
use nb::Result as NbResult;

/// Polls `f` until it stops returning `WouldBlock` or more than `timeout_us`
/// microseconds have passed since `since`.
///
/// Returns the timestamp of the poll that succeeded, or `None` once the
/// window is exhausted. The deadline is checked before each poll, so a
/// success is always stamped at most `timeout_us` after `since`; an elapsed
/// time equal to the timeout still counts as inside the window.
pub(crate) fn wait_until<IF, FN>(
    iface: &mut IF,
    since: u32,
    timeout_us: u32,
    mut f: FN,
) -> Result<Option<u32>, IF::Error>
where
    IF: UltrasonicGpio + UltrasonicTimer,
    FN: FnMut(&mut IF) -> NbResult<(), IF::Error>,
{
    loop {
        let now = iface.now_us();
        if now.wrapping_sub(since) > timeout_us {
            return Ok(None);
        }
        match f(iface) {
            Ok(()) => return Ok(Some(now)),
            Err(nb::Error::WouldBlock) => {}
            Err(nb::Error::Other(e)) => return Err(e),
        }
    }
}

/// Waits for `pin` to read `level`, see [`wait_until`].
pub(crate) fn wait_for_level<IF>(
    iface: &mut IF,
    pin: PinId,
    level: Level,
    since: u32,
    timeout_us: u32,
) -> Result<Option<u32>, IF::Error>
where
    IF: UltrasonicGpio + UltrasonicTimer,
{
    wait_until(iface, since, timeout_us, |iface| {
        match iface.read_digital(pin) {
            Ok(current) if current == level => Ok(()),
            Ok(_) => Err(nb::Error::WouldBlock),
            Err(e) => Err(nb::Error::Other(e)),
        }
    })
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{MockGpioError, MockInterface};

    #[test]
    fn test_wait_until_ok_path() {
        let mut iface = MockInterface::new();
        let mut calls = 0;
        let result = wait_until(&mut iface, 0, 10_000, |iface| {
            calls += 1;
            iface.advance_time(1_000);
            if calls < 4 {
                Err(nb::Error::WouldBlock)
            } else {
                Ok(())
            }
        });
        // Stamped before the fourth poll ran
        assert_eq!(result, Ok(Some(3_000)));
        assert_eq!(calls, 4);
        assert_eq!(iface.current_time_us, 4_000);
    }

    #[test]
    fn test_wait_until_timeout_path() {
        let mut iface = MockInterface::new();
        let mut calls = 0;
        let result = wait_until(&mut iface, 0, 5_000, |iface| {
            calls += 1;
            iface.advance_time(2_000);
            Err(nb::Error::WouldBlock)
        });
        assert_eq!(result, Ok(None));
        // Polled at 0, 2000 and 4000; 6000 is past the window
        assert_eq!(calls, 3);
        assert_eq!(iface.current_time_us, 6_000);
    }

    #[test]
    fn test_wait_until_io_error_path() {
        let mut iface = MockInterface::new();
        let mut calls = 0;
        let result = wait_until(&mut iface, 0, 10_000, |iface| {
            calls += 1;
            iface.advance_time(1_000);
            if calls < 3 {
                Err(nb::Error::WouldBlock)
            } else {
                Err(nb::Error::Other(MockGpioError))
            }
        });
        assert_eq!(result, Err(MockGpioError));
        assert_eq!(calls, 3);
    }

    #[test]
    fn test_wait_until_accepts_success_exactly_at_deadline() {
        let mut iface = MockInterface::new();
        let result = wait_until(&mut iface, 0, 5_000, |iface| {
            if iface.current_time_us == 5_000 {
                Ok(())
            } else {
                iface.advance_time(1_000);
                Err(nb::Error::WouldBlock)
            }
        });
        assert_eq!(result, Ok(Some(5_000)));
    }

    #[test]
    fn test_wait_until_survives_counter_wraparound() {
        let mut iface = MockInterface::new();
        iface.current_time_us = u32::MAX - 500;
        let since = iface.current_time_us;
        let mut calls = 0;
        let result = wait_until(&mut iface, since, 2_000, |iface| {
            calls += 1;
            iface.advance_time(400);
            if calls < 3 {
                Err(nb::Error::WouldBlock)
            } else {
                Ok(())
            }
        });
        assert_eq!(result, Ok(Some(since.wrapping_add(800))));
    }
}
