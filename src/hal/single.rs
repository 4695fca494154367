// src/hal/single.rs

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};

use super::{FlexPin, HalError, MicrosClock};
use crate::common::{Level, PinDirection, PinId, UltrasonicGpio, UltrasonicTimer};
use crate::sensor::Ultrasonic;

/// The shared signal line of a 3-pin sensor (Ping))), Grove style).
#[derive(Debug)]
pub struct SinglePin<P, D, C> {
    signal: P,
    delay: D,
    clock: C,
}

impl<P, D, C> SinglePin<P, D, C>
where
    P: FlexPin,
    D: DelayNs,
    C: MicrosClock,
{
    pub const SIGNAL: PinId = PinId::new(0);

    pub fn new(signal: P, delay: D, clock: C) -> Self {
        SinglePin { signal, delay, clock }
    }

    /// Wraps the pin into a single-pin sensor with the default timeout.
    pub fn into_sensor(self) -> Ultrasonic<Self> {
        Ultrasonic::new_single_pin(self, Self::SIGNAL)
    }

    pub fn release(self) -> (P, D, C) {
        (self.signal, self.delay, self.clock)
    }

    fn check(pin: PinId) -> Result<(), HalError> {
        if pin == Self::SIGNAL {
            Ok(())
        } else {
            Err(HalError::UnknownPin(pin))
        }
    }
}

impl<P, D, C> UltrasonicGpio for SinglePin<P, D, C>
where
    P: FlexPin,
    D: DelayNs,
    C: MicrosClock,
{
    type Error = HalError;

    fn set_pin_mode(&mut self, pin: PinId, direction: PinDirection) -> Result<(), Self::Error> {
        Self::check(pin)?;
        self.signal.set_direction(direction).map_err(HalError::pin)
    }

    fn write_digital(&mut self, pin: PinId, level: Level) -> Result<(), Self::Error> {
        Self::check(pin)?;
        self.signal.set_state(level.into()).map_err(HalError::pin)
    }

    fn read_digital(&mut self, pin: PinId) -> Result<Level, Self::Error> {
        Self::check(pin)?;
        self.signal.is_high().map(Level::from).map_err(HalError::pin)
    }
}

impl<P, D, C> UltrasonicTimer for SinglePin<P, D, C>
where
    P: FlexPin,
    D: DelayNs,
    C: MicrosClock,
{
    fn delay_us(&mut self, us: u32) {
        self.delay.delay_us(us);
    }

    fn now_us(&self) -> u32 {
        self.clock.now_us()
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Measurement;
    use core::cell::Cell;
    use embedded_hal::digital::ErrorType;
    use embedded_hal_mock::eh1::delay::NoopDelay;
    use embedded_hal_mock::eh1::digital::{Mock as PinMock, State, Transaction};

    // Mock pin plus a log of the directions it was switched to
    struct FlexMock {
        inner: PinMock,
        directions: heapless::Vec<PinDirection, 8>,
    }

    impl ErrorType for FlexMock {
        type Error = <PinMock as ErrorType>::Error;
    }

    impl InputPin for FlexMock {
        fn is_high(&mut self) -> Result<bool, Self::Error> {
            self.inner.is_high()
        }

        fn is_low(&mut self) -> Result<bool, Self::Error> {
            self.inner.is_low()
        }
    }

    impl OutputPin for FlexMock {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.inner.set_low()
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.inner.set_high()
        }
    }

    impl FlexPin for FlexMock {
        fn set_direction(&mut self, direction: PinDirection) -> Result<(), Self::Error> {
            let _ = self.directions.push(direction);
            Ok(())
        }
    }

    #[test]
    fn test_single_pin_measures_echo() {
        let ticks = Cell::new(0u32);
        let clock = || {
            let now = ticks.get();
            ticks.set(now + 250);
            now
        };
        let inner = PinMock::new(&[
            Transaction::set(State::Low),
            Transaction::set(State::High),
            Transaction::set(State::Low),
            Transaction::get(State::Low),
            Transaction::get(State::High),
            Transaction::get(State::Low),
        ]);
        let pin = FlexMock { inner, directions: heapless::Vec::new() };

        let mut sensor = SinglePin::new(pin, NoopDelay::new(), clock).into_sensor();
        assert!(sensor.is_single_pin());
        assert_eq!(sensor.measure(), Ok(Measurement::Echo { duration_us: 250 }));

        let (mut pin, _, _) = sensor.release().release();
        assert_eq!(&pin.directions[..], &[PinDirection::Output, PinDirection::Input]);
        pin.inner.done();
    }

    #[test]
    fn test_single_pin_rejects_other_ids() {
        let pin = FlexMock { inner: PinMock::new(&[]), directions: heapless::Vec::new() };
        let mut single = SinglePin::new(pin, NoopDelay::new(), || 0u32);
        let stray = PinId::new(3);

        assert_eq!(
            single.set_pin_mode(stray, PinDirection::Input),
            Err(HalError::UnknownPin(stray))
        );
        assert_eq!(single.write_digital(stray, Level::High), Err(HalError::UnknownPin(stray)));
        assert_eq!(single.read_digital(stray), Err(HalError::UnknownPin(stray)));

        let (mut pin, _, _) = single.release();
        assert!(pin.directions.is_empty());
        pin.inner.done();
    }
}
