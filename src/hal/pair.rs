// src/hal/pair.rs

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};

use super::{HalError, MicrosClock};
use crate::common::{Level, PinDirection, PinId, UltrasonicGpio, UltrasonicTimer};
use crate::sensor::Ultrasonic;

/// Dedicated trigger and echo pins of a 4-pin sensor (HC-SR04 style).
///
/// Pin directions are fixed by the HAL types, so `set_pin_mode` only checks
/// that the requested direction matches the wiring.
#[derive(Debug)]
pub struct PinPair<T, E, D, C> {
    trigger: T,
    echo: E,
    delay: D,
    clock: C,
}

impl<T, E, D, C> PinPair<T, E, D, C>
where
    T: OutputPin,
    E: InputPin,
    D: DelayNs,
    C: MicrosClock,
{
    pub const TRIGGER: PinId = PinId::new(0);
    pub const ECHO: PinId = PinId::new(1);

    pub fn new(trigger: T, echo: E, delay: D, clock: C) -> Self {
        PinPair { trigger, echo, delay, clock }
    }

    /// Wraps the pair into a two-pin sensor with the default timeout.
    pub fn into_sensor(self) -> Ultrasonic<Self> {
        Ultrasonic::new_two_pin(self, Self::TRIGGER, Self::ECHO)
    }

    pub fn release(self) -> (T, E, D, C) {
        (self.trigger, self.echo, self.delay, self.clock)
    }
}

impl<T, E, D, C> UltrasonicGpio for PinPair<T, E, D, C>
where
    T: OutputPin,
    E: InputPin,
    D: DelayNs,
    C: MicrosClock,
{
    type Error = HalError;

    fn set_pin_mode(&mut self, pin: PinId, direction: PinDirection) -> Result<(), Self::Error> {
        match (pin, direction) {
            (p, PinDirection::Output) if p == Self::TRIGGER => Ok(()),
            (p, PinDirection::Input) if p == Self::ECHO => Ok(()),
            (p, direction) if p == Self::TRIGGER || p == Self::ECHO => {
                Err(HalError::Unsupported { pin: p, direction })
            }
            (p, _) => Err(HalError::UnknownPin(p)),
        }
    }

    fn write_digital(&mut self, pin: PinId, level: Level) -> Result<(), Self::Error> {
        if pin == Self::TRIGGER {
            self.trigger.set_state(level.into()).map_err(HalError::pin)
        } else if pin == Self::ECHO {
            Err(HalError::Unsupported { pin, direction: PinDirection::Output })
        } else {
            Err(HalError::UnknownPin(pin))
        }
    }

    fn read_digital(&mut self, pin: PinId) -> Result<Level, Self::Error> {
        if pin == Self::ECHO {
            self.echo.is_high().map(Level::from).map_err(HalError::pin)
        } else if pin == Self::TRIGGER {
            Err(HalError::Unsupported { pin, direction: PinDirection::Input })
        } else {
            Err(HalError::UnknownPin(pin))
        }
    }
}

impl<T, E, D, C> UltrasonicTimer for PinPair<T, E, D, C>
where
    T: OutputPin,
    E: InputPin,
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
