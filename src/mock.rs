// src/mock.rs

// Simulated sensor wiring shared by the unit tests. Time only moves when the
// code under test delays, reads a pin, or a test advances it explicitly.

use crate::common::{Level, PinDirection, PinId, UltrasonicGpio, UltrasonicTimer};

pub(crate) const MOCK_TRIGGER: PinId = PinId::new(3);
pub(crate) const MOCK_ECHO: PinId = PinId::new(4);

// --- Mock GPIO Error ---
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct MockGpioError;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum PinEvent {
    Mode(PinId, PinDirection),
    Write(PinId, Level),
    Delay(u32),
}

/// Echo pulse the simulated sensor answers each trigger with.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct EchoScript {
    /// Time from the trigger falling edge to the echo rising edge.
    pub delay_us: u32,
    /// How long the echo stays HIGH.
    pub width_us: u32,
}

#[derive(Debug, Clone)]
pub(crate) struct MockInterface {
    pub current_time_us: u32,
    pub echo_pin: PinId,
    pub echo: Option<EchoScript>,
    pub events: heapless::Vec<PinEvent, 64>,
    pub reads: u32,
    pub fail_reads: bool,
    pub fail_writes: bool,
    trigger_high: bool,
    released_at: Option<u32>,
}

impl MockInterface {
    /// Wiring with nothing in front of the sensor: the echo never rises.
    pub fn new() -> Self {
        MockInterface {
            current_time_us: 0,
            echo_pin: MOCK_ECHO,
            echo: None,
            events: heapless::Vec::new(),
            reads: 0,
            fail_reads: false,
            fail_writes: false,
            trigger_high: false,
            released_at: None,
        }
    }

    pub fn with_echo(delay_us: u32, width_us: u32) -> Self {
        let mut mock = Self::new();
        mock.echo = Some(EchoScript { delay_us, width_us });
        mock
    }

    pub fn advance_time(&mut self, us: u32) {
        self.current_time_us = self.current_time_us.wrapping_add(us);
    }

    fn record(&mut self, event: PinEvent) {
        // Full log just stops recording
        let _ = self.events.push(event);
    }

    fn echo_level(&self) -> Level {
        match (self.released_at, self.echo) {
            (Some(released), Some(script)) => {
                let since_release = self.current_time_us.wrapping_sub(released);
                let high = since_release >= script.delay_us
                    && since_release - script.delay_us < script.width_us;
                Level::from(high)
            }
            _ => Level::Low,
        }
    }
}

impl UltrasonicTimer for MockInterface {
    fn delay_us(&mut self, us: u32) {
        self.record(PinEvent::Delay(us));
        self.advance_time(us);
    }

    fn now_us(&self) -> u32 {
        self.current_time_us
    }
}

impl UltrasonicGpio for MockInterface {
    type Error = MockGpioError;

    fn set_pin_mode(&mut self, pin: PinId, direction: PinDirection) -> Result<(), Self::Error> {
        if self.fail_writes {
            return Err(MockGpioError);
        }
        self.record(PinEvent::Mode(pin, direction));
        Ok(())
    }

    fn write_digital(&mut self, pin: PinId, level: Level) -> Result<(), Self::Error> {
        if self.fail_writes {
            return Err(MockGpioError);
        }
        self.record(PinEvent::Write(pin, level));
        match level {
            Level::High => self.trigger_high = true,
            Level::Low if self.trigger_high => {
                self.trigger_high = false;
                self.released_at = Some(self.current_time_us);
            }
            Level::Low => {}
        }
        Ok(())
    }

    fn read_digital(&mut self, pin: PinId) -> Result<Level, Self::Error> {
        self.reads += 1;
        if self.fail_reads {
            return Err(MockGpioError);
        }
        let level = if pin == self.echo_pin {
            self.echo_level()
        } else {
            Level::Low
        };
        // Each sample costs a microsecond
        self.advance_time(1);
        Ok(level)
    }
}
