//! Pad addressing and the pin transport.
//!
//! RK3588 pads are addressed as `GPIO<bank>_<port><index>`, e.g. `GPIO4_C6`
//! is bank 4, port C, index 6, which the GPIO controller numbers as pin
//! `2 * 8 + 6 = 22`.

use core::fmt;

/// Port letter within a GPIO bank. Each port holds eight pins.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Port {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
}

/// A physical pad, unique per `(bank, pin)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GpioPin {
    bank: u8,
    pin: u8,
}

impl GpioPin {
    /// Number of GPIO banks on the SoC.
    pub const BANKS: u8 = 5;

    pub const fn new(bank: u8, port: Port, index: u8) -> Self {
        assert!(bank < Self::BANKS, "GPIO bank out of range");
        assert!(index < 8, "GPIO port index out of range");
        Self {
            bank,
            pin: port as u8 * 8 + index,
        }
    }

    #[inline]
    pub const fn bank(&self) -> u8 {
        self.bank
    }

    /// Pin number within the bank (0..32).
    #[inline]
    pub const fn pin(&self) -> u8 {
        self.pin
    }

    #[inline]
    pub const fn same_pad(&self, other: &GpioPin) -> bool {
        self.bank == other.bank && self.pin == other.pin
    }
}

impl fmt::Display for GpioPin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let port = (b'A' + self.pin / 8) as char;
        write!(f, "GPIO{}_{}{}", self.bank, port, self.pin % 8)
    }
}

/// Physical line level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Low,
    High,
}

impl Level {
    #[inline]
    pub const fn is_high(self) -> bool {
        matches!(self, Level::High)
    }
}

impl core::ops::Not for Level {
    type Output = Level;

    fn not(self) -> Level {
        match self {
            Level::Low => Level::High,
            Level::High => Level::Low,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Input,
    Output,
}

/// Pad bias.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pull {
    None,
    Up,
    Down,
}

/// How a logical "asserted" state maps onto the physical line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    ActiveHigh,
    ActiveLow,
}

impl Polarity {
    /// Physical level encoding the given logical state.
    #[inline]
    pub const fn level(self, asserted: bool) -> Level {
        match (self, asserted) {
            (Polarity::ActiveHigh, true) | (Polarity::ActiveLow, false) => Level::High,
            (Polarity::ActiveHigh, false) | (Polarity::ActiveLow, true) => Level::Low,
        }
    }

    /// Logical state encoded by a physical level.
    #[inline]
    pub const fn is_asserted(self, level: Level) -> bool {
        match self {
            Polarity::ActiveHigh => level.is_high(),
            Polarity::ActiveLow => !level.is_high(),
        }
    }
}

/// A GPIO line with its wiring polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    pub pin: GpioPin,
    pub polarity: Polarity,
}

impl Line {
    pub const fn active_high(pin: GpioPin) -> Self {
        Self {
            pin,
            polarity: Polarity::ActiveHigh,
        }
    }

    pub const fn active_low(pin: GpioPin) -> Self {
        Self {
            pin,
            polarity: Polarity::ActiveLow,
        }
    }

    /// Drives the line to the level encoding `asserted`.
    pub fn drive<P: PinTransport + ?Sized>(&self, pins: &mut P, asserted: bool) {
        pins.write_pin(self.pin, self.polarity.level(asserted));
    }

    /// Loads the output latch first, then turns the pad into an output, so the
    /// line never shows the latch's stale value.
    pub fn drive_as_output<P: PinTransport + ?Sized>(&self, pins: &mut P, asserted: bool) {
        self.drive(pins, asserted);
        pins.set_pin_direction(self.pin, Direction::Output);
    }

    /// Samples the line and decodes it to a logical state.
    pub fn sample<P: PinTransport + ?Sized>(&self, pins: &mut P) -> bool {
        self.polarity.is_asserted(pins.read_pin(self.pin))
    }
}

/// Pad-level access provided by the firmware GPIO library.
///
/// Every call is a single fire-and-forget register write. There is no status:
/// addressing a pad that does not exist is outside this layer's contract.
pub trait PinTransport {
    fn read_pin(&mut self, pin: GpioPin) -> Level;
    fn write_pin(&mut self, pin: GpioPin, level: Level);
    fn set_pin_function(&mut self, pin: GpioPin, function: u8);
    fn set_pin_direction(&mut self, pin: GpioPin, direction: Direction);
    fn set_pin_pull(&mut self, pin: GpioPin, pull: Pull);
}
