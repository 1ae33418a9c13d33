//! HAL (Hardware Abstraction Layer) module.
//!
//! The registry never touches hardware directly. It consumes four narrow
//! transports supplied by the firmware:
//!
//! - [`PinTransport`]: bank/pin addressed pad writes (mux, direction, pull, level).
//! - [`RegulatorTransport`]: the PMIC driver.
//! - [`PwmTransport`]: PWM channel programming.
//! - [`RegisterAccess`]: raw 32-bit MMIO, handed only to the few operations
//!   that need it (clock selector, USB PHY resume).

pub mod gpio;
pub mod mmio;
pub mod pwm;
pub mod regulator;

pub use gpio::PinTransport;
pub use mmio::RegisterAccess;
pub use pwm::PwmTransport;
pub use regulator::RegulatorTransport;

/// Everything the composite board bring-up needs.
///
/// Firmware environments usually expose all four transports from one object;
/// any type implementing them gets this for free.
pub trait Hal: PinTransport + RegulatorTransport + PwmTransport + RegisterAccess {}

impl<T> Hal for T where T: PinTransport + RegulatorTransport + PwmTransport + RegisterAccess {}
