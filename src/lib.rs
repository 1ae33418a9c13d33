//! LemonPi board support - RK3588 resource registry.
//!
//! Every board resource the firmware brings up (storage pads, PCIe slot
//! resets, USB power rails, display outputs, the fan, the status LED, network
//! PHY resets and the device-tree variant) is described by an immutable table.
//! The drivers in [`drivers`] walk those tables in order and issue pad,
//! regulator, PWM and raw register writes through the transports in [`hal`].
//!
//! Nothing here owns hardware state: the pads are the state. Every operation
//! runs synchronously on the boot CPU and may be repeated.

#![cfg_attr(not(test), no_std)]

#[macro_use]
extern crate log;

pub mod drivers;
pub mod error;
pub mod hal;
pub mod platform;

#[cfg(test)]
mod testing;

pub use error::{PlatformResult, RegulatorError};
pub use platform::{CurrentBoard, board::Board};
