//! Ethernet PHY resets.
//!
//! PHY resets are keyed by MAC controller index alone, independent of the
//! segment table.

use crate::hal::gpio::{Line, PinTransport};

/// Reset wiring for the PHY attached to one MAC controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhyReset {
    pub controller: u32,
    pub line: Line,
}

impl PhyReset {
    pub const fn new(controller: u32, line: Line) -> Self {
        Self { controller, line }
    }
}

pub fn lookup(table: &'static [PhyReset], controller: u32) -> Option<&'static PhyReset> {
    table.iter().find(|phy| phy.controller == controller)
}

/// Drives the PHY reset of `controller` to its logical `asserted` state.
/// Unknown controllers are ignored.
pub fn set_reset<P: PinTransport + ?Sized>(
    pins: &mut P,
    table: &'static [PhyReset],
    controller: u32,
    asserted: bool,
) {
    match lookup(table, controller) {
        Some(phy) => {
            trace!("gmac{}: PHY reset {} on {}", controller, asserted, phy.line.pin);
            phy.line.drive(pins, asserted);
        }
        None => debug!("gmac{}: no PHY reset line", controller),
    }
}
