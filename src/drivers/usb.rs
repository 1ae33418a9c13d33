//! USB VBUS switches and USB2 PHY resume.

use crate::drivers::cru;
use crate::drivers::segment::{SegmentId, SegmentResolver};
use crate::hal::gpio::PinTransport;
use crate::hal::mmio::RegisterAccess;

bitflags::bitflags! {
    /// USB2 PHY instances.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Usb2Phys: u8 {
        const PHY0 = 1 << 0;
        const PHY1 = 1 << 1;
        const PHY2 = 1 << 2;
        const PHY3 = 1 << 3;
    }
}

impl Usb2Phys {
    /// Indices of the selected PHYs, ascending.
    pub fn indices(self) -> impl Iterator<Item = usize> {
        self.iter().map(|phy| phy.bits().trailing_zeros() as usize)
    }
}

/// Turns on VBUS for each port: the switch's output latch is loaded before
/// its pad becomes an output.
pub fn enable_port_power<P: PinTransport + ?Sized>(
    pins: &mut P,
    segments: &SegmentResolver,
    ports: &[SegmentId],
) {
    for &port in ports {
        segments.set_power(pins, port, true);
        segments.init_io(pins, port);
    }
    info!("USB: VBUS enabled on {} port(s)", ports.len());
}

/// Takes the selected USB2 PHYs out of suspend, then pulses the PHY resets.
pub fn resume_phys<M: RegisterAccess + ?Sized>(regs: &mut M, phys: Usb2Phys) {
    for index in phys.indices() {
        cru::usb2phy_resume(regs, index);
    }
    cru::usb2phy_reset_pulse(regs);
    debug!("USB: resumed PHYs {:?}", phys);
}
