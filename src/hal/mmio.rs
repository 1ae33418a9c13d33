//! Raw memory-mapped register access.
//!
//! Only the clock selector and USB PHY resume paths reach for this; every
//! other resource goes through the pin/regulator/PWM transports.

use core::ptr;

use tock_registers::{RegisterLongName, fields::Field};

/// 32-bit MMIO reads and writes at physical addresses.
pub trait RegisterAccess {
    fn read_register32(&mut self, addr: usize) -> u32;
    fn write_register32(&mut self, addr: usize, value: u32);
}

/// Volatile access through a linear physical-to-virtual mapping.
pub struct Mmio {
    phys_virt_offset: usize,
}

impl Mmio {
    /// # Safety
    ///
    /// Every SoC register window must be mapped as device memory at
    /// `phys + phys_virt_offset`, and the caller must be the only writer of
    /// the registers it touches through this handle.
    pub const unsafe fn new(phys_virt_offset: usize) -> Self {
        Self { phys_virt_offset }
    }

    /// Firmware runs with an identity map.
    ///
    /// # Safety
    ///
    /// Same contract as [`Mmio::new`] with a zero offset.
    pub const unsafe fn identity() -> Self {
        Self {
            phys_virt_offset: 0,
        }
    }

    #[inline]
    fn virt(&self, addr: usize) -> usize {
        addr + self.phys_virt_offset
    }
}

impl RegisterAccess for Mmio {
    fn read_register32(&mut self, addr: usize) -> u32 {
        unsafe { ptr::read_volatile(self.virt(addr) as *const u32) }
    }

    fn write_register32(&mut self, addr: usize, value: u32) {
        unsafe { ptr::write_volatile(self.virt(addr) as *mut u32, value) }
    }
}

/// Encodes a Rockchip write-masked update.
///
/// GRF and CRU registers only latch bits whose write-enable bit (upper half
/// word) is set, so no read-modify-write is needed.
#[inline]
pub const fn hiword_update(mask: u16, value: u16) -> u32 {
    ((mask as u32) << 16) | (value & mask) as u32
}

/// [`hiword_update`] for a single bitfield.
#[inline]
pub fn hiword_field<R: RegisterLongName>(field: Field<u32, R>, value: u32) -> u32 {
    let mask = field.mask << field.shift;
    let bits = (value & field.mask) << field.shift;
    debug_assert!(mask <= 0xffff, "write-masked registers are 16 bits wide");
    hiword_update(mask as u16, bits as u16)
}
