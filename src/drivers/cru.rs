//! RK3588 clock/reset unit and GRF fields touched during board bring-up.
//!
//! All of these registers are write-masked (see [`hiword_field`]), so each
//! update is a single store with no read-back.

use tock_registers::register_bitfields;

use crate::hal::mmio::{RegisterAccess, hiword_field};

/// Clock controller (CRU) base address.
pub const CRU_BASE: usize = 0xfd7c_0000;
/// PMU1 clock controller base address.
pub const PMU1_CRU_BASE: usize = 0xfd7f_0000;

const CRU_CLKSEL_CON59: usize = 0x03ec;
const PMU1CRU_SOFTRST_CON04: usize = 0x0a10;

/// USB2 PHY GRF instances, one per PHY.
pub const USB2PHY_GRF_BASES: [usize; 4] = [0xfd5d_0000, 0xfd5d_4000, 0xfd5d_8000, 0xfd5d_c000];
const USB2PHY_GRF_CON2: usize = 0x0008;

register_bitfields! [u32,
    pub CLKSEL_CON59 [
        /// SPI2 kernel clock source.
        SPI2_SEL OFFSET(6) NUMBITS(2) [
            Gpll200M = 0,
            Cpll150M = 1,
            Xin24M = 2
        ]
    ],
    pub SOFTRST_CON04 [
        /// USB2 PHY block resets, one bit per reset domain.
        USB2PHY_RESET OFFSET(8) NUMBITS(3) []
    ],
    pub USB2PHY_GRF_CON2 [
        /// Holds the PHY in suspend when set.
        SUSPEND OFFSET(13) NUMBITS(1) []
    ]
];

/// Selects the 24 MHz oscillator as the SPI2 kernel clock.
pub fn select_spi2_xin24m<M: RegisterAccess + ?Sized>(regs: &mut M) {
    regs.write_register32(
        CRU_BASE + CRU_CLKSEL_CON59,
        hiword_field(
            CLKSEL_CON59::SPI2_SEL,
            CLKSEL_CON59::SPI2_SEL::Value::Xin24M as u32,
        ),
    );
}

/// Releases USB2 PHY `index` from suspend. Unknown PHYs are ignored.
pub fn usb2phy_resume<M: RegisterAccess + ?Sized>(regs: &mut M, index: usize) {
    let Some(&base) = USB2PHY_GRF_BASES.get(index) else {
        debug!("usb2phy{}: no such PHY", index);
        return;
    };
    regs.write_register32(
        base + USB2PHY_GRF_CON2,
        hiword_field(USB2PHY_GRF_CON2::SUSPEND, 0),
    );
}

/// Asserts, then releases, the USB2 PHY block resets.
pub fn usb2phy_reset_pulse<M: RegisterAccess + ?Sized>(regs: &mut M) {
    let addr = PMU1_CRU_BASE + PMU1CRU_SOFTRST_CON04;
    regs.write_register32(addr, hiword_field(SOFTRST_CON04::USB2PHY_RESET, 0b111));
    regs.write_register32(addr, hiword_field(SOFTRST_CON04::USB2PHY_RESET, 0));
}
