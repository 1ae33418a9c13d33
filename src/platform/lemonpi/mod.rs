//! LemonPi (RK3588) board support.

pub mod config;


use super::board::Board;
use crate::drivers::dtb::DtbVariants;
use crate::drivers::fan::FanDescriptor;
use crate::drivers::phy::PhyReset;
use crate::drivers::pinmux::MuxEntry;
use crate::drivers::regulator::PmicPinFunction;
use crate::drivers::segment::{SegmentDescriptor, SegmentId};
use crate::drivers::usb::Usb2Phys;
use crate::hal::gpio::Line;
use crate::hal::regulator::{Rail, RegulatorEntry};

pub struct LemonPi;

impl Board for LemonPi {
    const NAME: &'static str = config::BOARD_NAME;
    const MUX_TABLE: &'static [MuxEntry] = config::MUX_TABLE;
    const PMIC_PIN_FUNCTIONS: &'static [PmicPinFunction] = config::PMIC_PIN_FUNCTIONS;
    const REGULATORS: &'static [RegulatorEntry] = config::REGULATORS;
    const CPU_LITTLE_RAIL: Rail = config::CPU_LITTLE_RAIL;
    const SEGMENTS: &'static [SegmentDescriptor] = config::SEGMENTS;
    const PHY_RESETS: &'static [PhyReset] = config::PHY_RESETS;
    const USB_PORTS: &'static [SegmentId] = config::USB_PORTS;
    const USB2_PHYS: Usb2Phys = Usb2Phys::all();
    const FAN: FanDescriptor = config::FAN;
    const STATUS_LED: Option<Line> = Some(config::STATUS_LED);
    const WIRELESS_ENABLE: Option<Line> = Some(config::WIFI_REG_ON);
    const DTB_VARIANTS: &'static DtbVariants = config::DTB_VARIANTS;
}
