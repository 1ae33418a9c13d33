//! LemonPi board configuration.

use crate::drivers::dtb::{BlobId, DtbVariants};
use crate::drivers::fan::FanDescriptor;
use crate::drivers::phy::PhyReset;
use crate::drivers::pinmux::{self, MuxEntry, MuxGroup, PinRef};
use crate::drivers::regulator::PmicPinFunction;
use crate::drivers::segment::{SegmentDescriptor, SegmentId};
use crate::hal::gpio::{GpioPin, Line, Port, Pull};
use crate::hal::pwm::{PwmChannel, PwmChannelId, PwmController};
use crate::hal::regulator::{PmicChip, Rail, RegulatorEntry};

pub const BOARD_NAME: &str = "LemonPi";

const fn pin(bank: u8, port: Port, index: u8) -> GpioPin {
    GpioPin::new(bank, port, index)
}

const SDMMC_PINS: &[PinRef] = &[
    PinRef::new(pin(4, Port::D, 0), 1), // sdmmc_d0
    PinRef::new(pin(4, Port::D, 1), 1),
    PinRef::new(pin(4, Port::D, 2), 1),
    PinRef::new(pin(4, Port::D, 3), 1),
    PinRef::new(pin(4, Port::D, 4), 1), // sdmmc_clk
    PinRef::new(pin(4, Port::D, 5), 1), // sdmmc_cmd
    PinRef::new(pin(0, Port::A, 4), 1), // sdmmc_det
];

const EMMC_PINS: &[PinRef] = &[
    PinRef::new(pin(2, Port::A, 0), 1), // emmc_cmd
    PinRef::new(pin(2, Port::A, 1), 1), // emmc_clkout
    PinRef::new(pin(2, Port::A, 2), 1), // emmc_datastrobe
    PinRef::new(pin(2, Port::A, 3), 1), // emmc_rstn
    PinRef::new(pin(2, Port::D, 0), 1), // emmc_d0
    PinRef::new(pin(2, Port::D, 1), 1),
    PinRef::new(pin(2, Port::D, 2), 1),
    PinRef::new(pin(2, Port::D, 3), 1),
    PinRef::new(pin(2, Port::D, 4), 1),
    PinRef::new(pin(2, Port::D, 5), 1),
    PinRef::new(pin(2, Port::D, 6), 1),
    PinRef::new(pin(2, Port::D, 7), 1),
];

/// SPI2 M2 to the PMIC.
const PMIC_SPI_PINS: &[PinRef] = &[
    PinRef::new(pin(0, Port::A, 5), 1),
    PinRef::new(pin(0, Port::A, 6), 1),
    PinRef::new(pin(0, Port::B, 0), 1),
    PinRef::new(pin(0, Port::B, 1), 1),
    PinRef::new(pin(0, Port::B, 3), 1),
];

const I2C0_PINS: &[PinRef] = &[
    PinRef::new(pin(0, Port::D, 1), 3), // scl_m2
    PinRef::new(pin(0, Port::D, 2), 3), // sda_m2
];
const I2C1_PINS: &[PinRef] = &[
    PinRef::new(pin(0, Port::D, 4), 9),
    PinRef::new(pin(0, Port::D, 5), 9),
];
const I2C3_PINS: &[PinRef] = &[
    PinRef::new(pin(1, Port::C, 1), 9),
    PinRef::new(pin(1, Port::C, 0), 9),
];
const I2C4_PINS: &[PinRef] = &[
    PinRef::new(pin(4, Port::C, 4), 9),
    PinRef::new(pin(4, Port::C, 5), 9),
];
/// M2 routing, shared with the eMMC command/clock pads.
const I2C5_PINS: &[PinRef] = &[
    PinRef::new(pin(2, Port::A, 0), 9),
    PinRef::new(pin(2, Port::A, 1), 9),
];
const I2C6_PINS: &[PinRef] = &[
    PinRef::new(pin(0, Port::D, 0), 9),
    PinRef::new(pin(0, Port::C, 7), 9),
];
const I2C7_PINS: &[PinRef] = &[
    PinRef::new(pin(1, Port::D, 0), 9),
    PinRef::new(pin(1, Port::D, 1), 9),
];

const HDMI_TX1_PINS: &[PinRef] = &[
    PinRef::new(pin(3, Port::C, 4), 5).with_pull(Pull::None),
    PinRef::new(pin(1, Port::A, 6), 5).with_pull(Pull::None),
    PinRef::new(pin(3, Port::C, 6), 5).with_pull(Pull::None),
    PinRef::new(pin(3, Port::C, 5), 5).with_pull(Pull::None),
];

const JACK_DETECT_PINS: &[PinRef] = &[PinRef::new(pin(1, Port::D, 3), pinmux::FUNC_GPIO)];

pub const MUX_TABLE: &[MuxEntry] = &[
    MuxEntry::new(MuxGroup::Sdmmc, SDMMC_PINS),
    MuxEntry::new(MuxGroup::Emmc, EMMC_PINS),
    MuxEntry::new(MuxGroup::PmicSpi, PMIC_SPI_PINS),
    MuxEntry::new(MuxGroup::I2c(0), I2C0_PINS),
    MuxEntry::new(MuxGroup::I2c(1), I2C1_PINS),
    MuxEntry::new(MuxGroup::I2c(3), I2C3_PINS),
    MuxEntry::new(MuxGroup::I2c(4), I2C4_PINS),
    MuxEntry::new(MuxGroup::I2c(5), I2C5_PINS),
    MuxEntry::new(MuxGroup::I2c(6), I2C6_PINS),
    MuxEntry::new(MuxGroup::I2c(7), I2C7_PINS),
    MuxEntry::new(MuxGroup::HdmiTx(1), HDMI_TX1_PINS),
    MuxEntry::new(MuxGroup::JackDetect, JACK_DETECT_PINS),
];

const _: () = assert!(pinmux::table_is_consistent(MUX_TABLE));

/// DVS1 pin of the master PMIC as power-down input.
pub const PMIC_PIN_FUNCTIONS: &[PmicPinFunction] = &[PmicPinFunction {
    chip: PmicChip::Master,
    pin: 1,
    function: 2,
}];

pub const REGULATORS: &[RegulatorEntry] = &[
    RegulatorEntry::voltage(Rail::Buck1, 750_000),
    RegulatorEntry::voltage(Rail::Buck3, 750_000),
    RegulatorEntry::voltage(Rail::Buck4, 750_000),
    RegulatorEntry::voltage(Rail::Buck5, 850_000),
    RegulatorEntry::voltage(Rail::Buck7, 2_000_000),
    RegulatorEntry::voltage(Rail::Buck8, 3_300_000),
    RegulatorEntry::voltage(Rail::Buck10, 1_800_000),
    RegulatorEntry::voltage(Rail::Nldo1, 750_000),
    RegulatorEntry::voltage(Rail::Nldo2, 850_000),
    RegulatorEntry::voltage(Rail::Nldo3, 837_500),
    RegulatorEntry::voltage(Rail::Nldo4, 850_000),
    RegulatorEntry::voltage(Rail::Nldo5, 750_000),
    RegulatorEntry::voltage(Rail::Pldo1, 1_800_000),
    RegulatorEntry::voltage(Rail::Pldo2, 1_800_000),
    RegulatorEntry::voltage(Rail::Pldo3, 1_200_000),
    RegulatorEntry::voltage(Rail::Pldo4, 3_300_000),
    RegulatorEntry::voltage(Rail::Pldo5, 3_300_000),
    RegulatorEntry::voltage(Rail::Pldo6, 1_800_000),
];

pub const CPU_LITTLE_RAIL: Rail = Rail::Buck2;

/// microSD card detect, low when a card is inserted.
pub const SD_DETECT: Line = Line::active_low(pin(0, Port::A, 4));
/// PCIe3x4 M.2 M-key slot.
pub const PCIE0_PERST: Line = Line::active_low(pin(1, Port::B, 2));
/// PCIe2 L0, M.2 A+E-key slot.
pub const PCIE1_PERST: Line = Line::active_low(pin(4, Port::A, 5));
pub const VCC5V0_HOST_EN: Line = Line::active_high(pin(2, Port::B, 5));
pub const TYPEC5V_PWREN: Line = Line::active_high(pin(4, Port::A, 3));
pub const HDMI_TX1_PWREN: Line = Line::active_high(pin(1, Port::C, 6));

pub const SEGMENTS: &[SegmentDescriptor] = &[
    SegmentDescriptor::new(SegmentId::StorageSd).with_detect(SD_DETECT),
    SegmentDescriptor::new(SegmentId::PciePort0).with_reset(PCIE0_PERST),
    SegmentDescriptor::new(SegmentId::PciePort1).with_reset(PCIE1_PERST),
    SegmentDescriptor::new(SegmentId::UsbPortA).with_power(VCC5V0_HOST_EN),
    SegmentDescriptor::new(SegmentId::UsbPortB).with_power(TYPEC5V_PWREN),
    SegmentDescriptor::new(SegmentId::DisplayOut1).with_power(HDMI_TX1_PWREN),
];

pub const PHY_RESETS: &[PhyReset] = &[
    PhyReset::new(0, Line::active_low(pin(4, Port::C, 6))),
    PhyReset::new(1, Line::active_low(pin(3, Port::B, 7))),
];

pub const USB_PORTS: &[SegmentId] = &[SegmentId::UsbPortA, SegmentId::UsbPortB];

pub const FAN: FanDescriptor = FanDescriptor {
    pad: PinRef::new(pin(1, Port::C, 4), 2),
    channel: PwmChannelId {
        controller: PwmController::Pwm1,
        channel: PwmChannel::Channel0,
    },
    period_ns: 20_000,
    inverted: false,
};

pub const STATUS_LED: Line = Line::active_low(pin(0, Port::D, 3));
pub const WIFI_REG_ON: Line = Line::active_low(pin(0, Port::C, 6));

pub const DTB_VARIANTS: &DtbVariants = &DtbVariants {
    vendor: BlobId::new(
        0xd58b_4028,
        0x43d8,
        0x4e97,
        [0x87, 0xd4, 0x4e, 0x37, 0x16, 0x13, 0x65, 0x80],
    ),
    mainline: BlobId::new(
        0x8449_2e97,
        0xa10f,
        0x49a7,
        [0x85, 0xe9, 0x02, 0x5d, 0x19, 0x66, 0xb3, 0x43],
    ),
};
