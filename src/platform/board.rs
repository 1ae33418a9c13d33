//! Board abstraction trait.
//!
//! A board is its tables. Everything the boot orchestrator calls is a
//! provided method that resolves the request against those tables and issues
//! the writes through the transport it is handed.

use crate::drivers::dtb::{BlobId, DtbVariants};
use crate::drivers::fan::{Fan, FanDescriptor};
use crate::drivers::pinmux::{self, MuxEntry, MuxGroup, Owner, PadClaim};
use crate::drivers::regulator::{self, PmicPinFunction};
use crate::drivers::segment::{SegmentDescriptor, SegmentId, SegmentResolver};
use crate::drivers::usb::{self, Usb2Phys};
use crate::drivers::{cru, indicator, phy};
use crate::error::{PlatformResult, RegulatorError};
use crate::hal::gpio::{Line, PinTransport};
use crate::hal::mmio::RegisterAccess;
use crate::hal::pwm::PwmTransport;
use crate::hal::regulator::{Rail, RegulatorEntry, RegulatorTransport};
use crate::hal::Hal;

/// Storage controllers with board-level pad routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageInterface {
    Sd,
    Emmc,
}

impl StorageInterface {
    pub const fn mux_group(self) -> MuxGroup {
        match self {
            StorageInterface::Sd => MuxGroup::Sdmmc,
            StorageInterface::Emmc => MuxGroup::Emmc,
        }
    }
}

/// Board-specific configuration trait.
pub trait Board {
    /// Board name.
    const NAME: &'static str;

    /// Pin-mux groups the board wires.
    const MUX_TABLE: &'static [MuxEntry];

    /// PMIC-internal pin routing, applied before the rails.
    const PMIC_PIN_FUNCTIONS: &'static [PmicPinFunction];

    /// Regulator init table. Order is supply order.
    const REGULATORS: &'static [RegulatorEntry];

    /// Rail feeding the little CPU cluster.
    const CPU_LITTLE_RAIL: Rail;

    /// Reset/power/detect wiring per segment.
    const SEGMENTS: &'static [SegmentDescriptor];

    /// Ethernet PHY resets by MAC index.
    const PHY_RESETS: &'static [phy::PhyReset];

    /// Ports whose VBUS switch the firmware turns on.
    const USB_PORTS: &'static [SegmentId];

    /// USB2 PHYs to resume.
    const USB2_PHYS: Usb2Phys;

    const FAN: FanDescriptor;

    const STATUS_LED: Option<Line>;

    const WIRELESS_ENABLE: Option<Line>;

    const DTB_VARIANTS: &'static DtbVariants;

    fn segments() -> SegmentResolver {
        SegmentResolver::new(Self::SEGMENTS)
    }

    fn configure_storage_mux<P: PinTransport + ?Sized>(pins: &mut P, interface: StorageInterface) {
        pinmux::configure(pins, Self::MUX_TABLE, interface.mux_group());
    }

    /// PMIC SPI pads, then the SPI clock source.
    fn configure_pmic_bus<H: PinTransport + RegisterAccess + ?Sized>(hal: &mut H) {
        pinmux::configure(hal, Self::MUX_TABLE, MuxGroup::PmicSpi);
        cru::select_spi2_xin24m(hal);
    }

    fn initialize_pmic<R: RegulatorTransport + ?Sized>(pmic: &mut R) -> Result<(), RegulatorError> {
        regulator::initialize(pmic, Self::PMIC_PIN_FUNCTIONS, Self::REGULATORS)
    }

    fn set_cpu_little_voltage<R: RegulatorTransport + ?Sized>(
        pmic: &mut R,
        microvolts: u32,
    ) -> Result<(), RegulatorError> {
        regulator::set_rail_voltage(pmic, Self::CPU_LITTLE_RAIL, microvolts)
    }

    fn configure_network_mux<P: PinTransport + ?Sized>(pins: &mut P, controller: u32) {
        match u8::try_from(controller) {
            Ok(id) => {
                pinmux::configure(pins, Self::MUX_TABLE, MuxGroup::Gmac(id));
            }
            Err(_) => debug!("gmac{}: no such controller", controller),
        }
    }

    fn set_network_phy_reset<P: PinTransport + ?Sized>(pins: &mut P, controller: u32, asserted: bool) {
        phy::set_reset(pins, Self::PHY_RESETS, controller, asserted);
    }

    fn configure_i2c_bus<P: PinTransport + ?Sized>(pins: &mut P, bus: u8) {
        pinmux::configure(pins, Self::MUX_TABLE, MuxGroup::I2c(bus));
    }

    fn enable_usb_port_power<P: PinTransport + ?Sized>(pins: &mut P) {
        usb::enable_port_power(pins, &Self::segments(), Self::USB_PORTS);
    }

    fn resume_usb_phys<M: RegisterAccess + ?Sized>(regs: &mut M) {
        usb::resume_phys(regs, Self::USB2_PHYS);
    }

    fn init_pcie_segment_io<P: PinTransport + ?Sized>(pins: &mut P, segment: SegmentId) {
        Self::segments().init_io(pins, segment);
    }

    fn set_pcie_power<P: PinTransport + ?Sized>(pins: &mut P, segment: SegmentId, enabled: bool) {
        Self::segments().set_power(pins, segment, enabled);
    }

    fn set_pcie_reset<P: PinTransport + ?Sized>(pins: &mut P, segment: SegmentId, asserted: bool) {
        Self::segments().set_reset(pins, segment, asserted);
    }

    /// `None` when the segment has no detect line.
    fn is_segment_present<P: PinTransport + ?Sized>(pins: &mut P, segment: SegmentId) -> Option<bool> {
        Self::segments().is_present(pins, segment)
    }

    /// Powers the output's connector (latch first, then direction), then
    /// muxes its signal pads.
    fn configure_display_output_mux<P: PinTransport + ?Sized>(pins: &mut P, output: u32) {
        let segment = match output {
            0 => SegmentId::DisplayOut0,
            1 => SegmentId::DisplayOut1,
            _ => {
                debug!("display output {}: not wired", output);
                return;
            }
        };
        let segments = Self::segments();
        segments.set_power(pins, segment, true);
        segments.init_io(pins, segment);
        pinmux::configure(pins, Self::MUX_TABLE, MuxGroup::HdmiTx(output as u8));
    }

    fn init_fan<H: PinTransport + PwmTransport + ?Sized>(hal: &mut H) -> Fan {
        Fan::setup(hal, &Self::FAN)
    }

    fn set_fan_speed<W: PwmTransport + ?Sized>(fan: &mut Fan, pwm: &mut W, percentage: u32) {
        fan.set_speed(pwm, percentage);
    }

    fn init_status_indicator<P: PinTransport + ?Sized>(pins: &mut P) {
        indicator::init_status(pins, Self::STATUS_LED);
    }

    fn set_status_indicator<P: PinTransport + ?Sized>(pins: &mut P, enabled: bool) {
        indicator::set_status(pins, Self::STATUS_LED, enabled);
    }

    fn set_wireless_enable<P: PinTransport + ?Sized>(pins: &mut P, enabled: bool) {
        indicator::set_wireless_enable(pins, Self::WIRELESS_ENABLE, enabled);
    }

    /// Blob for a raw compatibility-mode setting; `None` selects nothing.
    fn resolve_dtb_identifier(raw_mode: u32) -> Option<&'static BlobId> {
        let blob = Self::DTB_VARIANTS.resolve(raw_mode);
        match blob {
            Some(id) => info!("{}: DTB mode {} -> {}", Self::NAME, raw_mode, id),
            None => debug!("{}: DTB mode {} has no blob", Self::NAME, raw_mode),
        }
        blob
    }

    /// Radio on, headphone jack detect to GPIO.
    fn early_platform_init<P: PinTransport + ?Sized>(pins: &mut P) {
        Self::set_wireless_enable(pins, true);
        pinmux::configure(pins, Self::MUX_TABLE, MuxGroup::JackDetect);
    }

    /// Board-specific bring-up, in boot order. Returns the running fan.
    fn init<H: Hal + ?Sized>(hal: &mut H) -> PlatformResult<Fan> {
        info!("{}: platform init", Self::NAME);
        Self::early_platform_init(hal);
        Self::configure_pmic_bus(hal);
        Self::initialize_pmic(hal)
            .map_err(|err| anyhow::anyhow!("{}: PMIC bring-up failed: {}", Self::NAME, err))?;
        Self::enable_usb_port_power(hal);
        Self::resume_usb_phys(hal);
        Self::init_status_indicator(hal);
        let fan = Self::init_fan(hal);
        info!("{}: platform init done", Self::NAME);
        Ok(fan)
    }

    /// Every pad some table claims. Detect lines are sampled whatever the pad
    /// function is, so they claim nothing.
    fn pad_claims() -> impl Iterator<Item = PadClaim> + Clone {
        let mux = Self::MUX_TABLE.iter().flat_map(|entry| {
            entry
                .pins
                .iter()
                .map(move |pin_ref| PadClaim::mux(Owner::Mux(entry.group), pin_ref))
        });
        let segments = Self::SEGMENTS.iter().flat_map(|desc| {
            [desc.reset, desc.power]
                .into_iter()
                .flatten()
                .map(move |line| PadClaim::gpio(Owner::Segment(desc.id), line.pin))
        });
        let phys = Self::PHY_RESETS
            .iter()
            .map(|phy| PadClaim::gpio(Owner::PhyReset(phy.controller), phy.line.pin));
        let fan = core::iter::once(PadClaim::mux(Owner::Mux(MuxGroup::FanPwm), &Self::FAN.pad));
        let led = Self::STATUS_LED
            .map(|line| PadClaim::gpio(Owner::StatusLed, line.pin))
            .into_iter();
        let wireless = Self::WIRELESS_ENABLE
            .map(|line| PadClaim::gpio(Owner::WirelessEnable, line.pin))
            .into_iter();
        mux.chain(segments)
            .chain(phys)
            .chain(fan)
            .chain(led)
            .chain(wireless)
    }

    /// Pairs of claims that would overwrite each other's pad setup. Each pair
    /// is logged as it is found.
    fn pad_conflicts() -> impl Iterator<Item = (PadClaim, PadClaim)> {
        pinmux::conflicts(Self::pad_claims()).inspect(|(first, second)| {
            warn!("{}: pad conflict: {} vs {}", Self::NAME, first, second);
        })
    }
}
