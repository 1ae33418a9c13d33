//! Segment resolver: reset, power and detect wiring per bus instance.
//!
//! A segment is one interface instance (a PCIe slot, a USB port, a storage
//! socket). Its lines are looked up in an immutable table keyed by
//! [`SegmentId`]; a segment missing from the table, or lacking a given line,
//! turns every operation on that line into a no-op.
//!
//! Per segment, the boot flow moves Uninitialized -> IoReady with
//! [`SegmentResolver::init_io`], then toggles reset and power independently.
//! The pads hold that state; nothing is tracked here, and repeating any call
//! leaves the pads exactly as a single call would.

use crate::hal::gpio::{Direction, Line, PinTransport};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentId {
    StorageSd,
    StorageEmmc,
    PciePort0,
    PciePort1,
    UsbPortA,
    UsbPortB,
    NetPhy0,
    NetPhy1,
    DisplayOut0,
    DisplayOut1,
}

/// Board wiring of one segment. Line polarity is stored with the line, so
/// callers always speak in logical asserted/enabled terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentDescriptor {
    pub id: SegmentId,
    pub reset: Option<Line>,
    pub power: Option<Line>,
    pub detect: Option<Line>,
}

impl SegmentDescriptor {
    pub const fn new(id: SegmentId) -> Self {
        Self {
            id,
            reset: None,
            power: None,
            detect: None,
        }
    }

    pub const fn with_reset(self, line: Line) -> Self {
        Self {
            reset: Some(line),
            ..self
        }
    }

    pub const fn with_power(self, line: Line) -> Self {
        Self {
            power: Some(line),
            ..self
        }
    }

    pub const fn with_detect(self, line: Line) -> Self {
        Self {
            detect: Some(line),
            ..self
        }
    }
}

/// Lookup over a board's segment table.
#[derive(Debug, Clone, Copy)]
pub struct SegmentResolver {
    table: &'static [SegmentDescriptor],
}

impl SegmentResolver {
    pub const fn new(table: &'static [SegmentDescriptor]) -> Self {
        Self { table }
    }

    pub fn resolve(&self, id: SegmentId) -> Option<&'static SegmentDescriptor> {
        let found = self.table.iter().find(|desc| desc.id == id);
        if found.is_none() {
            debug!("segment {:?}: not wired", id);
        }
        found
    }

    /// Switches the segment's reset and power pads to outputs.
    pub fn init_io<P: PinTransport + ?Sized>(&self, pins: &mut P, id: SegmentId) {
        let Some(desc) = self.resolve(id) else {
            return;
        };
        for line in [desc.reset, desc.power].into_iter().flatten() {
            pins.set_pin_direction(line.pin, Direction::Output);
        }
    }

    /// Drives the reset line to its logical `asserted` state.
    pub fn set_reset<P: PinTransport + ?Sized>(&self, pins: &mut P, id: SegmentId, asserted: bool) {
        if let Some(line) = self.resolve(id).and_then(|desc| desc.reset) {
            trace!("segment {:?}: reset {} on {}", id, asserted, line.pin);
            line.drive(pins, asserted);
        }
    }

    /// Drives the power-enable line. Segments powered from an always-on rail
    /// have no such line and ignore the call.
    pub fn set_power<P: PinTransport + ?Sized>(&self, pins: &mut P, id: SegmentId, enabled: bool) {
        if let Some(line) = self.resolve(id).and_then(|desc| desc.power) {
            trace!("segment {:?}: power {} on {}", id, enabled, line.pin);
            line.drive(pins, enabled);
        }
    }

    /// Samples the detect line. `None` when the segment cannot report presence.
    pub fn is_present<P: PinTransport + ?Sized>(&self, pins: &mut P, id: SegmentId) -> Option<bool> {
        let line = self.resolve(id)?.detect?;
        Some(line.sample(pins))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hal::gpio::{GpioPin, Level, Port};
    use crate::testing::{FakeHal, Op};

    const RESET: GpioPin = GpioPin::new(1, Port::B, 2);
    const POWER: GpioPin = GpioPin::new(2, Port::B, 5);
    const DETECT: GpioPin = GpioPin::new(0, Port::A, 4);

    const TABLE: &[SegmentDescriptor] = &[
        SegmentDescriptor::new(SegmentId::PciePort0).with_reset(Line::active_low(RESET)),
        SegmentDescriptor::new(SegmentId::UsbPortA).with_power(Line::active_high(POWER)),
        SegmentDescriptor::new(SegmentId::StorageSd).with_detect(Line::active_low(DETECT)),
    ];
    const RESOLVER: SegmentResolver = SegmentResolver::new(TABLE);

    #[test]
    fn unmapped_segment_is_silent() {
        let mut hal = FakeHal::new();
        for id in [SegmentId::NetPhy0, SegmentId::DisplayOut1, SegmentId::PciePort1] {
            RESOLVER.init_io(&mut hal, id);
            RESOLVER.set_reset(&mut hal, id, true);
            RESOLVER.set_power(&mut hal, id, true);
            assert_eq!(RESOLVER.is_present(&mut hal, id), None);
        }
        assert!(hal.ops.is_empty());
    }

    #[test]
    fn missing_line_is_a_no_op() {
        let mut hal = FakeHal::new();
        RESOLVER.set_power(&mut hal, SegmentId::PciePort0, true);
        RESOLVER.set_reset(&mut hal, SegmentId::UsbPortA, true);
        RESOLVER.init_io(&mut hal, SegmentId::StorageSd);
        assert_eq!(RESOLVER.is_present(&mut hal, SegmentId::PciePort0), None);
        assert_eq!(hal.pad_writes(), 0);
    }

    #[test]
    fn init_io_only_touches_outputs() {
        let mut hal = FakeHal::new();
        RESOLVER.init_io(&mut hal, SegmentId::PciePort0);
        RESOLVER.init_io(&mut hal, SegmentId::UsbPortA);
        assert_eq!(
            hal.ops,
            [
                Op::Direction(RESET, Direction::Output),
                Op::Direction(POWER, Direction::Output)
            ]
        );
    }

    #[test]
    fn reset_honours_active_low() {
        let mut hal = FakeHal::new();
        RESOLVER.set_reset(&mut hal, SegmentId::PciePort0, true);
        assert_eq!(hal.level(RESET), Some(Level::Low));
        RESOLVER.set_reset(&mut hal, SegmentId::PciePort0, false);
        assert_eq!(hal.level(RESET), Some(Level::High));
    }

    #[test]
    fn repeated_reset_is_idempotent() {
        let mut once = FakeHal::new();
        RESOLVER.set_reset(&mut once, SegmentId::PciePort0, true);

        let mut twice = FakeHal::new();
        RESOLVER.set_reset(&mut twice, SegmentId::PciePort0, true);
        RESOLVER.set_reset(&mut twice, SegmentId::PciePort0, true);

        assert_eq!(once.pads, twice.pads);
    }

    #[test]
    fn detect_decodes_polarity() {
        let mut hal = FakeHal::new();
        hal.inputs.insert(DETECT, Level::Low);
        assert_eq!(RESOLVER.is_present(&mut hal, SegmentId::StorageSd), Some(true));
        hal.inputs.insert(DETECT, Level::High);
        assert_eq!(RESOLVER.is_present(&mut hal, SegmentId::StorageSd), Some(false));
    }
}
