//! Pin-mux tables.
//!
//! A mux group is an ordered list of [`PinRef`]s. Applying a group walks the
//! list in table order and issues one function write (and one pull write when
//! the entry carries a bias) per pad. Pads are registers: if two entries
//! touch the same pad, the later one wins. Inside a group that is a table
//! error, which [`group_is_consistent`] rejects at build time:
//!
//! ```ignore
//! const _: () = assert!(pinmux::group_is_consistent(SDMMC_PINS));
//! ```
//!
//! Across groups two resources may legitimately share a pad (alternate
//! functions of the same connector), so those overlaps are only reported, by
//! [`conflicts`].

use core::fmt;

use crate::drivers::segment::SegmentId;
use crate::hal::gpio::{GpioPin, PinTransport, Pull};

/// Function code 0 routes a pad to the GPIO controller.
pub const FUNC_GPIO: u8 = 0;

/// One pad of a mux group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinRef {
    pub pin: GpioPin,
    pub function: u8,
    /// `None` leaves the pad's reset bias alone.
    pub pull: Option<Pull>,
}

impl PinRef {
    pub const fn new(pin: GpioPin, function: u8) -> Self {
        Self {
            pin,
            function,
            pull: None,
        }
    }

    pub const fn with_pull(self, pull: Pull) -> Self {
        Self {
            pull: Some(pull),
            ..self
        }
    }

    /// Writes this entry's function, then its bias.
    pub fn apply<P: PinTransport + ?Sized>(&self, pins: &mut P) {
        pins.set_pin_function(self.pin, self.function);
        if let Some(pull) = self.pull {
            pins.set_pin_pull(self.pin, pull);
        }
    }
}

/// Logical signal groups the boot flow can mux.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MuxGroup {
    /// microSD socket: data, clock/command and card detect.
    Sdmmc,
    /// On-board eMMC, 8-bit.
    Emmc,
    /// SPI bus to the PMIC.
    PmicSpi,
    I2c(u8),
    Gmac(u8),
    HdmiTx(u8),
    FanPwm,
    JackDetect,
}

/// A mux group and its pads.
#[derive(Debug, Clone, Copy)]
pub struct MuxEntry {
    pub group: MuxGroup,
    pub pins: &'static [PinRef],
}

impl MuxEntry {
    pub const fn new(group: MuxGroup, pins: &'static [PinRef]) -> Self {
        Self { group, pins }
    }
}

/// Finds the pads of `group`, if the board wires it.
pub fn lookup(table: &'static [MuxEntry], group: MuxGroup) -> Option<&'static [PinRef]> {
    table
        .iter()
        .find(|entry| entry.group == group)
        .map(|entry| entry.pins)
}

/// Applies every pad of `group` in table order.
///
/// Unwired groups are a no-op. Returns whether anything was written.
pub fn configure<P: PinTransport + ?Sized>(
    pins: &mut P,
    table: &'static [MuxEntry],
    group: MuxGroup,
) -> bool {
    let Some(refs) = lookup(table, group) else {
        debug!("pinmux: {:?} not wired, skipping", group);
        return false;
    };
    debug!("pinmux: {:?} ({} pads)", group, refs.len());
    apply(pins, refs);
    !refs.is_empty()
}

/// Applies a pad list in order.
pub fn apply<P: PinTransport + ?Sized>(pins: &mut P, refs: &[PinRef]) {
    for pin_ref in refs {
        pin_ref.apply(pins);
    }
}

/// First pair of entries in `refs` addressing the same pad.
pub const fn first_duplicate(refs: &[PinRef]) -> Option<(usize, usize)> {
    let mut i = 0;
    while i < refs.len() {
        let mut j = i + 1;
        while j < refs.len() {
            if refs[i].pin.same_pad(&refs[j].pin) {
                return Some((i, j));
            }
            j += 1;
        }
        i += 1;
    }
    None
}

/// True when no pad appears twice within the group.
pub const fn group_is_consistent(refs: &[PinRef]) -> bool {
    first_duplicate(refs).is_none()
}

/// True when every group of the table is duplicate-free.
pub const fn table_is_consistent(table: &[MuxEntry]) -> bool {
    let mut i = 0;
    while i < table.len() {
        if !group_is_consistent(table[i].pins) {
            return false;
        }
        i += 1;
    }
    true
}

/// Who claims a pad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Owner {
    Mux(MuxGroup),
    Segment(SegmentId),
    PhyReset(u32),
    StatusLed,
    WirelessEnable,
}

/// A resource's use of one pad. GPIO lines claim function [`FUNC_GPIO`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PadClaim {
    pub owner: Owner,
    pub pin: GpioPin,
    pub function: u8,
    pub pull: Option<Pull>,
}

impl PadClaim {
    pub const fn gpio(owner: Owner, pin: GpioPin) -> Self {
        Self {
            owner,
            pin,
            function: FUNC_GPIO,
            pull: None,
        }
    }

    pub const fn mux(owner: Owner, pin_ref: &PinRef) -> Self {
        Self {
            owner,
            pin: pin_ref.pin,
            function: pin_ref.function,
            pull: pin_ref.pull,
        }
    }

    /// Same pad, different owner, different configuration.
    pub fn conflicts_with(&self, other: &PadClaim) -> bool {
        self.pin.same_pad(&other.pin)
            && self.owner != other.owner
            && (self.function != other.function || self.pull != other.pull)
    }
}

impl fmt::Display for PadClaim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} fn{} ({:?})", self.pin, self.function, self.owner)
    }
}

/// Every pair of claims that would fight over a pad.
pub fn conflicts<I>(claims: I) -> impl Iterator<Item = (PadClaim, PadClaim)>
where
    I: Iterator<Item = PadClaim> + Clone,
{
    let rest = claims.clone();
    claims.enumerate().flat_map(move |(index, claim)| {
        rest.clone()
            .skip(index + 1)
            .filter(move |other| claim.conflicts_with(other))
            .map(move |other| (claim, other))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hal::gpio::Port;
    use crate::testing::{FakeHal, Op};

    const A0: GpioPin = GpioPin::new(2, Port::A, 0);
    const A1: GpioPin = GpioPin::new(2, Port::A, 1);

    const GROUP: &[PinRef] = &[
        PinRef::new(A0, 1),
        PinRef::new(A1, 5).with_pull(Pull::None),
    ];
    const TABLE: &[MuxEntry] = &[MuxEntry::new(MuxGroup::I2c(5), GROUP)];

    #[test]
    fn apply_follows_table_order() {
        let mut hal = FakeHal::new();
        assert!(configure(&mut hal, TABLE, MuxGroup::I2c(5)));
        assert_eq!(
            hal.ops,
            [
                Op::Function(A0, 1),
                Op::Function(A1, 5),
                Op::Pull(A1, Pull::None)
            ]
        );
    }

    #[test]
    fn unwired_group_writes_nothing() {
        let mut hal = FakeHal::new();
        assert!(!configure(&mut hal, TABLE, MuxGroup::I2c(2)));
        assert!(!configure(&mut hal, TABLE, MuxGroup::Gmac(0)));
        assert!(hal.ops.is_empty());
    }

    #[test]
    fn later_write_to_same_pad_wins() {
        let mut hal = FakeHal::new();
        apply(&mut hal, &[PinRef::new(A0, 1), PinRef::new(A0, 3)]);
        assert_eq!(hal.pad(A0).function, Some(3));
        assert_eq!(first_duplicate(&[PinRef::new(A0, 1), PinRef::new(A0, 3)]), Some((0, 1)));
    }

    #[test]
    fn duplicate_pads_fail_consistency() {
        assert!(group_is_consistent(GROUP));
        assert!(table_is_consistent(TABLE));
        assert!(!group_is_consistent(&[
            PinRef::new(A0, 1),
            PinRef::new(A1, 1),
            PinRef::new(A0, 1),
        ]));
    }

    #[test]
    fn conflicts_need_different_owner_and_config() {
        let emmc = Owner::Mux(MuxGroup::Emmc);
        let i2c = Owner::Mux(MuxGroup::I2c(5));
        let claims = [
            PadClaim::mux(emmc, &PinRef::new(A0, 1)),
            PadClaim::mux(i2c, &PinRef::new(A0, 9)),
            // Same configuration as the first claim: shared, not fighting.
            PadClaim::mux(Owner::Mux(MuxGroup::Sdmmc), &PinRef::new(A0, 1)),
            PadClaim::gpio(Owner::StatusLed, A1),
        ];
        let found: Vec<_> = conflicts(claims.iter().copied()).collect();
        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|(a, b)| a.pin == A0 && b.pin == A0));
        assert!(found.iter().any(|(a, b)| a.owner == emmc && b.owner == i2c));
    }
}
