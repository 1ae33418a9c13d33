//! Recording transports for host tests.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::RegulatorError;
use crate::hal::gpio::{Direction, GpioPin, Level, PinTransport, Pull};
use crate::hal::mmio::RegisterAccess;
use crate::hal::pwm::{PwmChannelId, PwmConfig, PwmTransport};
use crate::hal::regulator::{PmicChip, RegulatorEntry, RegulatorTransport};

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// One transport call, in issue order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Function(GpioPin, u8),
    Direction(GpioPin, Direction),
    Pull(GpioPin, Pull),
    Write(GpioPin, Level),
    Read(GpioPin),
    PmicInit,
    PmicPinFunction(PmicChip, u8, u8),
    Regulator(RegulatorEntry),
    PwmConfigure(PwmConfig),
    PwmEnable(PwmChannelId),
    RegisterWrite(usize, u32),
    RegisterRead(usize),
}

impl Op {
    /// Pad touched by this call, if it is a pad write.
    pub fn pad(&self) -> Option<GpioPin> {
        match *self {
            Op::Function(pin, _) | Op::Direction(pin, _) | Op::Pull(pin, _) | Op::Write(pin, _) => {
                Some(pin)
            }
            _ => None,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Pad {
    pub function: Option<u8>,
    pub direction: Option<Direction>,
    pub pull: Option<Pull>,
    pub level: Option<Level>,
}

#[derive(Debug, Default)]
pub struct FakeHal {
    pub ops: Vec<Op>,
    pub pads: BTreeMap<GpioPin, Pad>,
    /// Levels driven onto input pads from outside.
    pub inputs: BTreeMap<GpioPin, Level>,
    pub pmic_ready: bool,
    /// Zero-based index of the regulator entry to reject, counted across
    /// every `apply_regulator_entry` call.
    pub reject_entry: Option<usize>,
    pub rails_applied: Vec<RegulatorEntry>,
    regulator_calls: usize,
    pub pwm: BTreeMap<(u8, u8), (PwmConfig, bool)>,
    pub registers: BTreeMap<usize, u32>,
}

impl FakeHal {
    pub fn new() -> Self {
        init_logger();
        Self::default()
    }

    pub fn pad(&self, pin: GpioPin) -> Pad {
        self.pads.get(&pin).copied().unwrap_or_default()
    }

    pub fn level(&self, pin: GpioPin) -> Option<Level> {
        self.pad(pin).level
    }

    /// Number of pad-mutating calls issued.
    pub fn pad_writes(&self) -> usize {
        self.ops.iter().filter(|op| op.pad().is_some()).count()
    }

    pub fn touched_pads(&self) -> BTreeSet<GpioPin> {
        self.ops.iter().filter_map(Op::pad).collect()
    }

    pub fn clear_ops(&mut self) {
        self.ops.clear();
    }

    pub fn pwm_state(&self, id: PwmChannelId) -> Option<(PwmConfig, bool)> {
        self.pwm
            .get(&(id.controller as u8, id.channel as u8))
            .copied()
    }

    fn pad_mut(&mut self, pin: GpioPin) -> &mut Pad {
        self.pads.entry(pin).or_default()
    }
}

impl PinTransport for FakeHal {
    fn read_pin(&mut self, pin: GpioPin) -> Level {
        self.ops.push(Op::Read(pin));
        let pad = self.pad(pin);
        match pad.direction {
            Some(Direction::Output) => pad.level.unwrap_or(Level::Low),
            _ => self.inputs.get(&pin).copied().unwrap_or(Level::Low),
        }
    }

    fn write_pin(&mut self, pin: GpioPin, level: Level) {
        self.ops.push(Op::Write(pin, level));
        self.pad_mut(pin).level = Some(level);
    }

    fn set_pin_function(&mut self, pin: GpioPin, function: u8) {
        self.ops.push(Op::Function(pin, function));
        self.pad_mut(pin).function = Some(function);
    }

    fn set_pin_direction(&mut self, pin: GpioPin, direction: Direction) {
        self.ops.push(Op::Direction(pin, direction));
        self.pad_mut(pin).direction = Some(direction);
    }

    fn set_pin_pull(&mut self, pin: GpioPin, pull: Pull) {
        self.ops.push(Op::Pull(pin, pull));
        self.pad_mut(pin).pull = Some(pull);
    }
}

impl RegulatorTransport for FakeHal {
    fn initialize_regulator_controller(&mut self) {
        self.ops.push(Op::PmicInit);
        self.pmic_ready = true;
    }

    fn set_pmic_pin_function(&mut self, chip: PmicChip, pin: u8, function: u8) {
        self.ops.push(Op::PmicPinFunction(chip, pin, function));
    }

    fn apply_regulator_entry(&mut self, entry: &RegulatorEntry) -> Result<(), RegulatorError> {
        self.ops.push(Op::Regulator(*entry));
        let index = self.regulator_calls;
        self.regulator_calls += 1;
        if !self.pmic_ready {
            return Err(RegulatorError::NotInitialized);
        }
        if self.reject_entry == Some(index) {
            return Err(RegulatorError::Bus(entry.rail));
        }
        if !entry.rail.supported_range().contains(&entry.microvolts) {
            return Err(RegulatorError::OutOfRange {
                rail: entry.rail,
                microvolts: entry.microvolts,
            });
        }
        self.rails_applied.push(*entry);
        Ok(())
    }
}

impl PwmTransport for FakeHal {
    fn configure_pwm_channel(&mut self, config: &PwmConfig) {
        self.ops.push(Op::PwmConfigure(*config));
        let key = (config.id.controller as u8, config.id.channel as u8);
        let enabled = self.pwm.get(&key).is_some_and(|(_, enabled)| *enabled);
        self.pwm.insert(key, (*config, enabled));
    }

    fn enable_pwm_channel(&mut self, id: PwmChannelId) {
        self.ops.push(Op::PwmEnable(id));
        if let Some((_, enabled)) = self.pwm.get_mut(&(id.controller as u8, id.channel as u8)) {
            *enabled = true;
        }
    }
}

impl RegisterAccess for FakeHal {
    fn read_register32(&mut self, addr: usize) -> u32 {
        self.ops.push(Op::RegisterRead(addr));
        self.registers.get(&addr).copied().unwrap_or(0)
    }

    fn write_register32(&mut self, addr: usize, value: u32) {
        self.ops.push(Op::RegisterWrite(addr, value));
        // Model the Rockchip write-enable mask.
        let mask = value >> 16;
        let old = self.registers.get(&addr).copied().unwrap_or(0);
        let new = (old & !mask) | (value & mask);
        self.registers.insert(addr, new);
    }
}
