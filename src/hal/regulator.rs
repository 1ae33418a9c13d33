//! RK806 PMIC rails and the regulator transport.

use core::ops::RangeInclusive;

use crate::error::RegulatorError;

/// PMIC instance on the PMIC SPI bus. Dual-PMIC boards add a slave.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PmicChip {
    Master,
    Slave,
}

/// Named voltage outputs of the master RK806.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rail {
    Buck1 = 0,
    Buck2,
    Buck3,
    Buck4,
    Buck5,
    Buck6,
    Buck7,
    Buck8,
    Buck9,
    Buck10,
    Nldo1,
    Nldo2,
    Nldo3,
    Nldo4,
    Nldo5,
    Pldo1,
    Pldo2,
    Pldo3,
    Pldo4,
    Pldo5,
    Pldo6,
}

impl Rail {
    const BUCK_RANGE: RangeInclusive<u32> = 500_000..=3_400_000;
    const NLDO_RANGE: RangeInclusive<u32> = 500_000..=1_500_000;
    const PLDO_RANGE: RangeInclusive<u32> = 500_000..=3_400_000;

    /// Output range the RK806 datasheet gives for this rail's class.
    ///
    /// Informational only: the registry forwards any value and lets the
    /// driver decide.
    pub fn supported_range(self) -> RangeInclusive<u32> {
        match self {
            Rail::Buck1
            | Rail::Buck2
            | Rail::Buck3
            | Rail::Buck4
            | Rail::Buck5
            | Rail::Buck6
            | Rail::Buck7
            | Rail::Buck8
            | Rail::Buck9
            | Rail::Buck10 => Self::BUCK_RANGE,
            Rail::Nldo1 | Rail::Nldo2 | Rail::Nldo3 | Rail::Nldo4 | Rail::Nldo5 => {
                Self::NLDO_RANGE
            }
            Rail::Pldo1 | Rail::Pldo2 | Rail::Pldo3 | Rail::Pldo4 | Rail::Pldo5 | Rail::Pldo6 => {
                Self::PLDO_RANGE
            }
        }
    }
}

/// One rail programming request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegulatorEntry {
    pub rail: Rail,
    pub microvolts: u32,
    pub enabled: bool,
}

impl RegulatorEntry {
    /// An enabled rail at `microvolts`.
    pub const fn voltage(rail: Rail, microvolts: u32) -> Self {
        Self {
            rail,
            microvolts,
            enabled: true,
        }
    }
}

/// The PMIC driver.
pub trait RegulatorTransport {
    /// Brings up the PMIC bus and controller. Must precede any entry.
    fn initialize_regulator_controller(&mut self);

    /// Routes a PMIC-internal pin (DVS/power-down inputs) to `function`.
    fn set_pmic_pin_function(&mut self, chip: PmicChip, pin: u8, function: u8);

    /// Programs and enables one rail.
    fn apply_regulator_entry(&mut self, entry: &RegulatorEntry) -> Result<(), RegulatorError>;
}
