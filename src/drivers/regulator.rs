//! Regulator init table sequencing.
//!
//! Table order encodes physical supply dependencies between rails, so entries
//! are issued strictly in declaration order. The first rejected entry stops the
//! walk: rails already programmed stay programmed and later rails are never
//! attempted. A rejection is returned as-is and never retried.

use crate::error::RegulatorError;
use crate::hal::regulator::{PmicChip, Rail, RegulatorEntry, RegulatorTransport};

/// A PMIC-internal pin routing applied before the rails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PmicPinFunction {
    pub chip: PmicChip,
    pub pin: u8,
    pub function: u8,
}

/// Issues one driver call per table entry, in order, stopping at the first
/// rejection.
pub fn configure_all_rails<R: RegulatorTransport + ?Sized>(
    pmic: &mut R,
    table: &[RegulatorEntry],
) -> Result<(), RegulatorError> {
    for (index, entry) in table.iter().enumerate() {
        debug!(
            "regulator[{}]: {:?} -> {} uV{}",
            index,
            entry.rail,
            entry.microvolts,
            if entry.enabled { "" } else { " (off)" }
        );
        pmic.apply_regulator_entry(entry).inspect_err(|err| {
            error!("regulator[{}]: {:?} rejected: {}", index, entry.rail, err);
        })?;
    }
    Ok(())
}

/// Programs a single rail immediately, outside the static table.
///
/// The table is not modified: a later [`configure_all_rails`] restores the
/// table default for this rail.
pub fn set_rail_voltage<R: RegulatorTransport + ?Sized>(
    pmic: &mut R,
    rail: Rail,
    microvolts: u32,
) -> Result<(), RegulatorError> {
    let entry = RegulatorEntry::voltage(rail, microvolts);
    debug!("regulator: {:?} -> {} uV (runtime)", rail, microvolts);
    pmic.apply_regulator_entry(&entry).inspect_err(|err| {
        error!("regulator: {:?} rejected: {}", rail, err);
    })
}

/// Controller bring-up, internal pin routing, then the full rail table.
pub fn initialize<R: RegulatorTransport + ?Sized>(
    pmic: &mut R,
    pin_functions: &[PmicPinFunction],
    table: &[RegulatorEntry],
) -> Result<(), RegulatorError> {
    pmic.initialize_regulator_controller();
    for f in pin_functions {
        pmic.set_pmic_pin_function(f.chip, f.pin, f.function);
    }
    configure_all_rails(pmic, table)?;
    info!("PMIC: {} rails configured", table.len());
    Ok(())
}
