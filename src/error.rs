//! Error types for the board registry.
//!
//! Only one class of failure is reported to callers: the regulator transport
//! refusing an entry. Unmapped segments, buses and PHYs are not errors, they
//! resolve to no-ops.
//!
//! The composite bring-up in [`crate::Board::init`] uses [`PlatformResult`],
//! an alias for `anyhow::Result`, so each failing step can carry context:
//! ```ignore
//! drivers::regulator::configure_all_rails(hal, LemonPi::REGULATORS)
//!     .map_err(|err| anyhow::anyhow!("PMIC bring-up failed: {err}"))?;
//! ```

use crate::hal::regulator::Rail;

/// Result type alias using anyhow::Error.
pub type PlatformResult<T> = anyhow::Result<T>;

/// Failure reported by the regulator transport for a single entry.
///
/// These are passed through untouched. A rejected voltage is never retried,
/// since re-issuing a rail write can glitch the rail.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegulatorError {
    #[error("{rail:?}: {microvolts} uV is outside the supported range")]
    OutOfRange { rail: Rail, microvolts: u32 },
    #[error("{0:?}: PMIC bus transfer failed")]
    Bus(Rail),
    #[error("regulator controller not initialized")]
    NotInitialized,
}

impl RegulatorError {
    /// The rail the failure refers to, if any.
    pub fn rail(&self) -> Option<Rail> {
        match *self {
            RegulatorError::OutOfRange { rail, .. } | RegulatorError::Bus(rail) => Some(rail),
            RegulatorError::NotInitialized => None,
        }
    }
}
