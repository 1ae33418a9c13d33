//! Platform module - Board-specific configuration and support.
//!
//! Boards are selected at compile time; `CurrentBoard` names the one the
//! firmware is built for.

pub mod board;
pub mod lemonpi;

#[cfg(feature = "lemonpi")]
pub type CurrentBoard = lemonpi::LemonPi;

// LemonPi is the only board so far.
#[cfg(not(feature = "lemonpi"))]
pub type CurrentBoard = lemonpi::LemonPi;
