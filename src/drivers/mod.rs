//! Table-driven resource drivers.
//!
//! Each driver takes the board table it works on and the narrowest transport
//! it needs. None of them keep state between calls.

pub mod cru;
pub mod dtb;
pub mod fan;
pub mod indicator;
pub mod phy;
pub mod pinmux;
pub mod regulator;
pub mod segment;
pub mod usb;
