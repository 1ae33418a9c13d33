//! Device-tree variant selection.
//!
//! Runs before any error reporting exists, so it is a pure, total lookup:
//! unknown compatibility modes select nothing instead of failing.

use core::fmt;

/// Compatibility mode as stored in the firmware settings.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompatMode {
    /// Vendor (BSP kernel) device tree.
    Vendor = 1,
    /// Upstream device tree.
    Mainline = 2,
}

impl CompatMode {
    pub const fn from_raw(raw: u32) -> Option<Self> {
        match raw {
            1 => Some(CompatMode::Vendor),
            2 => Some(CompatMode::Mainline),
            _ => None,
        }
    }
}

/// 128-bit identifier of a device-tree blob in the firmware volume, in EFI
/// GUID layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlobId {
    pub data1: u32,
    pub data2: u16,
    pub data3: u16,
    pub data4: [u8; 8],
}

impl BlobId {
    pub const fn new(data1: u32, data2: u16, data3: u16, data4: [u8; 8]) -> Self {
        Self {
            data1,
            data2,
            data3,
            data4,
        }
    }

    /// Mixed-endian byte encoding used by EFI.
    pub const fn to_bytes(&self) -> [u8; 16] {
        let a = self.data1.to_le_bytes();
        let b = self.data2.to_le_bytes();
        let c = self.data3.to_le_bytes();
        let d = self.data4;
        [
            a[0], a[1], a[2], a[3], b[0], b[1], c[0], c[1], d[0], d[1], d[2], d[3], d[4], d[5],
            d[6], d[7],
        ]
    }
}

impl fmt::Display for BlobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = &self.data4;
        write!(
            f,
            "{:08x}-{:04x}-{:04x}-{:02x}{:02x}-{:02x}{:02x}{:02x}{:02x}{:02x}{:02x}",
            self.data1, self.data2, self.data3, d[0], d[1], d[2], d[3], d[4], d[5], d[6], d[7]
        )
    }
}

/// The board's blob per compatibility mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DtbVariants {
    pub vendor: BlobId,
    pub mainline: BlobId,
}

impl DtbVariants {
    pub const fn select(&self, mode: CompatMode) -> &BlobId {
        match mode {
            CompatMode::Vendor => &self.vendor,
            CompatMode::Mainline => &self.mainline,
        }
    }

    /// Blob for a raw settings value, `None` for anything unrecognised.
    pub const fn resolve(&self, raw_mode: u32) -> Option<&BlobId> {
        match CompatMode::from_raw(raw_mode) {
            Some(mode) => Some(self.select(mode)),
            None => None,
        }
    }
}
