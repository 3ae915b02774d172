// libpn532/src/protocol/responses/firmware.rs

use crate::Result;
use crate::protocol::parser;
use std::fmt;

/// Firmware identification reported by GetFirmwareVersion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FirmwareVersion {
    /// IC identifier (0x32 for the PN532)
    pub ic: u8,
    /// Major version
    pub version: u8,
    /// Minor version
    pub revision: u8,
    /// Supported protocol bitfield (ISO14443A/B, ISO18092)
    pub support: u8,
}

impl fmt::Display for FirmwareVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}.{}", self.version, self.revision)
    }
}

/// Decode a GetFirmwareVersion response payload (response code 0x03)
/// Layout: code(1) + ic(1) + version(1) + revision(1) + support(1)
pub fn decode_firmware_version(data: &[u8]) -> Result<FirmwareVersion> {
    const MIN_LEN: usize = 1 + 4;
    parser::ensure_len(data, MIN_LEN)?;

    Ok(FirmwareVersion {
        ic: data[1],
        version: data[2],
        revision: data[3],
        support: data[4],
    })
}
