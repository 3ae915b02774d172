// libpn532/src/constants.rs
//! Common protocol constants used across the crate

/// PN532 wire frame preamble + start code: 0x00 0x00 0xFF
pub const FRAME_PREAMBLE: [u8; 3] = [0x00, 0x00, 0xFF];

/// PN532 wire frame postamble: 0x00
pub const FRAME_POSTAMBLE: u8 = 0x00;

/// Frame direction byte, host to device
pub const TFI_HOST_TO_DEVICE: u8 = 0xD4;

/// Frame direction byte, device to host
pub const TFI_DEVICE_TO_HOST: u8 = 0xD5;

/// The fixed 6-byte acknowledge frame sent by the device after every
/// accepted command frame
pub const ACK_FRAME: [u8; 6] = [0x00, 0x00, 0xFF, 0x00, 0xFF, 0x00];

/// Minimal wire frame length in bytes: preamble(3) + len(1) + lcs(1) +
/// tfi(1) + dcs(1) + postamble(1)
pub const MIN_FRAME_LEN: usize = 8;

/// Fixed per-frame overhead around the TFI + data region
pub const FRAME_OVERHEAD: usize = 8;

/// Response frame header as read off the wire: preamble(3) + len(1) +
/// lcs(1) + tfi(1)
pub const RESPONSE_HEADER_LEN: usize = 6;

/// Maximum command data (opcode + arguments) per frame. LEN counts the
/// TFI byte as well, so data is bounded by 0xFF - 1.
pub const MAX_COMMAND_DATA_LEN: usize = 254;

/// GetFirmwareVersion command code
pub const CMD_GET_FIRMWARE_VERSION: u8 = 0x02;

/// SAMConfiguration command code
pub const CMD_SAM_CONFIGURATION: u8 = 0x14;

/// InListPassiveTarget command code
pub const CMD_INLIST_PASSIVE_TARGET: u8 = 0x4A;

/// Maximum ISO14443-A UID length handled by the driver (single/double/
/// triple size UIDs are 4/7/10 bytes; the PN532 reports at most 7 here)
pub const MAX_UID_LEN: usize = 7;

/// Default 7-bit I2C address of PN532 modules
pub const PN532_I2C_ADDRESS: u8 = 0x24;

/// Total time to wait for the acknowledge frame, milliseconds
pub const ACK_WAIT_MS: u64 = 100;

/// Interval between readiness polls, milliseconds
pub const READY_POLL_INTERVAL_MS: u64 = 10;

/// Default timeout for ordinary command transactions, milliseconds
pub const DEFAULT_COMMAND_TIMEOUT_MS: u64 = 2000;

/// Default timeout for passive-target polling; kept short so a caller
/// loop can re-poll quickly
pub const DEFAULT_POLL_TIMEOUT_MS: u64 = 500;
