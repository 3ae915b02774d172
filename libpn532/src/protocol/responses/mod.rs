// libpn532/src/protocol/responses/mod.rs

pub mod firmware;
pub mod sam;
pub mod target;

pub use firmware::{FirmwareVersion, decode_firmware_version};
pub use sam::decode_sam_configuration;
pub use target::decode_in_list_passive_target;

use crate::card::CardInfo;

/// High-level Response enum. Per-command decoders live in
/// `protocol::responses::<name>.rs` and are dispatched here.
#[derive(Debug, Clone)]
pub enum Response {
    FirmwareVersion(FirmwareVersion),
    SamConfigured,
    PassiveTarget(CardInfo),
}

impl Response {
    /// Decode a response payload (including the echoed response code) for
    /// the given expected command code.
    pub fn decode(expected_cmd: u8, data: &[u8]) -> crate::Result<Self> {
        // Fast-fail: ensure at least a response byte is present and the
        // echoed code matches the expected (command + 1). This central
        // check keeps the per-command decoders free of the first-byte
        // verification and avoids accidental panics on empty slices.
        crate::protocol::parser::ensure_len(data, 1)?;
        let expected_response = expected_cmd.wrapping_add(1);
        crate::protocol::parser::expect_response_code(data, expected_response)?;

        match expected_cmd {
            crate::constants::CMD_GET_FIRMWARE_VERSION => {
                Ok(Self::FirmwareVersion(firmware::decode_firmware_version(
                    data,
                )?))
            }
            crate::constants::CMD_SAM_CONFIGURATION => {
                sam::decode_sam_configuration(data)?;
                Ok(Self::SamConfigured)
            }
            crate::constants::CMD_INLIST_PASSIVE_TARGET => {
                Ok(Self::PassiveTarget(target::decode_in_list_passive_target(
                    data,
                )?))
            }
            _ => {
                let actual = data.first().copied().unwrap_or(0);
                Err(crate::Error::UnexpectedResponse {
                    expected: expected_response,
                    actual,
                })
            }
        }
    }
}
