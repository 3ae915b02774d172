// libpn532/src/protocol/commands/mod.rs

pub mod firmware;
pub mod sam;
pub mod target;

pub use firmware::encode_get_firmware_version;
pub use sam::encode_sam_configuration;
pub use target::encode_in_list_passive_target;

use crate::types::{BaudModulation, SamMode};

/// High-level Command enum. New commands should be added here and
/// their per-command encoder placed in `protocol::commands::<name>.rs`.
#[derive(Debug, Clone)]
pub enum Command {
    /// Query the firmware revision of the chip (0x02)
    GetFirmwareVersion,
    /// Select the SAM operating mode (0x14)
    SamConfiguration {
        mode: SamMode,
        /// Virtual-card timeout in units of 50 ms
        timeout: u8,
        use_irq: bool,
    },
    /// Detect passive targets in the field (0x4A)
    InListPassiveTarget {
        max_targets: u8,
        modulation: BaudModulation,
    },
}

impl Command {
    /// Return the command code as defined by the PN532 user manual.
    pub fn command_code(&self) -> u8 {
        match self {
            Self::GetFirmwareVersion => crate::constants::CMD_GET_FIRMWARE_VERSION,
            Self::SamConfiguration { .. } => crate::constants::CMD_SAM_CONFIGURATION,
            Self::InListPassiveTarget { .. } => crate::constants::CMD_INLIST_PASSIVE_TARGET,
        }
    }

    /// The response code the device echoes back for this command
    /// (command code + 1).
    pub fn response_code(&self) -> u8 {
        self.command_code().wrapping_add(1)
    }

    /// Encode the command into the raw frame data (command code + params).
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Self::GetFirmwareVersion => encode_get_firmware_version(),
            Self::SamConfiguration {
                mode,
                timeout,
                use_irq,
            } => encode_sam_configuration(*mode, *timeout, *use_irq),
            Self::InListPassiveTarget {
                max_targets,
                modulation,
            } => encode_in_list_passive_target(*max_targets, *modulation),
        }
    }
}
