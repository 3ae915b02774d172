// libpn532/src/protocol/commands/sam.rs

use crate::types::SamMode;

/// Encode SAMConfiguration command data (command code 0x14)
/// Layout: code(1) + mode(1) + timeout(1, units of 50 ms) + irq(1)
pub fn encode_sam_configuration(mode: SamMode, timeout: u8, use_irq: bool) -> Vec<u8> {
    let mut buf = Vec::with_capacity(1 + 3);
    buf.push(crate::constants::CMD_SAM_CONFIGURATION);
    buf.push(mode.code());
    buf.push(timeout);
    buf.push(use_irq as u8);
    buf
}
