// libpn532/src/protocol/commands/target.rs

use crate::types::BaudModulation;

/// Encode InListPassiveTarget command data (command code 0x4A)
/// Layout: code(1) + max_targets(1) + brty(1)
pub fn encode_in_list_passive_target(max_targets: u8, modulation: BaudModulation) -> Vec<u8> {
    let mut buf = Vec::with_capacity(1 + 2);
    buf.push(crate::constants::CMD_INLIST_PASSIVE_TARGET);
    buf.push(max_targets);
    buf.push(modulation.code());
    buf
}
