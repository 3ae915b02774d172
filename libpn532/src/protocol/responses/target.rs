// libpn532/src/protocol/responses/target.rs

use crate::card::CardInfo;
use crate::protocol::parser;
use crate::types::{Atqa, Sak};
use crate::{Error, Result};

/// Decode an InListPassiveTarget response payload (response code 0x4B).
/// Layout: code(1) + num_targets(1) + tag_number(1) + atqa(2, big-endian)
///         + sak(1) + uid_len(1) + uid(uid_len)
///
/// Exactly one target is expected; zero targets (nothing in the field)
/// and any other count map to NoTargetFound. UID lengths above 7 bytes
/// are rejected rather than truncated.
pub fn decode_in_list_passive_target(data: &[u8]) -> Result<CardInfo> {
    const MIN_LEN: usize = 1 + 1; // code + num_targets
    parser::ensure_len(data, MIN_LEN)?;

    let num_targets = data[1];
    if num_targets != 1 {
        return Err(Error::NoTargetFound);
    }

    let tag_number = parser::byte_at(data, 2)?;
    let atqa = Atqa::new(parser::be_u16_at(data, 3)?);
    let sak = Sak::new(parser::byte_at(data, 5)?);
    let uid = parser::uid_at(data, 6)?;

    Ok(CardInfo::new(tag_number, atqa, sak, uid))
}
