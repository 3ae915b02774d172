// libpn532/src/card/info.rs

use crate::types::{Atqa, Sak, Uid};

/// Compact information describing an ISO14443-A target
/// (tag number / ATQA / SAK / UID), parsed out of an
/// InListPassiveTarget response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardInfo {
    tag_number: u8,
    atqa: Atqa,
    sak: Sak,
    uid: Uid,
}

impl CardInfo {
    pub fn new(tag_number: u8, atqa: Atqa, sak: Sak, uid: Uid) -> Self {
        Self {
            tag_number,
            atqa,
            sak,
            uid,
        }
    }

    /// Logical target number assigned by the chip (1 or 2).
    pub fn tag_number(&self) -> u8 {
        self.tag_number
    }

    pub fn atqa(&self) -> Atqa {
        self.atqa
    }

    pub fn sak(&self) -> Sak {
        self.sak
    }

    pub fn uid(&self) -> &Uid {
        &self.uid
    }
}
