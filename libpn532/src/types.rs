// libpn532/src/types.rs

use crate::Error;
use crate::constants::MAX_UID_LEN;

/// ISO14443-A UID - Newtype Pattern (0〜7 バイト)
///
/// Stored inline; the PN532 reports at most 7 UID bytes in an
/// InListPassiveTarget response. Longer values are rejected, never
/// truncated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Uid {
    bytes: [u8; MAX_UID_LEN],
    len: u8,
}

impl Uid {
    /// Build a Uid from a slice of at most 7 bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        if bytes.len() > MAX_UID_LEN {
            return Err(Error::UidTooLong(bytes.len()));
        }
        let mut arr = [0u8; MAX_UID_LEN];
        arr[..bytes.len()].copy_from_slice(bytes);
        Ok(Self {
            bytes: arr,
            len: bytes.len() as u8,
        })
    }

    /// The UID bytes actually reported by the card.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for Uid {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::from_bytes(bytes)
    }
}

/// ATQA (SENS_RES) - Newtype Pattern (u16)
///
/// Transmitted big-endian in the InListPassiveTarget response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Atqa(u16);

impl Atqa {
    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    pub fn to_be_bytes(&self) -> [u8; 2] {
        self.0.to_be_bytes()
    }

    pub fn from_be_bytes(bytes: [u8; 2]) -> Self {
        Self(u16::from_be_bytes(bytes))
    }
}

/// SAK (SEL_RES) - Newtype Pattern (u8)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sak(u8);

impl Sak {
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    pub fn as_u8(&self) -> u8 {
        self.0
    }
}

/// SAM operating mode selected by the SAMConfiguration command.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SamMode {
    /// The SAM is not used; the default operating mode
    Normal = 0x01,
    /// PN532 + SAM appear as a single virtual card to the outside
    VirtualCard = 0x02,
    /// The host accesses the SAM with standard PCD commands
    WiredCard = 0x03,
    /// PN532 and SAM are both visible as separate targets
    DualCard = 0x04,
}

impl SamMode {
    /// Mode byte as sent on the wire.
    pub fn code(&self) -> u8 {
        *self as u8
    }
}

/// Baud rate / modulation (BrTy) selector for InListPassiveTarget.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaudModulation {
    /// 106 kbps ISO/IEC14443 Type A
    IsoTypeA106kbps = 0x00,
    /// 212 kbps FeliCa
    Felica212kbps = 0x01,
    /// 424 kbps FeliCa
    Felica424kbps = 0x02,
    /// 106 kbps ISO/IEC14443-3B
    IsoTypeB106kbps = 0x03,
    /// 106 kbps Innovision Jewel tag
    Jewel106kbps = 0x04,
}

impl BaudModulation {
    /// BrTy byte as sent on the wire.
    pub fn code(&self) -> u8 {
        *self as u8
    }
}
