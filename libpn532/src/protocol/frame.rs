// libpn532/src/protocol/frame.rs

use crate::protocol::checksum::{dcs, lcs};
use crate::{Error, Result};

/// PN532 frame helper. Provides encode/decode of the wire frame
/// Format: [Preamble+Start(3)] [Len(1)] [LCS(1)] [TFI(1)] [Data(n)] [DCS(1)] [Postamble(1)]
/// Preamble + start code: 0x00 0x00 0xFF
/// Postamble: 0x00
/// LEN counts the TFI byte plus the data bytes; DCS covers TFI + data.
pub struct Frame;

impl Frame {
    /// Encode command data (opcode + arguments) into a full host-to-device
    /// frame (TFI 0xD4).
    pub fn encode(data: &[u8]) -> Result<Vec<u8>> {
        if data.len() > crate::constants::MAX_COMMAND_DATA_LEN {
            return Err(Error::FrameTooLarge {
                len: data.len(),
                max: crate::constants::MAX_COMMAND_DATA_LEN,
            });
        }

        let len = (data.len() + 1) as u8; // TFI is counted in LEN
        let mut out = Vec::with_capacity(data.len() + crate::constants::FRAME_OVERHEAD);
        out.extend_from_slice(&crate::constants::FRAME_PREAMBLE);
        out.push(len);
        out.push(lcs(len));
        out.push(crate::constants::TFI_HOST_TO_DEVICE);
        out.extend_from_slice(data);
        out.push(dcs(crate::constants::TFI_HOST_TO_DEVICE, data));
        out.push(crate::constants::FRAME_POSTAMBLE);
        Ok(out)
    }

    /// Decode and validate a full device-to-host frame (TFI 0xD5) and
    /// return the inner data (response code + payload). A frame failing
    /// any validation step is rejected whole; no partial data is returned.
    pub fn decode(frame: &[u8]) -> Result<Vec<u8>> {
        if frame.len() < crate::constants::MIN_FRAME_LEN {
            return Err(Error::InvalidLength {
                expected: crate::constants::MIN_FRAME_LEN,
                actual: frame.len(),
            });
        }

        if frame[..3] != crate::constants::FRAME_PREAMBLE {
            return Err(Error::InvalidHeader("invalid preamble".into()));
        }

        let len = frame[3];
        let lcs_actual = frame[4];
        let lcs_expected = lcs(len);
        if lcs_actual != lcs_expected {
            return Err(Error::InvalidLengthChecksum {
                expected: lcs_expected,
                actual: lcs_actual,
            });
        }

        // LEN must cover at least the TFI byte; LEN == 0 is the ack frame
        // shape, not a data frame.
        if len == 0 {
            return Err(Error::InvalidLength {
                expected: 1,
                actual: 0,
            });
        }

        let required_len = crate::constants::FRAME_OVERHEAD + (len as usize) - 1;
        if frame.len() != required_len {
            return Err(Error::InvalidLength {
                expected: required_len,
                actual: frame.len(),
            });
        }

        let tfi = frame[5];
        if tfi != crate::constants::TFI_DEVICE_TO_HOST {
            return Err(Error::InvalidTfi {
                expected: crate::constants::TFI_DEVICE_TO_HOST,
                actual: tfi,
            });
        }

        let data_start = 6usize;
        let data_end = data_start + (len as usize) - 1;
        let data = &frame[data_start..data_end];

        let dcs_actual = frame[data_end];
        let dcs_expected = dcs(tfi, data);
        if dcs_actual != dcs_expected {
            return Err(Error::InvalidDataChecksum {
                expected: dcs_expected,
                actual: dcs_actual,
            });
        }

        if frame[data_end + 1] != crate::constants::FRAME_POSTAMBLE {
            return Err(Error::InvalidHeader("invalid postamble".into()));
        }

        Ok(data.to_vec())
    }

    /// Byte-exact acknowledge frame check.
    pub fn is_ack(bytes: &[u8]) -> bool {
        bytes == &crate::constants::ACK_FRAME[..]
    }
}
