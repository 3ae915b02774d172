// libpn532/src/protocol/responses/sam.rs

use crate::Result;
use crate::protocol::parser;

/// Decode a SAMConfiguration response payload (response code 0x15).
/// The response carries no fields beyond the echoed code; a completed
/// transaction is the success signal.
pub fn decode_sam_configuration(data: &[u8]) -> Result<()> {
    parser::ensure_len(data, 1)?;
    Ok(())
}
