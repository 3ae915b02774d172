// libpn532/src/protocol/checksum.rs

/// Compute Length Checksum (LCS) for a PN532 frame
/// (LEN + LCS) mod 256 == 0
pub fn lcs(len: u8) -> u8 {
    0u8.wrapping_sub(len)
}

/// Compute Data Checksum (DCS) for a PN532 frame
/// (TFI + sum(data) + DCS) mod 256 == 0
pub fn dcs(tfi: u8, data: &[u8]) -> u8 {
    let sum = data.iter().fold(tfi, |acc, &b| acc.wrapping_add(b));
    0u8.wrapping_sub(sum)
}
