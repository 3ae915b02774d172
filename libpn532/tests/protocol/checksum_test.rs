#[path = "../common/mod.rs"]
mod common;

use libpn532::protocol::{dcs, lcs};

#[test]
fn lcs_and_dcs_examples() {
    assert_eq!(lcs(2), 0xfe);
    assert_eq!(lcs(0), 0x00);
    assert_eq!(lcs(0xff), 0x01);

    // GetFirmwareVersion: D4 02 -> 2A
    assert_eq!(dcs(0xD4, &[0x02]), 0x2a);
    // InListPassiveTarget: D4 4A 01 00 -> E1
    assert_eq!(dcs(0xD4, &[0x4A, 0x01, 0x00]), 0xe1);
}

#[test]
fn checksums_cancel_the_covered_bytes() {
    let data = [0x14u8, 0x01, 0x14, 0x01];
    let sum = data.iter().fold(0xD4u8, |acc, &b| acc.wrapping_add(b));
    assert_eq!(sum.wrapping_add(dcs(0xD4, &data)), 0);

    for len in [0u8, 1, 5, 0x80, 0xff] {
        assert_eq!(len.wrapping_add(lcs(len)), 0);
    }
}
