#[path = "../common/mod.rs"]
mod common;

use libpn532::SamMode;
use libpn532::constants::DEFAULT_POLL_TIMEOUT_MS as POLL_TIMEOUT;
use libpn532::test_support::initialized_mock_device;

#[test]
fn read_passive_target_returns_card() {
    let uid = common::fixtures::sample_uid_bytes();
    let mut dev =
        initialized_mock_device(vec![common::fixtures::target_payload(&uid)]).unwrap();

    let card = dev.read_passive_target(POLL_TIMEOUT).unwrap();
    assert_eq!(card.uid().as_bytes(), &uid);
    assert_eq!(card.tag_number(), 1);
    assert_eq!(card.atqa().as_u16(), 0x0004);
    assert_eq!(card.sak().as_u8(), 0x08);
}

#[test]
fn firmware_version_after_initialization() {
    let mut dev =
        initialized_mock_device(vec![common::fixtures::firmware_payload()]).unwrap();

    let fw = dev.firmware_version().unwrap();
    assert_eq!((fw.version, fw.revision), (1, 6));
    assert_eq!(fw.ic, 0x32);
}

#[test]
fn sam_reconfiguration_succeeds() {
    let mut dev = initialized_mock_device(vec![common::fixtures::sam_payload()]).unwrap();
    dev.sam_configuration(SamMode::Normal, 0x14, true).unwrap();
}

#[test]
fn consecutive_transactions_share_one_handle() {
    let uid = common::fixtures::sample_uid_bytes();
    let mut dev = initialized_mock_device(vec![
        common::fixtures::target_payload(&uid),
        common::fixtures::target_payload(&uid),
    ])
    .unwrap();

    let first = dev.read_passive_target(POLL_TIMEOUT).unwrap();
    let second = dev.read_passive_target(POLL_TIMEOUT).unwrap();
    assert_eq!(first, second);
}
