#[path = "../common/mod.rs"]
mod common;

use libpn532::Error;
use libpn532::protocol::Response;
use libpn532::protocol::codec::decode_response_frame;
use libpn532::test_support::device_frame;

#[test]
fn firmware_version_from_canned_device_response() {
    let resp = decode_response_frame(0x02, &common::fixtures::firmware_frame()).unwrap();
    match resp {
        Response::FirmwareVersion(fw) => {
            assert_eq!(fw.ic, 0x32);
            assert_eq!(fw.version, 1);
            assert_eq!(fw.revision, 6);
        }
        other => panic!("unexpected response: {:?}", other),
    }
}

#[test]
fn sam_configuration_response_is_accepted() {
    let resp = decode_response_frame(0x14, &common::fixtures::sam_frame()).unwrap();
    assert!(matches!(resp, Response::SamConfigured));
}

#[test]
fn passive_target_with_four_byte_uid() {
    let uid = common::fixtures::sample_uid_bytes();
    let resp = decode_response_frame(0x4A, &common::fixtures::target_frame(&uid)).unwrap();
    match resp {
        Response::PassiveTarget(card) => {
            assert_eq!(card.uid().len(), 4);
            assert_eq!(card.uid().as_bytes(), &uid);
            assert_eq!(card.atqa().as_u16(), 0x0004);
            assert_eq!(card.sak().as_u8(), 0x08);
        }
        other => panic!("unexpected response: {:?}", other),
    }
}

#[test]
fn passive_target_with_empty_field() {
    let frame = device_frame(&common::fixtures::no_target_payload());
    match decode_response_frame(0x4A, &frame) {
        Err(Error::NoTargetFound) => {}
        other => panic!("expected NoTargetFound, got {:?}", other),
    }
}

#[test]
fn echo_mismatch_is_rejected() {
    // SAM echo arriving for a firmware query
    let frame = common::fixtures::sam_frame();
    match decode_response_frame(0x02, &frame) {
        Err(Error::UnexpectedResponse {
            expected: 0x03,
            actual: 0x15,
        }) => {}
        other => panic!("expected UnexpectedResponse, got {:?}", other),
    }
}

#[test]
fn corrupted_dcs_is_rejected_whole() {
    let mut frame = common::fixtures::firmware_frame();
    let dcs_idx = frame.len() - 2;
    frame[dcs_idx] ^= 0x01;
    assert!(matches!(
        decode_response_frame(0x02, &frame),
        Err(Error::InvalidDataChecksum { .. })
    ));
}
