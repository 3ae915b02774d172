#[path = "../common/mod.rs"]
mod common;

use libpn532::Error;
use libpn532::protocol::Frame;

#[test]
fn firmware_frame_decodes_to_fixture_payload() {
    let frame = common::fixtures::firmware_frame();
    let data = Frame::decode(&frame).expect("frame decode");
    assert_eq!(data, common::fixtures::firmware_payload());
}

#[test]
fn get_firmware_version_wire_bytes() {
    // The canonical frame from the PN532 user manual
    let frame = Frame::encode(&[0x02]).unwrap();
    assert_eq!(hex::encode(&frame), "0000ff02fed4022a00");
}

#[test]
fn target_frame_roundtrip_with_seven_byte_uid() {
    let uid = [0x04, 0x8C, 0x7A, 0x5A, 0x3F, 0x48, 0x80];
    let frame = common::fixtures::target_frame(&uid);
    let data = Frame::decode(&frame).unwrap();
    assert_eq!(data, common::fixtures::target_payload(&uid));
}

#[test]
fn frames_not_starting_with_preamble_are_rejected() {
    let mut frame = common::fixtures::firmware_frame();
    frame[2] = 0x00; // startcode2 gone
    assert!(matches!(Frame::decode(&frame), Err(Error::InvalidHeader(_))));

    let garbage = vec![0x55u8; 12];
    assert!(matches!(
        Frame::decode(&garbage),
        Err(Error::InvalidHeader(_))
    ));
}

#[test]
fn ack_is_not_a_decodable_data_frame() {
    // 6 bytes is below the minimal data frame length
    let ack = [0x00, 0x00, 0xFF, 0x00, 0xFF, 0x00];
    assert!(Frame::is_ack(&ack));
    assert!(matches!(
        Frame::decode(&ack),
        Err(Error::InvalidLength { .. })
    ));
}
