#[path = "../common/mod.rs"]
mod common;

use libpn532::protocol::Command;
use libpn532::protocol::codec::encode_command_frame;
use libpn532::{BaudModulation, SamMode};

#[test]
fn get_firmware_version_encodes_bare_opcode() {
    let cmd = Command::GetFirmwareVersion;
    assert_eq!(cmd.encode(), vec![0x02]);
}

#[test]
fn sam_configuration_encodes_default_args() {
    let cmd = Command::SamConfiguration {
        mode: SamMode::Normal,
        timeout: 0x14,
        use_irq: true,
    };
    assert_eq!(cmd.encode(), vec![0x14, 0x01, 0x14, 0x01]);
}

#[test]
fn in_list_passive_target_encodes_single_type_a() {
    let cmd = Command::InListPassiveTarget {
        max_targets: 1,
        modulation: BaudModulation::IsoTypeA106kbps,
    };
    assert_eq!(cmd.encode(), vec![0x4A, 0x01, 0x00]);
}

#[test]
fn framed_sam_configuration_wire_bytes() {
    let cmd = Command::SamConfiguration {
        mode: SamMode::Normal,
        timeout: 0x14,
        use_irq: true,
    };
    let frame = encode_command_frame(&cmd).unwrap();
    assert_eq!(hex::encode(&frame), "0000ff05fbd4140114010200");
}
