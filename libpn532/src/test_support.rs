//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common MockTransport setup so tests across the
//! crate and tests/ directory can reuse the same logic.
#![allow(dead_code)]

use crate::protocol::checksum::{dcs, lcs};
use crate::transport::mock::MockTransport;
use crate::{Result, device};

/// Build a complete device-to-host wire frame (TFI 0xD5) around the
/// given inner data (response code + payload). The production codec only
/// encodes host-to-device frames; tests need the other direction.
#[doc(hidden)]
pub fn device_frame(data: &[u8]) -> Vec<u8> {
    let len = (data.len() + 1) as u8;
    let mut out = Vec::with_capacity(data.len() + crate::constants::FRAME_OVERHEAD);
    out.extend_from_slice(&crate::constants::FRAME_PREAMBLE);
    out.push(len);
    out.push(lcs(len));
    out.push(crate::constants::TFI_DEVICE_TO_HOST);
    out.extend_from_slice(data);
    out.push(dcs(crate::constants::TFI_DEVICE_TO_HOST, data));
    out.push(crate::constants::FRAME_POSTAMBLE);
    out
}

/// Seed the ack + response exchange pairs the initialization handshake
/// consumes (GetFirmwareVersion, then SAMConfiguration).
#[doc(hidden)]
pub fn seed_init_exchange(mock: &mut MockTransport) {
    mock.push_ack();
    mock.push_response(device_frame(&[0x03, 0x32, 0x01, 0x06, 0x07]));
    mock.push_ack();
    mock.push_response(device_frame(&[0x15]));
}

/// Push one complete ack + framed-response exchange.
#[doc(hidden)]
pub fn seed_exchange(mock: &mut MockTransport, inner_data: &[u8]) {
    mock.push_ack();
    mock.push_response(device_frame(inner_data));
}

/// Convenience: create and initialize a Pn532 handle backed by a
/// MockTransport pre-seeded with the init handshake plus the provided
/// inner response payloads (each wrapped in a frame and preceded by an
/// ack).
#[doc(hidden)]
pub fn initialized_mock_device(
    exchanges: Vec<Vec<u8>>,
) -> Result<device::Pn532<device::Initialized>> {
    let mut mock = MockTransport::new();
    seed_init_exchange(&mut mock);
    for data in exchanges {
        seed_exchange(&mut mock, &data);
    }
    let dev = device::Pn532::new_with_transport(Box::new(mock));
    dev.initialize()
}
