#[path = "../common/mod.rs"]
mod common;

use libpn532::device::Pn532;
use libpn532::test_support;
use libpn532::transport::mock::MockTransport;

#[test]
fn initialize_transitions_to_initialized() {
    let mut m = MockTransport::new();
    test_support::seed_init_exchange(&mut m);

    let dev = Pn532::new_with_transport(Box::new(m));
    // Transition consumes the uninitialized handle
    let _initialized = dev.initialize().unwrap();
}

#[test]
fn initialize_fails_when_device_is_silent() {
    let m = MockTransport::new();
    let dev = Pn532::new_with_transport(Box::new(m));
    assert!(matches!(
        dev.initialize(),
        Err(libpn532::Error::AckTimeout)
    ));
}
