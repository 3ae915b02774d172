//! End-to-end walkthrough of the driver against the mock transport.
//!
//! Usage:
//!   cargo run -p libpn532 --example mock_read_uid

use anyhow::Result;
use libpn532::prelude::*;
use libpn532::test_support;
use libpn532::transport::mock::MockTransport;

fn main() -> Result<()> {
    env_logger::init();

    // Seed the byte stream a real module would produce: the init
    // handshake, then one InListPassiveTarget exchange.
    let mut mock = MockTransport::new();
    test_support::seed_init_exchange(&mut mock);
    let mut target = vec![0x4B, 0x01, 0x01, 0x00, 0x04, 0x08, 0x04];
    target.extend_from_slice(&[0xDE, 0xAD, 0xBE, 0xEF]);
    test_support::seed_exchange(&mut mock, &target);

    let dev = Pn532::new_with_transport(Box::new(mock));
    let mut dev = dev.initialize()?;
    println!("device initialized");

    let card = dev.read_passive_target(500)?;
    println!(
        "card found: uid={} atqa={:#06x} sak={:#04x}",
        card.uid().to_hex(),
        card.atqa().as_u16(),
        card.sak().as_u8()
    );

    Ok(())
}
