use libpn532::Error;
use libpn532::transport::mock::MockTransport;
use libpn532::transport::traits::Transport;

#[test]
fn writes_are_recorded_in_order() {
    let mut m = MockTransport::new();
    m.write(&[0x01]).unwrap();
    m.write(&[0x02, 0x03]).unwrap();
    assert_eq!(m.sent, vec![vec![0x01], vec![0x02, 0x03]]);
    assert_eq!(m.pop_sent(), Some(vec![0x02, 0x03]));
}

#[test]
fn reads_drain_the_seeded_byte_queue() {
    let mut m = MockTransport::new();
    m.push_response(vec![0x00, 0x00, 0xFF, 0x02, 0xFE, 0xD5]);
    m.push_response(vec![0x03, 0x28, 0x00]);

    // Header/body reads split the stream the way the driver does
    let header = m.read(6, 100).unwrap();
    assert_eq!(header.len(), 6);
    let body = m.read(3, 100).unwrap();
    assert_eq!(body, vec![0x03, 0x28, 0x00]);
}

#[test]
fn exhausted_queue_times_out() {
    let mut m = MockTransport::new();
    assert!(matches!(m.read(1, 100), Err(Error::Timeout)));
}

#[test]
fn forced_ready_failures_then_recovery() {
    let mut m = MockTransport::new();
    m.set_ready_failures(1);
    assert!(matches!(m.wait_ready(100), Err(Error::Timeout)));
    m.wait_ready(100).unwrap();
}

#[test]
fn wakeup_calls_are_counted() {
    let mut m = MockTransport::new();
    m.wakeup().unwrap();
    m.wakeup().unwrap();
    assert_eq!(m.wakeups, 2);
}
