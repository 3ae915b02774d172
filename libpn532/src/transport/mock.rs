// libpn532/src/transport/mock.rs

use std::collections::VecDeque;

use crate::transport::traits::Transport;
use crate::{Error, Result};

/// Mock transport for unit tests. It records written frames and serves
/// reads from a single seeded byte queue, so a full response frame can
/// be pushed once and consumed by the driver's header/body read pair
/// exactly as it would come off a real bus.
#[derive(Debug, Default)]
pub struct MockTransport {
    /// Frames written by the driver, in order
    pub sent: Vec<Vec<u8>>,
    /// Pending bytes served to `read`
    pub rx: VecDeque<u8>,
    /// Testing hook: number of wait_ready calls that should fail with Timeout
    pub ready_failures: usize,
    /// Number of wakeup calls observed
    pub wakeups: usize,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue response bytes for subsequent reads.
    pub fn push_response(&mut self, resp: Vec<u8>) {
        self.rx.extend(resp);
    }

    /// Queue an acknowledge frame.
    pub fn push_ack(&mut self) {
        self.rx.extend(crate::constants::ACK_FRAME);
    }

    /// Set how many subsequent wait_ready calls should fail (for tests).
    pub fn set_ready_failures(&mut self, n: usize) {
        self.ready_failures = n;
    }

    pub fn pop_sent(&mut self) -> Option<Vec<u8>> {
        self.sent.pop()
    }
}

impl Transport for MockTransport {
    fn write(&mut self, data: &[u8]) -> Result<()> {
        self.sent.push(data.to_vec());
        Ok(())
    }

    fn read(&mut self, max_len: usize, _timeout_ms: u64) -> Result<Vec<u8>> {
        if self.rx.is_empty() {
            return Err(Error::Timeout);
        }
        let n = max_len.min(self.rx.len());
        Ok(self.rx.drain(..n).collect())
    }

    fn wait_ready(&mut self, _timeout_ms: u64) -> Result<()> {
        if self.ready_failures > 0 {
            self.ready_failures -= 1;
            return Err(Error::Timeout);
        }
        Ok(())
    }

    fn wakeup(&mut self) -> Result<()> {
        self.wakeups += 1;
        Ok(())
    }
}
