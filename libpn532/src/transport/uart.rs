// libpn532/src/transport/uart.rs

use std::thread;
use std::time::Instant;

use embedded_io::{Read, ReadReady, Write};

use crate::transport::traits::Transport;
use crate::utils::ms;
use crate::{Error, Result};

/// Wakeup preamble: a burst of 0x55 then zeros lifts the chip out of
/// low-VBAT mode before the first real frame.
const WAKEUP_PREAMBLE: [u8; 16] = [
    0x55, 0x55, 0x55, 0x55, 0x55, 0x55, 0x55, 0x55, 0x55, 0x55, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

/// Settle delay before reading the acknowledge / response, milliseconds.
/// The chip exposes no ready signal over UART.
const SETTLE_DELAY_MS: u64 = 10;

/// Settle time after the wakeup preamble, milliseconds
const WAKEUP_SETTLE_MS: u64 = 100;

/// Poll interval while waiting for receive bytes, milliseconds
const RX_POLL_INTERVAL_MS: u64 = 1;

/// UART stream-read transport. Bytes arrive as sent; reads accumulate
/// until the requested count or the deadline.
pub struct UartTransport<U> {
    port: U,
}

impl<U> UartTransport<U>
where
    U: Read + ReadReady + Write,
{
    pub fn new(port: U) -> Self {
        Self { port }
    }

    /// Give the port back to the caller.
    pub fn release(self) -> U {
        self.port
    }

    fn drain_rx(&mut self) -> Result<()> {
        let mut scratch = [0u8; 32];
        while self
            .port
            .read_ready()
            .map_err(|e| Error::TransportRead(format!("{e:?}")))?
        {
            let n = self
                .port
                .read(&mut scratch)
                .map_err(|e| Error::TransportRead(format!("{e:?}")))?;
            if n == 0 {
                break;
            }
        }
        Ok(())
    }
}

impl<U> Transport for UartTransport<U>
where
    U: Read + ReadReady + Write,
{
    fn write(&mut self, data: &[u8]) -> Result<()> {
        self.port
            .write_all(data)
            .map_err(|e| Error::TransportWrite(format!("{e:?}")))?;
        self.port
            .flush()
            .map_err(|e| Error::TransportWrite(format!("{e:?}")))
    }

    fn read(&mut self, max_len: usize, timeout_ms: u64) -> Result<Vec<u8>> {
        let deadline = Instant::now() + ms(timeout_ms);
        let mut out = Vec::with_capacity(max_len);
        let mut buf = [0u8; 64];

        while out.len() < max_len {
            let ready = self
                .port
                .read_ready()
                .map_err(|e| Error::TransportRead(format!("{e:?}")))?;
            if ready {
                let want = (max_len - out.len()).min(buf.len());
                let n = self
                    .port
                    .read(&mut buf[..want])
                    .map_err(|e| Error::TransportRead(format!("{e:?}")))?;
                if n == 0 {
                    break;
                }
                out.extend_from_slice(&buf[..n]);
                continue;
            }
            if Instant::now() >= deadline {
                break;
            }
            thread::sleep(ms(RX_POLL_INTERVAL_MS));
        }

        if out.is_empty() {
            return Err(Error::Timeout);
        }
        Ok(out)
    }

    fn wait_ready(&mut self, _timeout_ms: u64) -> Result<()> {
        // No ready signal over UART; a short settle delay matches the
        // chip's frame turnaround.
        thread::sleep(ms(SETTLE_DELAY_MS));
        Ok(())
    }

    fn wakeup(&mut self) -> Result<()> {
        self.write(&WAKEUP_PREAMBLE)?;
        thread::sleep(ms(WAKEUP_SETTLE_MS));
        // Discard anything the chip emitted while waking
        self.drain_rx()
    }
}
