// libpn532/src/transport/i2c.rs

use std::thread;
use std::time::Instant;

use embedded_hal::i2c::I2c;

use crate::transport::traits::Transport;
use crate::utils::ms;
use crate::{Error, Result};

/// Status byte bit0: device has a frame ready to be read
const STATUS_READY: u8 = 0x01;

/// Wakeup frame: a bare SAMConfiguration (normal mode) the chip accepts
/// while still half-asleep. The reply, if any, is not collected.
const WAKEUP_FRAME: [u8; 10] = [0x00, 0x00, 0xFF, 0x03, 0xFD, 0xD4, 0x14, 0x01, 0x17, 0x00];

/// Settle time after the wakeup write, milliseconds
const WAKEUP_SETTLE_MS: u64 = 100;

/// I2C polling-read transport. Every bus read carries a leading status
/// byte which is stripped before the frame bytes are returned, so the
/// driver above sees the same byte stream as over UART.
pub struct I2cTransport<I> {
    bus: I,
    address: u8,
}

impl<I: I2c> I2cTransport<I> {
    /// Wrap an I2C bus using the default PN532 address (0x24).
    pub fn new(bus: I) -> Self {
        Self::with_address(bus, crate::constants::PN532_I2C_ADDRESS)
    }

    /// Wrap an I2C bus with an explicit 7-bit device address.
    pub fn with_address(bus: I, address: u8) -> Self {
        Self { bus, address }
    }

    /// Give the bus back to the caller.
    pub fn release(self) -> I {
        self.bus
    }

    fn status_ready(&mut self) -> bool {
        let mut status = [0u8; 1];
        // A NACK while the chip is busy reads as a bus error; treat it
        // as not-ready and keep polling.
        match self.bus.read(self.address, &mut status) {
            Ok(()) => status[0] & STATUS_READY == STATUS_READY,
            Err(_) => false,
        }
    }
}

impl<I: I2c> Transport for I2cTransport<I> {
    fn write(&mut self, data: &[u8]) -> Result<()> {
        self.bus
            .write(self.address, data)
            .map_err(|e| Error::TransportWrite(format!("{e:?}")))
    }

    fn read(&mut self, max_len: usize, _timeout_ms: u64) -> Result<Vec<u8>> {
        // wait_ready has already gated the timing; one bus transaction
        // fetches status byte + frame bytes.
        let mut buf = vec![0u8; max_len + 1];
        self.bus
            .read(self.address, &mut buf)
            .map_err(|e| Error::TransportRead(format!("{e:?}")))?;
        buf.remove(0); // leading status byte
        Ok(buf)
    }

    fn wait_ready(&mut self, timeout_ms: u64) -> Result<()> {
        let deadline = Instant::now() + ms(timeout_ms);
        loop {
            if self.status_ready() {
                return Ok(());
            }
            if Instant::now() >= deadline {
                return Err(Error::Timeout);
            }
            thread::sleep(ms(crate::constants::READY_POLL_INTERVAL_MS));
        }
    }

    fn wakeup(&mut self) -> Result<()> {
        // Best-effort: a module already awake may NACK the dummy frame.
        if let Err(e) = self.write(&WAKEUP_FRAME) {
            log::warn!("wakeup write failed, continuing: {e}");
        }
        thread::sleep(ms(WAKEUP_SETTLE_MS));
        Ok(())
    }
}
