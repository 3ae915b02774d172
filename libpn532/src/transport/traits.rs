// libpn532/src/transport/traits.rs

use crate::Result;

/// Transport trait abstracts byte-level I/O away from protocol/driver
/// logic. Implementations deliver frame bytes only; any bus-specific
/// envelope (the I2C leading status byte) is handled below this seam.
pub trait Transport {
    /// Send raw bytes to the device. An incomplete write is an error.
    fn write(&mut self, data: &[u8]) -> Result<()>;

    /// Receive up to `max_len` bytes with a timeout in milliseconds.
    /// A read that produced nothing before the deadline returns
    /// `Error::Timeout`; a short read returns the bytes gathered so far
    /// and the caller judges whether that is enough.
    fn read(&mut self, max_len: usize, timeout_ms: u64) -> Result<Vec<u8>>;

    /// Block until the device signals it has data ready, or the timeout
    /// elapses (`Error::Timeout`). The default is for transports with no
    /// ready signal: the subsequent read carries the wait.
    fn wait_ready(&mut self, _timeout_ms: u64) -> Result<()> {
        Ok(())
    }

    /// Perform the transport-specific wakeup ritual, if any. Default
    /// implementation does nothing; buses that need a wakeup sequence
    /// (UART preamble, I2C dummy command) override this.
    fn wakeup(&mut self) -> Result<()> {
        Ok(())
    }
}
