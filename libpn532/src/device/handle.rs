// libpn532/src/device/handle.rs

use std::marker::PhantomData;

use log::{debug, info, warn};

use crate::card::CardInfo;
use crate::constants::{
    ACK_FRAME, ACK_WAIT_MS, DEFAULT_COMMAND_TIMEOUT_MS, FRAME_PREAMBLE, RESPONSE_HEADER_LEN,
    TFI_DEVICE_TO_HOST,
};
use crate::protocol::checksum::lcs;
use crate::protocol::codec;
use crate::protocol::{Command, FirmwareVersion, Frame, Response};
use crate::transport::Transport;
use crate::types::{BaudModulation, SamMode};
use crate::{Error, Result};

/// Type-state markers
pub struct Uninitialized;
pub struct Initialized;

/// PN532 driver handle that enforces initialization state at compile
/// time. One handle exclusively owns its transport; a transaction must
/// run to completion before the next one starts.
pub struct Pn532<State = Uninitialized> {
    transport: Box<dyn Transport>,
    _state: PhantomData<State>,
}

impl Pn532<Uninitialized> {
    /// Create a driver from an existing Transport instance.
    pub fn new_with_transport(transport: Box<dyn Transport>) -> Self {
        Self {
            transport,
            _state: PhantomData,
        }
    }

    /// Bring the chip to an operational state: run the transport wakeup
    /// ritual, confirm communication via GetFirmwareVersion, then put
    /// the SAM into normal mode. Returns an initialized handle.
    pub fn initialize(self) -> Result<Pn532<Initialized>> {
        let mut this = self;
        this.transport.wakeup()?;

        let version = match transact(
            &mut *this.transport,
            &Command::GetFirmwareVersion,
            DEFAULT_COMMAND_TIMEOUT_MS,
        )? {
            Response::FirmwareVersion(fw) => fw,
            other => {
                warn!("unexpected firmware response: {:?}", other);
                return Err(Error::UnexpectedResponse {
                    expected: Command::GetFirmwareVersion.response_code(),
                    actual: 0,
                });
            }
        };
        info!("PN532 firmware {}", version);

        // Normal mode, 20 x 50 ms virtual-card timeout, IRQ line in use
        transact(
            &mut *this.transport,
            &Command::SamConfiguration {
                mode: SamMode::Normal,
                timeout: 0x14,
                use_irq: true,
            },
            DEFAULT_COMMAND_TIMEOUT_MS,
        )?;

        Ok(Pn532 {
            transport: this.transport,
            _state: PhantomData,
        })
    }
}

impl Pn532<Initialized> {
    /// Execute a command transaction and return the parsed Response.
    pub fn execute(&mut self, cmd: Command, timeout_ms: u64) -> Result<Response> {
        transact(&mut *self.transport, &cmd, timeout_ms)
    }

    /// Query the chip firmware version.
    pub fn firmware_version(&mut self) -> Result<FirmwareVersion> {
        match self.execute(Command::GetFirmwareVersion, DEFAULT_COMMAND_TIMEOUT_MS)? {
            Response::FirmwareVersion(fw) => Ok(fw),
            other => Err(unexpected(&Command::GetFirmwareVersion, &other)),
        }
    }

    /// Reconfigure the SAM operating mode.
    pub fn sam_configuration(&mut self, mode: SamMode, timeout: u8, use_irq: bool) -> Result<()> {
        let cmd = Command::SamConfiguration {
            mode,
            timeout,
            use_irq,
        };
        match self.execute(cmd.clone(), DEFAULT_COMMAND_TIMEOUT_MS)? {
            Response::SamConfigured => Ok(()),
            other => Err(unexpected(&cmd, &other)),
        }
    }

    /// Wait for a single ISO14443-A target and return its identification.
    /// Use a short timeout (hundreds of milliseconds) when re-polling
    /// from a UI loop.
    pub fn read_passive_target(&mut self, timeout_ms: u64) -> Result<CardInfo> {
        let cmd = Command::InListPassiveTarget {
            max_targets: 1,
            modulation: BaudModulation::IsoTypeA106kbps,
        };
        match self.execute(cmd.clone(), timeout_ms)? {
            Response::PassiveTarget(card) => Ok(card),
            other => Err(unexpected(&cmd, &other)),
        }
    }
}

fn unexpected(cmd: &Command, got: &Response) -> Error {
    warn!("response variant mismatch for {:?}: {:?}", cmd, got);
    Error::UnexpectedResponse {
        expected: cmd.response_code(),
        actual: 0,
    }
}

/// Run one full send / ack / receive transaction. Any failure is
/// terminal for the transaction; retrying is the caller's decision.
fn transact(transport: &mut dyn Transport, cmd: &Command, timeout_ms: u64) -> Result<Response> {
    let frame = codec::encode_command_frame(cmd)?;
    debug!("-> {}", crate::utils::bytes_to_hex(&frame));
    transport.write(&frame)?;

    read_ack(transport)?;

    let raw = read_response_frame(transport, timeout_ms)?;
    debug!("<- {}", crate::utils::bytes_to_hex(&raw));

    codec::decode_response_frame(cmd.command_code(), &raw)
}

/// Wait for and verify the fixed 6-byte acknowledge frame.
fn read_ack(transport: &mut dyn Transport) -> Result<()> {
    transport
        .wait_ready(ACK_WAIT_MS)
        .map_err(stage(Error::AckTimeout))?;

    let buf = transport
        .read(ACK_FRAME.len(), ACK_WAIT_MS)
        .map_err(stage(Error::AckTimeout))?;
    if buf.len() < ACK_FRAME.len() {
        warn!("short ack read: {} bytes", buf.len());
        return Err(Error::AckTimeout);
    }
    if !Frame::is_ack(&buf) {
        warn!("invalid ack frame: {}", crate::utils::bytes_to_hex(&buf));
        return Err(Error::InvalidAck);
    }
    debug!("ack received");
    Ok(())
}

/// Read a complete response frame: header first, validated before the
/// body read is committed, then the remaining LEN + 1 bytes (payload
/// after TFI, DCS, postamble).
fn read_response_frame(transport: &mut dyn Transport, timeout_ms: u64) -> Result<Vec<u8>> {
    transport
        .wait_ready(timeout_ms)
        .map_err(stage(Error::ResponseTimeout))?;

    let header = transport
        .read(RESPONSE_HEADER_LEN, timeout_ms)
        .map_err(stage(Error::ResponseTimeout))?;
    if header.len() < RESPONSE_HEADER_LEN {
        warn!("short response header: {} bytes", header.len());
        return Err(Error::ResponseTimeout);
    }

    if header[..3] != FRAME_PREAMBLE {
        return Err(Error::InvalidHeader("invalid preamble".into()));
    }
    let len = header[3];
    let lcs_expected = lcs(len);
    if header[4] != lcs_expected {
        return Err(Error::InvalidLengthChecksum {
            expected: lcs_expected,
            actual: header[4],
        });
    }
    if len == 0 {
        return Err(Error::InvalidLength {
            expected: 1,
            actual: 0,
        });
    }
    if header[5] != TFI_DEVICE_TO_HOST {
        return Err(Error::InvalidTfi {
            expected: TFI_DEVICE_TO_HOST,
            actual: header[5],
        });
    }

    // LEN counts TFI + payload; the TFI already arrived in the header,
    // so payload + DCS + postamble remain.
    let remaining = len as usize + 1;
    let body = transport
        .read(remaining, timeout_ms)
        .map_err(stage(Error::ResponseTimeout))?;
    if body.len() < remaining {
        warn!("short response body: {} of {} bytes", body.len(), remaining);
        return Err(Error::ResponseTimeout);
    }

    let mut full = header;
    full.extend_from_slice(&body);
    Ok(full)
}

/// Map the transport-level Timeout into the stage error; all other
/// errors pass through untouched.
fn stage(timeout_error: Error) -> impl FnOnce(Error) -> Error {
    move |e| match e {
        Error::Timeout => timeout_error,
        other => other,
    }
}
