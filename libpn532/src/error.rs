// libpn532/src/error.rs

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("transport write failed: {0}")]
    TransportWrite(String),

    #[error("transport read failed: {0}")]
    TransportRead(String),

    #[error("frame too large: {len} bytes of command data, limit is {max}")]
    FrameTooLarge { len: usize, max: usize },

    #[error("timed out waiting for ack")]
    AckTimeout,

    #[error("invalid ack frame")]
    InvalidAck,

    #[error("timed out waiting for response")]
    ResponseTimeout,

    #[error("invalid frame header: {0}")]
    InvalidHeader(String),

    #[error("length checksum mismatch: expected {expected:#04x}, got {actual:#04x}")]
    InvalidLengthChecksum { expected: u8, actual: u8 },

    #[error("invalid frame direction byte: expected {expected:#04x}, got {actual:#04x}")]
    InvalidTfi { expected: u8, actual: u8 },

    #[error("data checksum mismatch: expected {expected:#04x}, got {actual:#04x}")]
    InvalidDataChecksum { expected: u8, actual: u8 },

    #[error("unexpected response code: expected {expected:#04x}, got {actual:#04x}")]
    UnexpectedResponse { expected: u8, actual: u8 },

    #[error("invalid response length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("no target in field")]
    NoTargetFound,

    #[error("uid too long: {0} bytes")]
    UidTooLong(usize),

    // Raised by transports when a read produced nothing before the
    // deadline. The transaction driver converts it into the stage error
    // (AckTimeout / ResponseTimeout); it never escapes a transaction.
    #[error("operation timed out")]
    Timeout,
}

pub type Result<T> = std::result::Result<T, Error>;
