// libpn532/src/prelude.rs

pub use crate::card::CardInfo;
pub use crate::device::Pn532;
pub use crate::device::{Initialized, Uninitialized};
pub use crate::protocol::{Command, FirmwareVersion, Response};
pub use crate::transport::{MockTransport, Transport};
pub use crate::{Atqa, BaudModulation, Error, Result, Sak, SamMode, Uid};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, default_command_timeout, ms, parse_hex};
