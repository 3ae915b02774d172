// libpn532/src/utils/mod.rs

pub mod hex;
pub mod timeout;

pub use hex::{bytes_to_hex, bytes_to_hex_spaced, parse_hex};
pub use timeout::{default_command_timeout, ms};
