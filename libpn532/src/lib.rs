// libpn532/src/lib.rs

//! libpn532
//!
//! Pure Rust transport-agnostic driver for NXP PN532 NFC reader modules.
//!
//! The crate splits into a pure frame codec (`protocol`), a byte-level
//! transport seam (`transport`, with I2C and UART implementations behind
//! features) and a blocking transaction driver (`device`). One frame
//! codec serves every transport; the buses only differ in how bytes are
//! moved and how readiness is signalled.

pub mod card;
pub mod constants;
pub mod device;
pub mod error;
pub mod prelude;
pub mod protocol;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
