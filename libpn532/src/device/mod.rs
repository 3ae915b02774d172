// libpn532/src/device/mod.rs

mod handle;

pub use handle::{Initialized, Pn532, Uninitialized};
