//! # adb-verify - connection check for Android devices over adb
//!
//! Thin wrapper around the `adb` command-line tool. Provides:
//! - Tool availability check (`adb version`)
//! - Device enumeration (`adb devices`) filtered to ready devices
//! - Per-device property queries (`adb -s <serial> shell getprop <prop>`)
//! - Optional network connect and connectivity probes
//!
//! ## Quick Start
//! ```no_run
//! use adb_verify::{device, AdbTransport, Config};
//!
//! let config = Config::from_env();
//! let adb = AdbTransport::new(&config.program);
//! device::check_available(&adb).unwrap();
//! for serial in device::list_devices(&adb).unwrap() {
//!     let info = device::query_property(&adb, &serial, &config.property).unwrap();
//!     println!("{}: {:?}", info.serial, info.value);
//! }
//! ```

pub mod error;
pub mod types;
pub mod protocol;
pub mod bridge;
pub mod config;
pub mod device;
pub mod verify;

pub use error::AdbError;
pub use types::*;
pub use bridge::{AdbTransport, CommandOutput, Transport};
pub use config::Config;

/// Result type alias for adb-verify operations.
pub type Result<T> = std::result::Result<T, AdbError>;
