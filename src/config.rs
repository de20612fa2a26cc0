use crate::protocol::{DEFAULT_CONNECT_PORT, PROP_MODEL};
use std::path::PathBuf;

pub const ENV_PROGRAM: &str = "ADB_VERIFY_ADB";
pub const ENV_PROPERTY: &str = "ADB_VERIFY_PROPERTY";
pub const ENV_PORT: &str = "ADB_VERIFY_PORT";

/// Runtime settings, taken from `ADB_VERIFY_*` environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Bridge executable, looked up on `PATH` when not absolute.
    pub program: PathBuf,
    /// Property queried for every ready device.
    pub property: String,
    /// Port appended to connect addresses given without one.
    pub connect_port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            program: PathBuf::from("adb"),
            property: PROP_MODEL.to_string(),
            connect_port: DEFAULT_CONNECT_PORT,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a config from an arbitrary variable lookup. Unset, empty or
    /// unparsable values fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            program: read_string(lookup(ENV_PROGRAM))
                .map(PathBuf::from)
                .unwrap_or(defaults.program),
            property: read_string(lookup(ENV_PROPERTY)).unwrap_or(defaults.property),
            connect_port: read_u16(ENV_PORT, lookup(ENV_PORT), defaults.connect_port),
        }
    }
}

fn read_string(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn read_u16(name: &str, value: Option<String>, default: u16) -> u16 {
    match read_string(value) {
        Some(v) => v.parse::<u16>().unwrap_or_else(|_| {
            log::warn!("Ignoring {}='{}', using {}", name, v, default);
            default
        }),
        None => default,
    }
}
