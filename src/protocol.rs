use crate::types::{DeviceEntry, DeviceState};
use std::net::Ipv6Addr;

// -- Tool subcommands --
pub const CMD_VERSION: &[&str] = &["version"];
pub const CMD_DEVICES: &[&str] = &["devices"];
pub const CMD_CONNECT: &str = "connect";
pub const CMD_GETPROP: &str = "getprop";

// -- Device list framing --
pub const DEVICE_LIST_HEADER: &str = "List of devices attached";
/// Daemon status lines ("* daemon not running; starting now ...") start with this.
pub const DAEMON_MARKER: char = '*';

// -- Properties --
pub const PROP_MODEL: &str = "ro.product.model";
pub const PROP_MANUFACTURER: &str = "ro.product.manufacturer";
pub const PROP_ANDROID_VERSION: &str = "ro.build.version.release";

// -- Connectivity probes (remote shell commands) --
pub const PROBE_SHELL: &[&str] = &["ping", "-c", "1", "127.0.0.1"];
pub const PROBE_STORAGE: &[&str] = &["ls", "/data/local/tmp"];

pub const DEFAULT_CONNECT_PORT: u16 = 5555;

/// Build `-s <serial> shell <remote...>`.
pub fn build_shell_command<'a>(serial: &'a str, remote: &[&'a str]) -> Vec<&'a str> {
    let mut args = Vec::with_capacity(3 + remote.len());
    args.extend_from_slice(&["-s", serial, "shell"]);
    args.extend_from_slice(remote);
    args
}

/// Build `-s <serial> shell getprop <property>`.
pub fn build_getprop_command<'a>(serial: &'a str, property: &'a str) -> Vec<&'a str> {
    build_shell_command(serial, &[CMD_GETPROP, property])
}

/// Resolve a user supplied address into a `host:port` connect target.
///
/// Addresses that already carry a port (`host:port`, `[v6]:port`) are used
/// unchanged. Bare IPv6 addresses are bracketed before the port is added.
pub fn connect_target(address: &str, port: u16) -> String {
    let address = address.trim();
    if let Some(rest) = address.strip_prefix('[') {
        return if rest.contains("]:") {
            address.to_string()
        } else {
            format!("{}:{}", address, port)
        };
    }
    if address.parse::<Ipv6Addr>().is_ok() {
        return format!("[{}]:{}", address, port);
    }
    if address.contains(':') {
        address.to_string()
    } else {
        format!("{}:{}", address, port)
    }
}

/// Parse `adb devices` output into entries, in listing order.
///
/// Skips the header, daemon status lines and blank lines. Each remaining
/// line is `<serial>` followed by whitespace and the state, which may span
/// several words (`no permissions (user in plugdev group); see [...]`).
pub fn parse_device_list(output: &str) -> Vec<DeviceEntry> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| {
            !line.is_empty()
                && !line.starts_with(DEVICE_LIST_HEADER)
                && !line.starts_with(DAEMON_MARKER)
        })
        .filter_map(|line| {
            let (serial, state) = line.split_once(char::is_whitespace)?;
            let state = state.trim();
            if state.is_empty() {
                return None;
            }
            Some(DeviceEntry {
                serial: serial.to_string(),
                state: DeviceState::from(state),
            })
        })
        .collect()
}

/// Serials of entries in the ready `device` state.
pub fn ready_serials(entries: &[DeviceEntry]) -> Vec<String> {
    entries
        .iter()
        .filter(|e| e.state.is_ready())
        .map(|e| e.serial.clone())
        .collect()
}

/// First non-empty line of `adb version` output.
pub fn parse_version(output: &str) -> Option<String> {
    output
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(str::to_string)
}

/// `adb connect` exits 0 even when the connection fails, so success is
/// judged from its output: "connected to" or "already connected to".
pub fn connect_succeeded(output: &str) -> bool {
    output.to_ascii_lowercase().contains("connected to")
}

/// Trim a getprop result. Empty output means the property is unset.
pub fn extract_property(output: &str) -> Option<String> {
    let value = output.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
