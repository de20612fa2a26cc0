use crate::bridge::Transport;
use crate::protocol::{self, CMD_CONNECT, CMD_DEVICES, CMD_VERSION};
use crate::types::{Connectivity, DeviceDetails, DeviceEntry, DeviceInfo};
use crate::{AdbError, Result};

/// Check that the bridge tool can be launched and answers `version`.
///
/// Returns the first line of the version banner.
pub fn check_available<T: Transport>(transport: &T) -> Result<String> {
    let output = transport.run(CMD_VERSION)?;
    if !output.success {
        let reason = protocol::parse_version(&output.stderr)
            .unwrap_or_else(|| "`adb version` exited with an error".to_string());
        return Err(AdbError::ToolUnavailable(reason));
    }

    let version =
        protocol::parse_version(&output.stdout).unwrap_or_else(|| "unknown version".to_string());
    log::info!("Device bridge available: {}", version);
    Ok(version)
}

/// List every entry reported by `adb devices`, whatever its state.
pub fn list_entries<T: Transport>(transport: &T) -> Result<Vec<DeviceEntry>> {
    let output = transport.run(CMD_DEVICES)?.check(CMD_DEVICES)?;
    Ok(protocol::parse_device_list(&output.stdout))
}

/// List the serials of devices that are ready for commands.
pub fn list_devices<T: Transport>(transport: &T) -> Result<Vec<String>> {
    let entries = list_entries(transport)?;
    let (ready, _) = split_entries(&entries);
    Ok(ready)
}

/// Split entries into ready serials and the entries that will be skipped.
/// Skipped entries are logged.
pub fn split_entries(entries: &[DeviceEntry]) -> (Vec<String>, Vec<&DeviceEntry>) {
    let skipped: Vec<&DeviceEntry> = entries.iter().filter(|e| !e.state.is_ready()).collect();
    for entry in &skipped {
        log::warn!("Skipping {} (state: {})", entry.serial, entry.state);
    }
    (protocol::ready_serials(entries), skipped)
}

/// Read one system property from a device.
///
/// A failed query is not fatal: it is logged and reported as `value: None`.
/// Only a failure to launch the tool is returned as an error.
pub fn query_property<T: Transport>(
    transport: &T,
    serial: &str,
    property: &str,
) -> Result<DeviceInfo> {
    let value = read_property(transport, serial, property)?;
    Ok(DeviceInfo {
        serial: serial.to_string(),
        property: property.to_string(),
        value,
    })
}

fn read_property<T: Transport>(
    transport: &T,
    serial: &str,
    property: &str,
) -> Result<Option<String>> {
    let args = protocol::build_getprop_command(serial, property);
    match transport.run(&args)?.check(&args) {
        Ok(output) => Ok(protocol::extract_property(&output.stdout)),
        Err(e) => {
            log::warn!("Failed to read {} from {}: {}", property, serial, e);
            Ok(None)
        }
    }
}

/// Gather manufacturer, Android version and run the connectivity probes.
pub fn query_details<T: Transport>(transport: &T, serial: &str) -> Result<DeviceDetails> {
    let manufacturer = read_property(transport, serial, protocol::PROP_MANUFACTURER)?;
    let android_version = read_property(transport, serial, protocol::PROP_ANDROID_VERSION)?;
    let connectivity = probe_connection(transport, serial)?;

    Ok(DeviceDetails {
        manufacturer,
        android_version,
        connectivity,
    })
}

/// Run the shell and storage probes on a device.
pub fn probe_connection<T: Transport>(transport: &T, serial: &str) -> Result<Connectivity> {
    Ok(Connectivity {
        shell: probe(transport, serial, protocol::PROBE_SHELL)?,
        storage: probe(transport, serial, protocol::PROBE_STORAGE)?,
    })
}

fn probe<T: Transport>(transport: &T, serial: &str, remote: &[&str]) -> Result<bool> {
    let args = protocol::build_shell_command(serial, remote);
    let output = transport.run(&args)?;
    if !output.success {
        log::warn!(
            "Probe `{}` failed on {}: {}",
            remote.join(" "),
            serial,
            output.stderr.trim()
        );
    }
    Ok(output.success)
}

/// Connect to a device over TCP/IP with `adb connect`.
///
/// Returns the resolved `host:port` target.
pub fn connect<T: Transport>(transport: &T, address: &str, port: u16) -> Result<String> {
    let target = protocol::connect_target(address, port);
    let output = transport.run(&[CMD_CONNECT, target.as_str()])?;

    // adb reports connect failures on stdout with a zero exit status
    if output.success && protocol::connect_succeeded(&output.stdout) {
        log::info!("Connected to {}", target);
        return Ok(target);
    }

    let reason = [output.stdout.trim(), output.stderr.trim()]
        .into_iter()
        .find(|s| !s.is_empty())
        .unwrap_or("no response from adb")
        .to_string();
    Err(AdbError::Connect { target, reason })
}
