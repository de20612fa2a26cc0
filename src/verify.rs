//! The end-to-end connection check: tool, optional connect, devices, properties.

use crate::bridge::Transport;
use crate::config::Config;
use crate::device;
use crate::types::{DeviceDetails, DeviceReport};
use crate::{AdbError, Result};
use std::io::Write;

const TOOL_GUIDANCE: &str = "\
Make sure the Android SDK platform-tools are installed and that adb is on PATH
(or point ADB_VERIFY_ADB at the adb executable).";

const DEVICE_GUIDANCE: &str = "\
Make sure that:
  1. The device is connected over USB or reachable on the same network
  2. Developer options are enabled on the device
  3. USB debugging is enabled
  4. The USB debugging prompt has been accepted on the device";

/// What to do beyond the basic check.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Network address to `adb connect` before listing devices.
    pub address: Option<String>,
    /// Query manufacturer/Android version and run connectivity probes.
    pub details: bool,
}

/// Run the full check, writing the human-readable report to `out`.
///
/// Returns one report per ready device. Fails with `AdbError::NoDevices`
/// when nothing is connected, after printing guidance.
pub fn run<T: Transport, W: Write>(
    transport: &T,
    config: &Config,
    options: &Options,
    out: &mut W,
) -> Result<Vec<DeviceReport>> {
    writeln!(out, "=== Android device connection check ===")?;

    let version = match device::check_available(transport) {
        Ok(v) => v,
        Err(e) => {
            writeln!(out, "Device bridge is not available: {}", e)?;
            writeln!(out, "{}", TOOL_GUIDANCE)?;
            return Err(e);
        }
    };
    writeln!(out, "Device bridge: {}", version)?;

    if let Some(address) = &options.address {
        writeln!(out, "Connecting to {}...", address)?;
        match device::connect(transport, address, config.connect_port) {
            Ok(target) => writeln!(out, "Connected to {}", target)?,
            Err(e) => {
                writeln!(out, "Connection failed: {}", e)?;
                writeln!(out, "{}", DEVICE_GUIDANCE)?;
                return Err(e);
            }
        }
    }

    let entries = device::list_entries(transport)?;
    let (serials, skipped) = device::split_entries(&entries);
    for entry in skipped {
        writeln!(out, "Skipping {} (state: {})", entry.serial, entry.state)?;
    }

    if serials.is_empty() {
        writeln!(out, "No connected devices found.")?;
        writeln!(out, "{}", DEVICE_GUIDANCE)?;
        return Err(AdbError::NoDevices);
    }

    writeln!(out, "Found {} connected device(s):", serials.len())?;

    let mut reports = Vec::with_capacity(serials.len());
    for serial in &serials {
        let info = device::query_property(transport, serial, &config.property)?;
        writeln!(out, "Device: {}", info.serial)?;
        writeln!(
            out,
            "  {}: {}",
            info.property,
            info.value.as_deref().unwrap_or("unknown")
        )?;

        let details = if options.details {
            let details = device::query_details(transport, serial)?;
            write_details(out, &details)?;
            Some(details)
        } else {
            None
        };

        reports.push(DeviceReport { info, details });
    }

    Ok(reports)
}

fn write_details<W: Write>(out: &mut W, details: &DeviceDetails) -> Result<()> {
    let yes_no = |ok: bool| if ok { "ok" } else { "FAILED" };

    writeln!(
        out,
        "  manufacturer: {}",
        details.manufacturer.as_deref().unwrap_or("unknown")
    )?;
    writeln!(
        out,
        "  android version: {}",
        details.android_version.as_deref().unwrap_or("unknown")
    )?;
    writeln!(out, "  shell: {}", yes_no(details.connectivity.shell))?;
    writeln!(out, "  storage: {}", yes_no(details.connectivity.storage))?;
    Ok(())
}
