use std::fmt;

/// Connection state reported by `adb devices` for one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceState {
    /// Authorized and ready for commands.
    Device,
    /// USB debugging prompt not yet accepted on the device.
    Unauthorized,
    Offline,
    /// Any other state string (`recovery`, `sideload`, `no permissions`, ...).
    Other(String),
}

impl DeviceState {
    pub fn is_ready(&self) -> bool {
        matches!(self, DeviceState::Device)
    }
}

impl From<&str> for DeviceState {
    fn from(s: &str) -> Self {
        match s {
            "device" => DeviceState::Device,
            "unauthorized" => DeviceState::Unauthorized,
            "offline" => DeviceState::Offline,
            other => DeviceState::Other(other.to_string()),
        }
    }
}

impl fmt::Display for DeviceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceState::Device => f.write_str("device"),
            DeviceState::Unauthorized => f.write_str("unauthorized"),
            DeviceState::Offline => f.write_str("offline"),
            DeviceState::Other(s) => f.write_str(s),
        }
    }
}

/// One line of the device list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceEntry {
    pub serial: String,
    pub state: DeviceState,
}

/// Result of a single property query against a device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceInfo {
    pub serial: String,
    /// Property name, e.g. `ro.product.model`.
    pub property: String,
    /// Trimmed property value. `None` if the query failed or came back empty.
    pub value: Option<String>,
}

/// Outcome of the shell and storage probes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Connectivity {
    pub shell: bool,
    pub storage: bool,
}

impl Connectivity {
    pub fn is_ok(&self) -> bool {
        self.shell && self.storage
    }
}

/// Extended device identification, gathered with `--details`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceDetails {
    pub manufacturer: Option<String>,
    pub android_version: Option<String>,
    pub connectivity: Connectivity,
}

/// Everything printed for one ready device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceReport {
    pub info: DeviceInfo,
    pub details: Option<DeviceDetails>,
}
