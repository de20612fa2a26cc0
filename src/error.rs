/// Errors that can occur while talking to the device bridge.
#[derive(Debug, thiserror::Error)]
pub enum AdbError {
    #[error("device bridge tool not found: {0}")]
    ToolNotFound(String),

    #[error("device bridge tool is not usable: {0}")]
    ToolUnavailable(String),

    #[error("`adb {command}` failed: {stderr}")]
    CommandFailed { command: String, stderr: String },

    #[error("failed to connect to {target}: {reason}")]
    Connect { target: String, reason: String },

    #[error("no connected devices")]
    NoDevices,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
