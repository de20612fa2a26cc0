use crate::{AdbError, Result};
use std::ffi::OsString;
use std::path::Path;
use std::process::Command;

/// Captured result of one tool invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// Turn a non-zero exit into `AdbError::CommandFailed`.
    pub fn check(self, args: &[&str]) -> Result<CommandOutput> {
        if self.success {
            Ok(self)
        } else {
            Err(AdbError::CommandFailed {
                command: args.join(" "),
                stderr: self.stderr.trim().to_string(),
            })
        }
    }
}

/// Something that can run the device bridge tool with a list of arguments.
pub trait Transport {
    /// Run one invocation and wait for it to exit.
    ///
    /// A non-zero exit status is not an error here; callers decide via
    /// `CommandOutput::success`. Only a failure to launch the tool is.
    fn run(&self, args: &[&str]) -> Result<CommandOutput>;
}

/// Transport that spawns the real `adb` executable.
pub struct AdbTransport {
    program: OsString,
}

impl AdbTransport {
    pub fn new(program: impl AsRef<Path>) -> Self {
        Self {
            program: program.as_ref().as_os_str().to_owned(),
        }
    }

    pub fn program(&self) -> &Path {
        Path::new(&self.program)
    }
}

impl Transport for AdbTransport {
    fn run(&self, args: &[&str]) -> Result<CommandOutput> {
        log::debug!("running {} {}", self.program().display(), args.join(" "));

        let output = Command::new(&self.program).args(args).output().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AdbError::ToolNotFound(self.program().display().to_string())
            } else {
                AdbError::Io(e)
            }
        })?;

        Ok(CommandOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
