use std::io;
use std::process::{Command, Output};
use tracing::debug;

/// Captured result of one external process invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub success: bool,
    pub code: Option<i32>,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl CommandOutput {
    pub fn stdout_text(&self) -> String {
        String::from_utf8_lossy(&self.stdout).trim().to_string()
    }

    pub fn stderr_text(&self) -> String {
        String::from_utf8_lossy(&self.stderr).trim().to_string()
    }

    /// Error stream if it says anything, otherwise a description of the exit status.
    pub fn failure_message(&self) -> String {
        let stderr = self.stderr_text();
        if !stderr.is_empty() {
            return stderr;
        }
        match self.code {
            Some(code) => format!("exited with status {}", code),
            None => "terminated by signal".to_string(),
        }
    }
}

impl From<Output> for CommandOutput {
    fn from(output: Output) -> Self {
        Self {
            success: output.status.success(),
            code: output.status.code(),
            stdout: output.stdout,
            stderr: output.stderr,
        }
    }
}

/// Seam between the bridges and the operating system.
pub trait CommandRunner: Send + Sync {
    /// Run `program` with `args` to completion.
    ///
    /// `Err` means the process could not be started at all; a started process
    /// that exits non-zero is reported through `CommandOutput::success`.
    fn run(&self, program: &str, args: &[String]) -> io::Result<CommandOutput>;
}

/// Blocking `std::process::Command` runner. No timeout is applied.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[String]) -> io::Result<CommandOutput> {
        debug!(program, ?args, "Running external command");
        let output = Command::new(program).args(args).output()?;
        let output = CommandOutput::from(output);
        debug!(program, code = ?output.code, "External command finished");
        Ok(output)
    }
}
