pub mod args;
pub mod commands;
pub mod output;

use simbridge_device::{BridgeConfig, BridgeError, DynManager};
use std::io::{self, Write};
use thiserror::Error;
use tracing::debug;

pub use args::{Command, Invocation, SimulatorAction, Target};

/// Exit code for malformed invocations.
pub const USAGE_EXIT_CODE: i32 = 2;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),

    #[error(transparent)]
    Bridge(#[from] BridgeError),
}

impl CliError {
    pub fn code(&self) -> &str {
        match self {
            CliError::Usage(_) => "USAGE",
            CliError::Bridge(err) => err.code(),
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => USAGE_EXIT_CODE,
            CliError::Bridge(err) => err.exit_code(),
        }
    }
}

/// Run the CLI against stdout, returning the process exit code.
pub fn run(args: &[String]) -> i32 {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let code = run_with(args, &mut out);
    let _ = out.flush();
    code
}

/// Parse, dispatch and write exactly one response to `out`.
pub fn run_with<W: Write>(args: &[String], out: &mut W) -> i32 {
    let invocation = match args::parse(args) {
        Ok(invocation) => invocation,
        Err(err) => return output::write_failure(out, &err),
    };

    match invocation.command {
        Command::Help => {
            output::write_usage(out);
            return 0;
        }
        Command::Version => {
            let _ = writeln!(out, "simbridge {}", env!("CARGO_PKG_VERSION"));
            return 0;
        }
        _ => {}
    }

    let manager = match BridgeConfig::from_env()
        .and_then(|config| DynManager::for_target(invocation.remote.as_deref(), &config))
    {
        Ok(manager) => manager,
        Err(err) => return output::write_failure(out, &CliError::from(err)),
    };
    debug!(remote = ?invocation.remote, command = ?invocation.command, "Dispatching command");

    match commands::execute(&manager, &invocation.command) {
        Ok(result) => output::write_success(out, result),
        Err(err) => output::write_failure(out, &err),
    }
}
