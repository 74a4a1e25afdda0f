pub mod devices;
pub mod simulator;

use crate::CliError;
use crate::args::Command;
use serde_json::Value;
use simbridge_device::{DeviceBridge, Manager};

/// Run a device command and produce the envelope `result` payload.
pub fn execute<B: DeviceBridge>(manager: &Manager<B>, command: &Command) -> Result<Value, CliError> {
    match command {
        Command::Devices => devices::execute(manager),
        Command::Simulator { action, target } => simulator::execute(manager, *action, target),
        Command::Help | Command::Version => Err(CliError::Usage(
            "help and version are not device commands".to_string(),
        )),
    }
}
