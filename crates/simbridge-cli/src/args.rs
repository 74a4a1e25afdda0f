use crate::CliError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Devices,
    Simulator { action: SimulatorAction, target: Target },
    Help,
    Version,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulatorAction {
    Boot,
    Shutdown,
    State,
}

/// How the user named the device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// ID or UDID.
    Device(String),
    Name(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub remote: Option<String>,
    pub command: Command,
}

pub fn parse(args: &[String]) -> Result<Invocation, CliError> {
    let mut remote = None;
    let mut rest = args;

    // global flags come before the command
    loop {
        match rest.first().map(String::as_str) {
            Some("--remote") => {
                let value = rest
                    .get(1)
                    .ok_or_else(|| CliError::Usage("--remote requires HOST[:PORT]".to_string()))?;
                remote = Some(value.clone());
                rest = &rest[2..];
            }
            Some(flag) if flag.starts_with("--remote=") => {
                remote = Some(flag["--remote=".len()..].to_string());
                rest = &rest[1..];
            }
            _ => break,
        }
    }

    let command = match rest.first().map(String::as_str) {
        None => return Err(CliError::Usage("No command provided".to_string())),
        Some("devices") => {
            expect_no_more(&rest[1..])?;
            Command::Devices
        }
        Some("simulator") => parse_simulator(&rest[1..])?,
        Some("help") | Some("-h") | Some("--help") => Command::Help,
        Some("-v") | Some("--version") => Command::Version,
        Some(other) => return Err(CliError::Usage(format!("Unknown command: {}", other))),
    };

    Ok(Invocation { remote, command })
}

fn parse_simulator(args: &[String]) -> Result<Command, CliError> {
    let action = match args.first().map(String::as_str) {
        Some("boot") => SimulatorAction::Boot,
        Some("shutdown") => SimulatorAction::Shutdown,
        Some("state") => SimulatorAction::State,
        Some(other) => {
            return Err(CliError::Usage(format!(
                "Unknown simulator action: {}",
                other
            )));
        }
        None => {
            return Err(CliError::Usage(
                "simulator requires an action: boot, shutdown or state".to_string(),
            ));
        }
    };

    let mut target = None;
    let mut flags = &args[1..];
    while let Some(flag) = flags.first() {
        let make: fn(String) -> Target = match flag.as_str() {
            "--device" => Target::Device,
            "--name" => Target::Name,
            other => return Err(CliError::Usage(format!("Unknown option: {}", other))),
        };
        let value = flags
            .get(1)
            .ok_or_else(|| CliError::Usage(format!("{} requires a value", flag)))?;
        if target.replace(make(value.clone())).is_some() {
            return Err(CliError::Usage(
                "Specify exactly one of --device or --name".to_string(),
            ));
        }
        flags = &flags[2..];
    }

    let target = target
        .ok_or_else(|| CliError::Usage("Specify exactly one of --device or --name".to_string()))?;
    Ok(Command::Simulator { action, target })
}

fn expect_no_more(args: &[String]) -> Result<(), CliError> {
    match args.first() {
        Some(extra) => Err(CliError::Usage(format!("Unexpected argument: {}", extra))),
        None => Ok(()),
    }
}
