use crate::{BridgeError, Result};

pub const ENV_XCRUN: &str = "SIMBRIDGE_XCRUN";
pub const ENV_SSH: &str = "SIMBRIDGE_SSH";
pub const ENV_SSH_OPTIONS: &str = "SIMBRIDGE_SSH_OPTIONS";
pub const ENV_REMOTE_PROGRAM: &str = "SIMBRIDGE_REMOTE_PROGRAM";

/// External tools the bridges shell out to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeConfig {
    /// Simulator-control driver, invoked as `<xcrun> simctl ...`.
    pub xcrun: String,
    /// Remote-execution client.
    pub ssh: String,
    /// Extra client options placed before the port and host.
    pub ssh_options: Vec<String>,
    /// Name of this tool on the remote host.
    pub remote_program: String,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            xcrun: "xcrun".to_string(),
            ssh: "ssh".to_string(),
            ssh_options: vec!["-o".to_string(), "BatchMode=yes".to_string()],
            remote_program: "simbridge".to_string(),
        }
    }
}

impl BridgeConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup, falling back to defaults
    /// for unset keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(xcrun) = lookup(ENV_XCRUN) {
            config.xcrun = non_empty(ENV_XCRUN, xcrun)?;
        }
        if let Some(ssh) = lookup(ENV_SSH) {
            config.ssh = non_empty(ENV_SSH, ssh)?;
        }
        if let Some(options) = lookup(ENV_SSH_OPTIONS) {
            config.ssh_options = options.split_whitespace().map(str::to_string).collect();
        }
        if let Some(program) = lookup(ENV_REMOTE_PROGRAM) {
            config.remote_program = non_empty(ENV_REMOTE_PROGRAM, program)?;
        }

        Ok(config)
    }
}

fn non_empty(key: &str, value: String) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(BridgeError::Config(format!("{} must not be empty", key)));
    }
    Ok(trimmed.to_string())
}
