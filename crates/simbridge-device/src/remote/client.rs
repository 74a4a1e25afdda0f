use super::address::RemoteAddress;
use super::envelope::{decode_devices, decode_envelope};
use super::shell::shell_join;
use crate::bridge::DeviceBridge;
use crate::config::BridgeConfig;
use crate::device::{Device, DeviceState, Location};
use crate::process::{CommandRunner, SystemRunner};
use crate::{BridgeError, Result};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Bridge that forwards every call to simbridge on another host over ssh.
pub struct RemoteBridge {
    address: RemoteAddress,
    ssh: String,
    ssh_options: Vec<String>,
    remote_program: String,
    runner: Arc<dyn CommandRunner>,
}

impl RemoteBridge {
    pub fn new(address: RemoteAddress, config: &BridgeConfig) -> Self {
        Self::with_runner(address, config, Arc::new(SystemRunner))
    }

    pub fn with_runner(
        address: RemoteAddress,
        config: &BridgeConfig,
        runner: Arc<dyn CommandRunner>,
    ) -> Self {
        Self {
            address,
            ssh: config.ssh.clone(),
            ssh_options: config.ssh_options.clone(),
            remote_program: config.remote_program.clone(),
            runner,
        }
    }

    pub fn address(&self) -> &RemoteAddress {
        &self.address
    }

    /// Shell-quoted command line executed on the remote host.
    pub fn remote_command(&self, args: &[&str]) -> String {
        let mut argv = Vec::with_capacity(args.len() + 1);
        argv.push(self.remote_program.as_str());
        argv.extend_from_slice(args);
        shell_join(&argv)
    }

    /// Full argument vector handed to the ssh client.
    pub fn ssh_args(&self, args: &[&str]) -> Vec<String> {
        let mut ssh_args = self.ssh_options.clone();
        ssh_args.push("-p".to_string());
        ssh_args.push(self.address.port.to_string());
        ssh_args.push(self.address.host.clone());
        ssh_args.push(self.remote_command(args));
        ssh_args
    }

    /// Run one remote subcommand and return its raw stdout.
    fn invoke(&self, args: &[&str]) -> Result<Vec<u8>> {
        let ssh_args = self.ssh_args(args);
        debug!(address = %self.address, command = ?args, "Invoking remote command");

        let output = self.runner.run(&self.ssh, &ssh_args).map_err(|e| {
            BridgeError::TransportError(format!("Failed to run {}: {}", self.ssh, e))
        })?;

        if !output.success {
            // The peer exits non-zero alongside a failure envelope; surface that
            // instead of the bare exit status.
            if let Err(err @ BridgeError::RemoteError { .. }) = decode_envelope(&output.stdout) {
                return Err(err);
            }
            let message = output.failure_message();
            warn!(address = %self.address, %message, "Remote transport failed");
            return Err(BridgeError::TransportError(format!(
                "{}: {}",
                self.address, message
            )));
        }

        Ok(output.stdout)
    }

    fn invoke_for_result(&self, args: &[&str]) -> Result<Value> {
        let stdout = self.invoke(args)?;
        decode_envelope(&stdout)
    }
}

impl DeviceBridge for RemoteBridge {
    fn list_devices(&self) -> Result<Vec<Device>> {
        let stdout = self.invoke(&["devices"])?;
        let mut devices = decode_devices(&stdout)?;
        for device in &mut devices {
            device.location = Some(Location::Remote);
            device.remote_host = Some(self.address.host.clone());
        }
        debug!(address = %self.address, count = devices.len(), "Listed remote devices");
        Ok(devices)
    }

    fn boot_simulator(&self, udid: &str) -> Result<()> {
        self.invoke_for_result(&["simulator", "boot", "--device", udid])?;
        info!(address = %self.address, udid, "Booted remote simulator");
        Ok(())
    }

    fn shutdown_simulator(&self, udid: &str) -> Result<()> {
        self.invoke_for_result(&["simulator", "shutdown", "--device", udid])?;
        info!(address = %self.address, udid, "Shut down remote simulator");
        Ok(())
    }

    /// The peer has no state query; re-list and scan by UDID.
    fn get_device_state(&self, udid: &str) -> Result<DeviceState> {
        self.list_devices()?
            .into_iter()
            .find(|d| d.udid == udid)
            .map(|d| d.state)
            .ok_or_else(|| BridgeError::NotFound(udid.to_string()))
    }
}
