use crate::bridge::DeviceBridge;
use crate::config::BridgeConfig;
use crate::device::{Device, DeviceState, DeviceType, Location, os_version_from_runtime};
use crate::process::{CommandRunner, SystemRunner};
use crate::{BridgeError, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

#[derive(Debug, Deserialize)]
struct SimctlListing {
    #[serde(default)]
    devices: BTreeMap<String, Vec<SimctlDevice>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SimctlDevice {
    udid: String,
    name: String,
    state: String,
    #[serde(default)]
    is_available: bool,
}

/// Local bridge driving `xcrun simctl` once per call.
pub struct SimctlBridge {
    xcrun: String,
    runner: Arc<dyn CommandRunner>,
}

impl SimctlBridge {
    pub fn new(config: &BridgeConfig) -> Self {
        Self::with_runner(config, Arc::new(SystemRunner))
    }

    pub fn with_runner(config: &BridgeConfig, runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            xcrun: config.xcrun.clone(),
            runner,
        }
    }

    fn simctl(&self, args: &[&str]) -> Result<Vec<u8>> {
        let mut full_args = vec!["simctl".to_string()];
        full_args.extend(args.iter().map(|a| a.to_string()));
        let command = full_args.join(" ");

        let output = self.runner.run(&self.xcrun, &full_args).map_err(|e| {
            BridgeError::BackendUnavailable(format!("Failed to run {}: {}", self.xcrun, e))
        })?;

        if !output.success {
            let message = output.failure_message();
            warn!(command = %command, %message, "simctl command failed");
            return Err(BridgeError::BackendCommandFailed { command, message });
        }

        Ok(output.stdout)
    }
}

/// Normalise `simctl list devices --json` output, dropping unavailable entries.
pub fn parse_simctl_devices(raw: &[u8]) -> Result<Vec<Device>> {
    let listing: SimctlListing =
        serde_json::from_slice(raw).map_err(|e| BridgeError::BackendCommandFailed {
            command: "simctl list devices --json".to_string(),
            message: format!("Failed to parse device list: {}", e),
        })?;

    let mut devices = Vec::new();
    for (runtime, entries) in listing.devices {
        let os_version = os_version_from_runtime(&runtime);
        for entry in entries.into_iter().filter(|d| d.is_available) {
            devices.push(Device {
                id: entry.udid.clone(),
                name: entry.name,
                state: DeviceState::from(entry.state),
                device_type: DeviceType::Simulator,
                os_version: os_version.clone(),
                udid: entry.udid,
                available: true,
                location: Some(Location::Local),
                remote_host: None,
            });
        }
    }

    Ok(devices)
}

impl DeviceBridge for SimctlBridge {
    fn list_devices(&self) -> Result<Vec<Device>> {
        let stdout = self.simctl(&["list", "devices", "--json"])?;
        let devices = parse_simctl_devices(&stdout)?;
        debug!(count = devices.len(), "Listed local simulators");
        Ok(devices)
    }

    fn boot_simulator(&self, udid: &str) -> Result<()> {
        self.simctl(&["boot", udid])?;
        info!(udid, "Booted simulator");
        Ok(())
    }

    fn shutdown_simulator(&self, udid: &str) -> Result<()> {
        self.simctl(&["shutdown", udid])?;
        info!(udid, "Shut down simulator");
        Ok(())
    }

    fn get_device_state(&self, udid: &str) -> Result<DeviceState> {
        self.list_devices()?
            .into_iter()
            .find(|d| d.udid == udid)
            .map(|d| d.state)
            .ok_or_else(|| BridgeError::NotFound(udid.to_string()))
    }
}
