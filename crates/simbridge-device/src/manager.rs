use crate::bridge::DeviceBridge;
use crate::config::BridgeConfig;
use crate::device::{Device, DeviceState, Machine};
use crate::remote::{RemoteAddress, RemoteBridge};
use crate::simctl::SimctlBridge;
use crate::{BridgeError, Result};
use tracing::warn;

/// Name- and ID-aware control surface over a [`DeviceBridge`].
///
/// Every lookup and guard re-lists devices from the bridge immediately before
/// acting; nothing is cached between calls.
pub struct Manager<B> {
    bridge: B,
}

pub type LocalManager = Manager<SimctlBridge>;
pub type RemoteManager = Manager<RemoteBridge>;
pub type DynManager = Manager<Box<dyn DeviceBridge>>;

impl<B: DeviceBridge> Manager<B> {
    pub fn new(bridge: B) -> Self {
        Self { bridge }
    }

    pub fn bridge(&self) -> &B {
        &self.bridge
    }

    pub fn list_devices(&self) -> Result<Vec<Device>> {
        self.bridge.list_devices()
    }

    /// First device whose ID or UDID equals `identifier`.
    pub fn get_device(&self, identifier: &str) -> Result<Device> {
        self.bridge
            .list_devices()?
            .into_iter()
            .find(|d| d.matches_identifier(identifier))
            .ok_or_else(|| BridgeError::NotFound(identifier.to_string()))
    }

    /// First device whose name equals `name` exactly (case-sensitive).
    pub fn find_device_by_name(&self, name: &str) -> Result<Device> {
        self.bridge
            .list_devices()?
            .into_iter()
            .find(|d| d.name == name)
            .ok_or_else(|| BridgeError::NotFound(name.to_string()))
    }

    pub fn boot_simulator(&self, identifier: &str) -> Result<()> {
        let device = self.get_device(identifier)?;
        if device.state == DeviceState::Booted {
            warn!(udid = %device.udid, "Refusing to boot an already booted device");
            return Err(BridgeError::AlreadyBooted(device.udid));
        }
        self.bridge.boot_simulator(&device.udid)
    }

    pub fn shutdown_simulator(&self, identifier: &str) -> Result<()> {
        let device = self.get_device(identifier)?;
        if device.state == DeviceState::Shutdown {
            warn!(udid = %device.udid, "Refusing to shut down an already shut down device");
            return Err(BridgeError::AlreadyShutdown(device.udid));
        }
        self.bridge.shutdown_simulator(&device.udid)
    }

    /// Resolves the device, then asks the bridge again for the freshest state.
    pub fn get_device_state(&self, identifier: &str) -> Result<DeviceState> {
        let device = self.get_device(identifier)?;
        self.bridge.get_device_state(&device.udid)
    }
}

impl LocalManager {
    pub fn local(config: &BridgeConfig) -> Self {
        Self::new(SimctlBridge::new(config))
    }
}

impl RemoteManager {
    /// Fails with `ConstructionError` on an invalid `host[:port]`.
    pub fn remote(address: &str, config: &BridgeConfig) -> Result<Self> {
        let address = RemoteAddress::parse(address)?;
        Ok(Self::new(RemoteBridge::new(address, config)))
    }

    pub fn for_machine(machine: &Machine, config: &BridgeConfig) -> Result<Self> {
        let address = RemoteAddress::from_machine(machine)?;
        Ok(Self::new(RemoteBridge::new(address, config)))
    }
}

impl DynManager {
    /// Remote manager when an address is given, local otherwise.
    pub fn for_target(remote: Option<&str>, config: &BridgeConfig) -> Result<Self> {
        let bridge: Box<dyn DeviceBridge> = match remote {
            Some(address) => Box::new(RemoteBridge::new(RemoteAddress::parse(address)?, config)),
            None => Box::new(SimctlBridge::new(config)),
        };
        Ok(Self::new(bridge))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::{DeviceType, Location};
    use std::sync::Mutex;

    #[derive(Default)]
    struct CountingBridge {
        devices: Vec<Device>,
        calls: Mutex<Vec<String>>,
    }

    impl CountingBridge {
        fn with(devices: Vec<Device>) -> Self {
            Self {
                devices,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl DeviceBridge for CountingBridge {
        fn list_devices(&self) -> Result<Vec<Device>> {
            self.calls.lock().unwrap().push("list".to_string());
            Ok(self.devices.clone())
        }

        fn boot_simulator(&self, udid: &str) -> Result<()> {
            self.calls.lock().unwrap().push(format!("boot {}", udid));
            Ok(())
        }

        fn shutdown_simulator(&self, udid: &str) -> Result<()> {
            self.calls.lock().unwrap().push(format!("shutdown {}", udid));
            Ok(())
        }

        fn get_device_state(&self, udid: &str) -> Result<DeviceState> {
            self.calls.lock().unwrap().push(format!("state {}", udid));
            Ok(DeviceState::Booting)
        }
    }

    fn device(id: &str, udid: &str, name: &str, state: DeviceState) -> Device {
        Device {
            id: id.to_string(),
            name: name.to_string(),
            state,
            device_type: DeviceType::Simulator,
            os_version: "17.4".to_string(),
            udid: udid.to_string(),
            available: true,
            location: Some(Location::Local),
            remote_host: None,
        }
    }

    #[test]
    fn test_boot_translates_id_to_udid() {
        let manager = Manager::new(CountingBridge::with(vec![device(
            "friendly",
            "UDID-1",
            "iPhone 15",
            DeviceState::Shutdown,
        )]));

        manager.boot_simulator("friendly").unwrap();
        assert_eq!(manager.bridge().calls(), vec!["list", "boot UDID-1"]);
    }

    #[test]
    fn test_state_requery_uses_bridge() {
        let manager = Manager::new(CountingBridge::with(vec![device(
            "UDID-1",
            "UDID-1",
            "iPhone 15",
            DeviceState::Shutdown,
        )]));

        // freshest value comes from the second round-trip, not the listing
        assert_eq!(manager.get_device_state("UDID-1").unwrap(), DeviceState::Booting);
        assert_eq!(manager.bridge().calls(), vec!["list", "state UDID-1"]);
    }

    #[test]
    fn test_unknown_state_is_not_guarded() {
        let manager = Manager::new(CountingBridge::with(vec![device(
            "UDID-1",
            "UDID-1",
            "iPhone 15",
            DeviceState::Other("Suspended".to_string()),
        )]));

        manager.boot_simulator("UDID-1").unwrap();
        manager.shutdown_simulator("UDID-1").unwrap();
        assert_eq!(
            manager.bridge().calls(),
            vec!["list", "boot UDID-1", "list", "shutdown UDID-1"]
        );
    }

    #[test]
    fn test_remote_construction_validates_address() {
        let config = BridgeConfig::default();
        assert!(matches!(
            RemoteManager::remote("host:invalid", &config),
            Err(BridgeError::ConstructionError(_))
        ));
        let manager = RemoteManager::remote("192.168.1.100:2222", &config).unwrap();
        assert_eq!(manager.bridge().address().port, 2222);
    }

    #[test]
    fn test_for_target_rejects_bad_remote() {
        let config = BridgeConfig::default();
        assert!(DynManager::for_target(Some(""), &config).is_err());
        assert!(DynManager::for_target(None, &config).is_ok());
    }
}
