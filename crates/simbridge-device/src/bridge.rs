use crate::Result;
use crate::device::{Device, DeviceState};
use std::sync::Arc;

/// Backend capable of listing and driving simulators.
///
/// Identifiers passed to the state-changing calls are backend-native UDIDs;
/// translating user-facing identifiers is the manager's job.
pub trait DeviceBridge: Send + Sync {
    /// Complete current snapshot. Order carries no meaning.
    fn list_devices(&self) -> Result<Vec<Device>>;

    fn boot_simulator(&self, udid: &str) -> Result<()>;

    fn shutdown_simulator(&self, udid: &str) -> Result<()>;

    fn get_device_state(&self, udid: &str) -> Result<DeviceState>;
}

impl<B: DeviceBridge + ?Sized> DeviceBridge for &B {
    fn list_devices(&self) -> Result<Vec<Device>> {
        (**self).list_devices()
    }

    fn boot_simulator(&self, udid: &str) -> Result<()> {
        (**self).boot_simulator(udid)
    }

    fn shutdown_simulator(&self, udid: &str) -> Result<()> {
        (**self).shutdown_simulator(udid)
    }

    fn get_device_state(&self, udid: &str) -> Result<DeviceState> {
        (**self).get_device_state(udid)
    }
}

impl<B: DeviceBridge + ?Sized> DeviceBridge for Box<B> {
    fn list_devices(&self) -> Result<Vec<Device>> {
        (**self).list_devices()
    }

    fn boot_simulator(&self, udid: &str) -> Result<()> {
        (**self).boot_simulator(udid)
    }

    fn shutdown_simulator(&self, udid: &str) -> Result<()> {
        (**self).shutdown_simulator(udid)
    }

    fn get_device_state(&self, udid: &str) -> Result<DeviceState> {
        (**self).get_device_state(udid)
    }
}

impl<B: DeviceBridge + ?Sized> DeviceBridge for Arc<B> {
    fn list_devices(&self) -> Result<Vec<Device>> {
        (**self).list_devices()
    }

    fn boot_simulator(&self, udid: &str) -> Result<()> {
        (**self).boot_simulator(udid)
    }

    fn shutdown_simulator(&self, udid: &str) -> Result<()> {
        (**self).shutdown_simulator(udid)
    }

    fn get_device_state(&self, udid: &str) -> Result<DeviceState> {
        (**self).get_device_state(udid)
    }
}
