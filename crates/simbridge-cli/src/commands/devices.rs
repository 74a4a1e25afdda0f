use crate::CliError;
use serde_json::{Value, json};
use simbridge_device::{DeviceBridge, Manager};

pub fn execute<B: DeviceBridge>(manager: &Manager<B>) -> Result<Value, CliError> {
    let devices = manager.list_devices()?;
    let count = devices.len();
    Ok(json!({
        "devices": devices,
        "count": count
    }))
}
