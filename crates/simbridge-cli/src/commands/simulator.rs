use crate::CliError;
use crate::args::{SimulatorAction, Target};
use serde_json::{Value, json};
use simbridge_device::{DeviceBridge, Manager};

pub fn execute<B: DeviceBridge>(
    manager: &Manager<B>,
    action: SimulatorAction,
    target: &Target,
) -> Result<Value, CliError> {
    let identifier = match target {
        Target::Device(id) => id.clone(),
        Target::Name(name) => manager.find_device_by_name(name)?.id,
    };

    match action {
        SimulatorAction::Boot => {
            manager.boot_simulator(&identifier)?;
            Ok(json!({
                "device": identifier,
                "message": format!("Device {} booted successfully", identifier)
            }))
        }
        SimulatorAction::Shutdown => {
            manager.shutdown_simulator(&identifier)?;
            Ok(json!({
                "device": identifier,
                "message": format!("Device {} shutdown successfully", identifier)
            }))
        }
        SimulatorAction::State => {
            let state = manager.get_device_state(&identifier)?;
            Ok(json!({
                "device": identifier,
                "state": state
            }))
        }
    }
}
