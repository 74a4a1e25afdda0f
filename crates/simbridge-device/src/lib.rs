pub mod bridge;
pub mod config;
pub mod device;
pub mod error;
pub mod manager;
pub mod process;
pub mod remote;
pub mod simctl;

pub use bridge::DeviceBridge;
pub use config::BridgeConfig;
pub use device::{Device, DeviceState, DeviceType, Location, Machine, os_version_from_runtime};
pub use error::{BridgeError, Result};
pub use manager::{DynManager, LocalManager, Manager, RemoteManager};
pub use process::{CommandOutput, CommandRunner, SystemRunner};
pub use remote::{Envelope, RemoteAddress, RemoteBridge};
pub use simctl::SimctlBridge;
