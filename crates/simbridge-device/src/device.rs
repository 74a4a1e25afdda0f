use serde::{Deserialize, Serialize};
use std::fmt;

/// Version reported when a runtime identifier carries no iOS version.
pub const UNKNOWN_OS_VERSION: &str = "unknown";

const IOS_RUNTIME_PREFIX: &str = "iOS-";

/// One controllable endpoint, built fresh from every backend listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    pub id: String,
    pub name: String,
    pub state: DeviceState,
    #[serde(rename = "type")]
    pub device_type: DeviceType,
    pub os_version: String,
    pub udid: String,
    pub available: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote_host: Option<String>,
}

impl Device {
    /// `ID` and `UDID` are interchangeable lookup keys.
    pub fn matches_identifier(&self, identifier: &str) -> bool {
        self.id == identifier || self.udid == identifier
    }
}

/// Backend-reported lifecycle state, mirrored verbatim.
///
/// Strings outside the five known states are kept in `Other` instead of being
/// rejected at parse time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DeviceState {
    Creating,
    Booting,
    Booted,
    ShuttingDown,
    Shutdown,
    Other(String),
}

impl DeviceState {
    pub fn as_str(&self) -> &str {
        match self {
            DeviceState::Creating => "Creating",
            DeviceState::Booting => "Booting",
            DeviceState::Booted => "Booted",
            DeviceState::ShuttingDown => "Shutting Down",
            DeviceState::Shutdown => "Shutdown",
            DeviceState::Other(raw) => raw,
        }
    }
}

impl From<&str> for DeviceState {
    fn from(raw: &str) -> Self {
        match raw {
            "Creating" => DeviceState::Creating,
            "Booting" => DeviceState::Booting,
            "Booted" => DeviceState::Booted,
            // simctl prints the spaced form, older peers the compact one
            "Shutting Down" | "ShuttingDown" => DeviceState::ShuttingDown,
            "Shutdown" => DeviceState::Shutdown,
            other => DeviceState::Other(other.to_string()),
        }
    }
}

impl From<String> for DeviceState {
    fn from(raw: String) -> Self {
        DeviceState::from(raw.as_str())
    }
}

impl From<DeviceState> for String {
    fn from(state: DeviceState) -> Self {
        match state {
            DeviceState::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for DeviceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DeviceType {
    Simulator,
    Physical,
    Other(String),
}

impl From<String> for DeviceType {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "simulator" => DeviceType::Simulator,
            "physical" => DeviceType::Physical,
            _ => DeviceType::Other(raw),
        }
    }
}

impl From<DeviceType> for String {
    fn from(device_type: DeviceType) -> Self {
        match device_type {
            DeviceType::Simulator => "simulator".to_string(),
            DeviceType::Physical => "physical".to_string(),
            DeviceType::Other(raw) => raw,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    Local,
    Remote,
}

/// A discovered peer that may run its own simbridge.
///
/// Produced by a one-shot discovery query and never mutated here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Machine {
    pub name: String,
    pub ip: String,
    pub online: bool,
}

/// Extract the iOS version from a CoreSimulator runtime identifier.
///
/// `com.apple.CoreSimulator.SimRuntime.iOS-17-4` yields `17.4`; runtimes for
/// other platforms and malformed identifiers yield `unknown`.
pub fn os_version_from_runtime(runtime: &str) -> String {
    runtime
        .split('.')
        .find_map(|segment| segment.strip_prefix(IOS_RUNTIME_PREFIX))
        .filter(|version| !version.is_empty())
        .map(|version| version.replace('-', "."))
        .unwrap_or_else(|| UNKNOWN_OS_VERSION.to_string())
}
