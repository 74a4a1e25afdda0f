use crate::device::Machine;
use crate::{BridgeError, Result};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_SSH_PORT: u16 = 22;

/// Validated `host[:port]` target of the remote-execution channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteAddress {
    pub host: String,
    pub port: u16,
}

impl RemoteAddress {
    /// Split on the first colon; a missing port means 22.
    pub fn parse(address: &str) -> Result<Self> {
        let (host, port) = match address.split_once(':') {
            Some((host, port)) => {
                let port = port.parse::<u16>().map_err(|_| {
                    BridgeError::ConstructionError(format!(
                        "invalid port '{}' in '{}'",
                        port, address
                    ))
                })?;
                (host, port)
            }
            None => (address, DEFAULT_SSH_PORT),
        };

        if host.is_empty() {
            return Err(BridgeError::ConstructionError(format!(
                "empty host in '{}'",
                address
            )));
        }

        Ok(Self {
            host: host.to_string(),
            port,
        })
    }

    pub fn from_machine(machine: &Machine) -> Result<Self> {
        if !machine.online {
            return Err(BridgeError::ConstructionError(format!(
                "machine '{}' is offline",
                machine.name
            )));
        }
        Self::parse(&machine.ip)
    }
}

impl FromStr for RemoteAddress {
    type Err = BridgeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for RemoteAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}
