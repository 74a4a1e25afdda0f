use thiserror::Error;

#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("Device not found: {0}")]
    NotFound(String),

    #[error("Device {0} is already booted")]
    AlreadyBooted(String),

    #[error("Device {0} is already shut down")]
    AlreadyShutdown(String),

    #[error("Backend unavailable: {0}")]
    BackendUnavailable(String),

    #[error("Backend command '{command}' failed: {message}")]
    BackendCommandFailed { command: String, message: String },

    #[error("Remote error {code}: {message}")]
    RemoteError { code: String, message: String },

    #[error("Protocol error: {0}")]
    ProtocolError(String),

    #[error("Transport error: {0}")]
    TransportError(String),

    #[error("Invalid remote address: {0}")]
    ConstructionError(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl BridgeError {
    /// Stable error code carried in `{success:false, error:{code, message}}` responses.
    ///
    /// A relayed `RemoteError` keeps the code the peer reported.
    pub fn code(&self) -> &str {
        match self {
            BridgeError::NotFound(_) => "DEVICE_NOT_FOUND",
            BridgeError::AlreadyBooted(_) => "ALREADY_BOOTED",
            BridgeError::AlreadyShutdown(_) => "ALREADY_SHUTDOWN",
            BridgeError::BackendUnavailable(_) => "BACKEND_UNAVAILABLE",
            BridgeError::BackendCommandFailed { .. } => "BACKEND_COMMAND_FAILED",
            BridgeError::RemoteError { code, .. } => code.as_str(),
            BridgeError::ProtocolError(_) => "PROTOCOL_ERROR",
            BridgeError::TransportError(_) => "TRANSPORT_ERROR",
            BridgeError::ConstructionError(_) => "INVALID_ADDRESS",
            BridgeError::Config(_) => "CONFIG_ERROR",
        }
    }

    /// Process exit code for the CLI, one per taxonomy member.
    pub fn exit_code(&self) -> i32 {
        match self {
            BridgeError::NotFound(_) => 3,
            BridgeError::AlreadyBooted(_) => 4,
            BridgeError::AlreadyShutdown(_) => 5,
            BridgeError::BackendUnavailable(_) => 6,
            BridgeError::BackendCommandFailed { .. } => 7,
            BridgeError::RemoteError { .. } => 8,
            BridgeError::ProtocolError(_) => 9,
            BridgeError::TransportError(_) => 10,
            BridgeError::ConstructionError(_) => 11,
            BridgeError::Config(_) => 12,
        }
    }
}

pub type Result<T> = std::result::Result<T, BridgeError>;
