use crate::device::Device;
use crate::{BridgeError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Code used when a failed envelope carries no error body.
pub const GENERIC_REMOTE_CODE: &str = "REMOTE_ERROR";

/// `{success, result, error}` response shared by local output and the peer protocol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T = Value> {
    pub success: bool,
    #[serde(default)]
    pub result: Option<T>,
    #[serde(default)]
    pub error: Option<ErrorBody>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl<T> Envelope<T> {
    pub fn ok(result: T) -> Self {
        Self {
            success: true,
            result: Some(result),
            error: None,
        }
    }

    pub fn failure(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            result: None,
            error: Some(ErrorBody {
                code: code.into(),
                message: message.into(),
            }),
        }
    }

    pub fn from_error(err: &BridgeError) -> Self {
        match err {
            // relay the peer's message without our own prefix
            BridgeError::RemoteError { code, message } => Self::failure(code.clone(), message.clone()),
            other => Self::failure(other.code(), other.to_string()),
        }
    }
}

/// Payload of the `devices` command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DevicesPayload {
    pub devices: Vec<Device>,
}

/// Decode raw peer output into the envelope's `result`.
///
/// A `success:false` envelope becomes `RemoteError`; anything that is not an
/// envelope becomes `ProtocolError`. A successful envelope without a result
/// yields `Value::Null`.
pub fn decode_envelope(raw: &[u8]) -> Result<Value> {
    let envelope: Envelope = serde_json::from_slice(raw).map_err(|e| {
        BridgeError::ProtocolError(format!(
            "invalid response envelope ({}): {}",
            e,
            preview(raw)
        ))
    })?;

    if !envelope.success {
        return Err(match envelope.error {
            Some(ErrorBody { code, message }) => BridgeError::RemoteError { code, message },
            None => BridgeError::RemoteError {
                code: GENERIC_REMOTE_CODE.to_string(),
                message: "remote command failed".to_string(),
            },
        });
    }

    Ok(envelope.result.unwrap_or(Value::Null))
}

/// Decode the `{devices: [...]}` payload of a `devices` response.
pub fn decode_devices(raw: &[u8]) -> Result<Vec<Device>> {
    let result = decode_envelope(raw)?;
    if result.is_null() {
        return Err(BridgeError::ProtocolError(
            "devices response carried no result".to_string(),
        ));
    }
    let payload: DevicesPayload = serde_json::from_value(result)
        .map_err(|e| BridgeError::ProtocolError(format!("invalid devices payload: {}", e)))?;
    Ok(payload.devices)
}

fn preview(raw: &[u8]) -> String {
    const LIMIT: usize = 120;
    let text = String::from_utf8_lossy(raw);
    let text = text.trim();
    if text.chars().count() > LIMIT {
        let cut: String = text.chars().take(LIMIT).collect();
        format!("{}...", cut)
    } else {
        text.to_string()
    }
}
