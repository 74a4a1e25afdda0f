use crate::CliError;
use serde_json::Value;
use simbridge_device::Envelope;
use std::io::Write;
use tracing::warn;

pub fn write_success<W: Write>(out: &mut W, result: Value) -> i32 {
    write_envelope(out, &Envelope::ok(result));
    0
}

/// Emit a failure envelope and return the matching exit code.
pub fn write_failure<W: Write>(out: &mut W, err: &CliError) -> i32 {
    let envelope: Envelope = match err {
        CliError::Bridge(bridge) => Envelope::from_error(bridge),
        CliError::Usage(message) => Envelope::failure(err.code(), message.clone()),
    };
    write_envelope(out, &envelope);
    err.exit_code()
}

fn write_envelope<W: Write>(out: &mut W, envelope: &Envelope) {
    match serde_json::to_string(envelope) {
        Ok(line) => {
            let _ = writeln!(out, "{}", line);
        }
        Err(e) => warn!("Failed to serialise response: {}", e),
    }
}

pub fn write_usage<W: Write>(out: &mut W) {
    let _ = writeln!(
        out,
        "simbridge - enumerate, boot and control iOS simulators locally or on remote hosts

USAGE:
    simbridge [--remote HOST[:PORT]] <COMMAND>

COMMANDS:
    devices                                   List available devices
    simulator boot (--device ID | --name N)   Boot a simulator
    simulator shutdown (--device ID | --name N)
                                              Shut down a simulator
    simulator state (--device ID | --name N)  Print the current device state
    help                                      Print this help message

OPTIONS:
    --remote HOST[:PORT]   Run the command on a remote host over ssh (port defaults to 22)
    -h, --help             Print help information
    -v, --version          Print version information

ENVIRONMENT:
    SIMBRIDGE_XCRUN, SIMBRIDGE_SSH, SIMBRIDGE_SSH_OPTIONS, SIMBRIDGE_REMOTE_PROGRAM, RUST_LOG"
    );
}
