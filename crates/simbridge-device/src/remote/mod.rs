//! Client side of the peer protocol: a remote simbridge answers the same
//! subcommands this crate issues and replies with a JSON envelope.

pub mod address;
pub mod client;
pub mod envelope;
pub mod shell;

pub use address::{DEFAULT_SSH_PORT, RemoteAddress};
pub use client::RemoteBridge;
pub use envelope::{DevicesPayload, Envelope, ErrorBody, decode_devices, decode_envelope};
pub use shell::{shell_join, shell_quote};
