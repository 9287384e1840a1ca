use thiserror::Error;

#[derive(Error, Debug)]
pub enum DiscoveryError {
    #[error("interface '{0}' not found")]
    NotFound(String),

    #[error("interface '{0}' has no hardware address")]
    NoHardwareAddress(String),

    #[error("platform reported {found} interfaces, maximum supported is {max}")]
    TooManyInterfaces { found: usize, max: usize },
}

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("insufficient permissions to open a raw link-layer channel (try running as root)")]
    InsufficientPermissions,

    #[error("failed to open channel: {0}")]
    Open(String),

    #[error("unsupported channel type")]
    UnsupportedChannel,

    #[error("failed to send frame: {0}")]
    Send(String),

    #[error("receive failed: {0}")]
    Recv(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("payload of {len} bytes exceeds frame capacity of {capacity}")]
    PayloadTooLarge { len: usize, capacity: usize },

    #[error("malformed frame: {len} bytes, minimum is {min}")]
    Malformed { len: usize, min: usize },
}
