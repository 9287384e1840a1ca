//! Link-layer transport abstraction.
//!
//! This module defines the `LinkTransport` and `TransportOpener` traits
//! (DIP) and provides a pnet-based implementation. This allows detectors
//! to be tested against mock channels and keeps the raw-socket details
//! swappable (OCP).

mod pnet_transport;

pub use pnet_transport::PnetOpener;

use std::time::Instant;

use crate::domain::Interface;
use crate::error::TransportError;

/// A raw link-layer channel bound to a single interface.
///
/// One transport is exclusively owned by one detector for its whole
/// lifetime; dropping it releases the underlying channel on every exit
/// path.
pub trait LinkTransport: Send {
    /// Transmit one raw frame.
    fn send(&mut self, frame: &[u8]) -> Result<(), TransportError>;

    /// Block until the next inbound frame or the deadline, whichever
    /// comes first. Returns `Ok(None)` once the deadline has elapsed;
    /// repeated calls keep consuming the remaining budget without ever
    /// extending it.
    fn recv_deadline(&mut self, deadline: Instant) -> Result<Option<Vec<u8>>, TransportError>;

    /// Name of the interface this channel receives frames on.
    fn interface_name(&self) -> &str;
}

/// Opens link transports bound to a given interface (Dependency
/// Inversion Principle).
///
/// Detectors depend on this abstraction rather than on raw sockets,
/// so tests can supply openers that hand out simulated channels or
/// fail on demand.
pub trait TransportOpener: Send + Sync {
    /// Open a raw channel bound to `iface`.
    ///
    /// Missing privileges surface as
    /// [`TransportError::InsufficientPermissions`], never a panic.
    fn open(&self, iface: &Interface) -> Result<Box<dyn LinkTransport>, TransportError>;
}
