//! Network interface identity.

use std::fmt;

use macaddr::MacAddr6;

/// A network interface eligible for loop probing.
///
/// Immutable once discovered; each run hands an interface to exactly
/// one detector, which uses its hardware address as the probe's source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interface {
    /// Platform interface index
    pub index: u32,
    /// Interface name (e.g. `eth0`)
    pub name: String,
    /// Hardware address, used as the probe frame's source address
    pub mac: MacAddr6,
}

impl fmt::Display for Interface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.mac)
    }
}
