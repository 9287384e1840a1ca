//! Interface discovery.
//!
//! Enumerates candidate interfaces through the pnet datalink layer and
//! resolves their hardware addresses (SRP). The selection logic is kept
//! separate from the platform enumeration so it can be tested against
//! hand-built interface lists.

use macaddr::MacAddr6;
use pnet::datalink::{self, NetworkInterface};

use crate::domain::Interface;
use crate::error::DiscoveryError;

/// Upper bound on interfaces per run. Enumeration beyond this is an
/// error rather than a silent truncation.
pub const MAX_INTERFACES: usize = 64;

/// Which interfaces a run should probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// Every non-loopback interface with a hardware address.
    All,
    /// A single interface by name.
    Name(String),
}

impl Selector {
    /// Parse the CLI selector argument; the literal `any` means all
    /// eligible interfaces.
    pub fn from_arg(arg: &str) -> Self {
        if arg == "any" {
            Selector::All
        } else {
            Selector::Name(arg.to_string())
        }
    }
}

/// Enumerate the interfaces selected for this run, in platform order.
pub fn discover(selector: &Selector) -> Result<Vec<Interface>, DiscoveryError> {
    select(datalink::interfaces(), selector)
}

fn select(
    all: Vec<NetworkInterface>,
    selector: &Selector,
) -> Result<Vec<Interface>, DiscoveryError> {
    match selector {
        Selector::All => {
            let candidates: Vec<Interface> = all
                .iter()
                .filter(|iface| is_candidate(iface))
                .filter_map(to_interface)
                .collect();
            if candidates.len() > MAX_INTERFACES {
                return Err(DiscoveryError::TooManyInterfaces {
                    found: candidates.len(),
                    max: MAX_INTERFACES,
                });
            }
            Ok(candidates)
        }
        Selector::Name(name) => {
            let iface = all
                .iter()
                .find(|iface| &iface.name == name)
                .ok_or_else(|| DiscoveryError::NotFound(name.clone()))?;
            let iface =
                to_interface(iface).ok_or_else(|| DiscoveryError::NoHardwareAddress(name.clone()))?;
            Ok(vec![iface])
        }
    }
}

/// The loopback pseudo-interface never reaches the switching fabric, and
/// an interface without a hardware address cannot source a probe.
fn is_candidate(iface: &NetworkInterface) -> bool {
    !iface.is_loopback() && iface.mac.is_some()
}

fn to_interface(iface: &NetworkInterface) -> Option<Interface> {
    let mac = iface.mac?;
    Some(Interface {
        index: iface.index,
        name: iface.name.clone(),
        mac: MacAddr6::from(mac.octets()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pnet::util::MacAddr;

    const IFF_LOOPBACK: u32 = 0x8;

    fn net_iface(name: &str, index: u32, mac: Option<MacAddr>, flags: u32) -> NetworkInterface {
        NetworkInterface {
            name: name.to_string(),
            description: String::new(),
            index,
            mac,
            ips: vec![],
            flags,
        }
    }

    fn platform() -> Vec<NetworkInterface> {
        vec![
            net_iface("lo", 1, Some(MacAddr::zero()), IFF_LOOPBACK),
            net_iface("eth0", 2, Some(MacAddr::new(2, 0, 0, 0, 0, 1)), 0),
            net_iface("eth1", 3, Some(MacAddr::new(2, 0, 0, 0, 0, 2)), 0),
        ]
    }

    #[test]
    fn test_all_excludes_loopback() {
        let interfaces = select(platform(), &Selector::All).unwrap();
        let names: Vec<&str> = interfaces.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["eth0", "eth1"]);
    }

    #[test]
    fn test_all_excludes_interfaces_without_mac() {
        let mut all = platform();
        all.push(net_iface("tun0", 4, None, 0));
        let interfaces = select(all, &Selector::All).unwrap();
        assert!(interfaces.iter().all(|i| i.name != "tun0"));
    }

    #[test]
    fn test_named_interface_resolves_mac_and_index() {
        let interfaces = select(platform(), &Selector::Name("eth1".to_string())).unwrap();
        assert_eq!(interfaces.len(), 1);
        assert_eq!(interfaces[0].index, 3);
        assert_eq!(
            interfaces[0].mac,
            MacAddr6::new(0x02, 0x00, 0x00, 0x00, 0x00, 0x02)
        );
    }

    #[test]
    fn test_unknown_name_fails() {
        let err = select(platform(), &Selector::Name("eth9".to_string())).unwrap_err();
        assert!(matches!(err, DiscoveryError::NotFound(name) if name == "eth9"));
    }

    #[test]
    fn test_named_interface_without_mac_fails() {
        let mut all = platform();
        all.push(net_iface("tun0", 4, None, 0));
        let err = select(all, &Selector::Name("tun0".to_string())).unwrap_err();
        assert!(matches!(err, DiscoveryError::NoHardwareAddress(_)));
    }

    #[test]
    fn test_too_many_interfaces_is_an_error() {
        let all: Vec<NetworkInterface> = (0..MAX_INTERFACES as u32 + 1)
            .map(|i| {
                net_iface(
                    &format!("eth{}", i),
                    i + 1,
                    Some(MacAddr::new(2, 0, 0, 0, 0, i as u8)),
                    0,
                )
            })
            .collect();
        let err = select(all, &Selector::All).unwrap_err();
        assert!(matches!(
            err,
            DiscoveryError::TooManyInterfaces { found, max }
                if found == MAX_INTERFACES + 1 && max == MAX_INTERFACES
        ));
    }

    #[test]
    fn test_selector_from_arg() {
        assert_eq!(Selector::from_arg("any"), Selector::All);
        assert_eq!(
            Selector::from_arg("eth0"),
            Selector::Name("eth0".to_string())
        );
    }
}
