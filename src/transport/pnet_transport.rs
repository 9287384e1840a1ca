//! pnet-based link transport implementation.

use std::time::{Duration, Instant};

use pnet::datalink::{self, Channel, Config, DataLinkReceiver, DataLinkSender};

use super::{LinkTransport, TransportOpener};
use crate::domain::Interface;
use crate::error::TransportError;

/// Poll granularity of the receive loop; the caller's deadline is
/// enforced on top of this.
const READ_TIMEOUT: Duration = Duration::from_millis(100);

/// Opens raw Ethernet channels through the pnet datalink layer.
pub struct PnetOpener;

impl TransportOpener for PnetOpener {
    fn open(&self, iface: &Interface) -> Result<Box<dyn LinkTransport>, TransportError> {
        let interface = datalink::interfaces()
            .into_iter()
            .find(|candidate| candidate.name == iface.name)
            .ok_or_else(|| {
                TransportError::Open(format!("interface {} is no longer present", iface.name))
            })?;

        let config = Config {
            read_timeout: Some(READ_TIMEOUT),
            ..Config::default()
        };

        let (tx, rx) = match datalink::channel(&interface, config) {
            Ok(Channel::Ethernet(tx, rx)) => (tx, rx),
            Ok(_) => return Err(TransportError::UnsupportedChannel),
            Err(e) => {
                let msg = e.to_string();
                if msg.contains("permission") || msg.contains("Operation not permitted") {
                    return Err(TransportError::InsufficientPermissions);
                }
                return Err(TransportError::Open(msg));
            }
        };

        Ok(Box::new(PnetTransport {
            name: iface.name.clone(),
            tx,
            rx,
        }))
    }
}

/// A raw Ethernet channel bound to one interface.
struct PnetTransport {
    name: String,
    tx: Box<dyn DataLinkSender>,
    rx: Box<dyn DataLinkReceiver>,
}

impl LinkTransport for PnetTransport {
    fn send(&mut self, frame: &[u8]) -> Result<(), TransportError> {
        match self.tx.send_to(frame, None) {
            Some(Ok(())) => Ok(()),
            Some(Err(e)) => Err(TransportError::Send(e.to_string())),
            None => Err(TransportError::Send("channel has no destination".to_string())),
        }
    }

    fn recv_deadline(&mut self, deadline: Instant) -> Result<Option<Vec<u8>>, TransportError> {
        loop {
            if Instant::now() >= deadline {
                return Ok(None);
            }
            match self.rx.next() {
                Ok(frame) => return Ok(Some(frame.to_vec())),
                // Short read timeouts and signal interruptions just spend
                // budget; the deadline check above bounds the loop.
                Err(e) if e.kind() == std::io::ErrorKind::TimedOut => continue,
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(TransportError::Recv(e.to_string())),
            }
        }
    }

    fn interface_name(&self) -> &str {
        &self.name
    }
}
