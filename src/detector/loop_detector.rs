//! Per-interface loop detection state machine.

use std::time::{Duration, Instant};

use macaddr::MacAddr6;

use crate::codec::{self, DecodedFrame, BROADCAST, PROBE_ETHERTYPE};
use crate::domain::{DetectionOutcome, Fingerprint, Interface};
use crate::reporter::ProbeReporter;
use crate::transport::{LinkTransport, TransportOpener};

/// Runs one probe cycle on one interface.
///
/// Lifecycle: open a channel bound to the interface, send a single
/// broadcast probe carrying a fresh fingerprint, then wait out the
/// deadline for that exact frame to come back. One send per run, no
/// retries; a failure here never affects detectors on other interfaces.
pub struct LoopDetector {
    iface: Interface,
    timeout: Duration,
}

impl LoopDetector {
    pub fn new(iface: Interface, timeout: Duration) -> Self {
        Self { iface, timeout }
    }

    /// Drive the state machine to a terminal state.
    ///
    /// The transport is dropped on every exit path, so the channel is
    /// released whether the probe matched, timed out, or failed.
    pub fn run(&self, opener: &dyn TransportOpener, reporter: &dyn ProbeReporter) -> DetectionOutcome {
        let mut transport = match opener.open(&self.iface) {
            Ok(transport) => transport,
            Err(e) => {
                reporter.on_transport_failure(&self.iface.name, &e);
                return DetectionOutcome::TransportFailed(e);
            }
        };

        let fingerprint = Fingerprint::generate();
        let frame = codec::encode_probe(BROADCAST, self.iface.mac, &fingerprint);

        if let Err(e) = transport.send(&frame) {
            reporter.on_transport_failure(&self.iface.name, &e);
            return DetectionOutcome::TransportFailed(e);
        }
        reporter.on_probe_sent(&self.iface.name, &fingerprint);

        let deadline = Instant::now() + self.timeout;
        self.await_echo(transport.as_mut(), &fingerprint, deadline, reporter)
    }

    /// Keep consuming inbound frames until the original deadline.
    /// Non-matching and malformed frames spend budget but never extend it.
    fn await_echo(
        &self,
        transport: &mut dyn LinkTransport,
        fingerprint: &Fingerprint,
        deadline: Instant,
        reporter: &dyn ProbeReporter,
    ) -> DetectionOutcome {
        loop {
            match transport.recv_deadline(deadline) {
                Ok(Some(raw)) => {
                    let decoded = match codec::decode(&raw) {
                        Ok(decoded) => decoded,
                        Err(e) => {
                            tracing::debug!("{}: ignoring inbound frame: {}", self.iface.name, e);
                            continue;
                        }
                    };
                    if is_echo(&decoded, self.iface.mac, fingerprint) {
                        let echoed_on = transport.interface_name().to_string();
                        reporter.on_loop_detected(&self.iface.name, &echoed_on);
                        return DetectionOutcome::Detected { echoed_on };
                    }
                }
                Ok(None) => {
                    reporter.on_timeout(&self.iface.name);
                    return DetectionOutcome::TimedOut;
                }
                Err(e) => {
                    reporter.on_transport_failure(&self.iface.name, &e);
                    return DetectionOutcome::TransportFailed(e);
                }
            }
        }
    }
}

/// An inbound frame is an echo of our probe iff it carries our own
/// source address, the reserved probe EtherType, and the exact
/// fingerprint. Equality is exact, never prefix or fuzzy.
pub fn is_echo(frame: &DecodedFrame, local_mac: MacAddr6, fingerprint: &Fingerprint) -> bool {
    frame.src == local_mac
        && frame.ethertype == PROBE_ETHERTYPE
        && fingerprint.matches(&frame.payload)
}
