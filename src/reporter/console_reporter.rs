//! Console-based probe reporter.

use std::io::{self, Write};

use crate::domain::Fingerprint;
use crate::error::TransportError;
use crate::reporter::ProbeReporter;

/// Reports probe progress to the console, one line per event prefixed
/// with the interface name. These lines are the authoritative structured
/// output when the exit code saturates.
pub struct ConsoleReporter;

impl ConsoleReporter {
    pub fn new() -> Self {
        Self
    }

    fn line(&self, text: &str) {
        let mut stdout = io::stdout().lock();
        let _ = writeln!(stdout, "{}", text);
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProbeReporter for ConsoleReporter {
    fn on_start(&self, interface_count: usize) {
        self.line(&format!("probing {} interface(s)", interface_count));
    }

    fn on_probe_sent(&self, iface: &str, fingerprint: &Fingerprint) {
        self.line(&format!(
            "iface {}: test frame sent with fingerprint {}",
            iface, fingerprint
        ));
    }

    fn on_timeout(&self, iface: &str) {
        self.line(&format!("iface {}: timeout reached, no loop detected", iface));
    }

    fn on_loop_detected(&self, iface: &str, echoed_on: &str) {
        self.line(&format!(
            "iface {}: LOOP DETECTED, fingerprint matched on {}",
            iface, echoed_on
        ));
    }

    fn on_transport_failure(&self, iface: &str, error: &TransportError) {
        eprintln!("iface {}: transport failure: {}", iface, error);
    }
}
