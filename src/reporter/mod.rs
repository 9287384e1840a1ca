//! Progress reporting for detection runs.
//!
//! This module defines the `ProbeReporter` trait (ISP, DIP) and provides
//! a console implementation.

mod console_reporter;

pub use console_reporter::ConsoleReporter;

use crate::domain::Fingerprint;
use crate::error::TransportError;

/// Trait for reporting per-interface probe progress (Interface
/// Segregation Principle).
///
/// This trait is intentionally minimal - it only handles reporting, not
/// aggregation. Implementations must be shareable across detector
/// threads; different ones can write to the console, logs, structured
/// sinks, etc.
pub trait ProbeReporter: Send + Sync {
    /// Called once when a run starts, with the interface count.
    fn on_start(&self, interface_count: usize);

    /// The probe frame went out on `iface` carrying `fingerprint`.
    fn on_probe_sent(&self, iface: &str, fingerprint: &Fingerprint);

    /// The deadline elapsed on `iface` without an echo.
    fn on_timeout(&self, iface: &str);

    /// The probe came back; `echoed_on` is the interface the echo was
    /// observed on.
    fn on_loop_detected(&self, iface: &str, echoed_on: &str);

    /// The channel for `iface` could not be opened or used.
    fn on_transport_failure(&self, iface: &str, error: &TransportError);
}
