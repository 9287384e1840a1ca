//! Detection run orchestration.
//!
//! Fans one detector out per interface on its own thread, joins them
//! all, and folds the outcomes into an [`AggregateResult`].

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crate::detector::LoopDetector;
use crate::domain::{AggregateResult, DetectionOutcome, Interface};
use crate::error::TransportError;
use crate::reporter::ProbeReporter;
use crate::transport::TransportOpener;

/// Run one detection pass over `interfaces`.
///
/// Every detector gets its own thread and its own blocking wait, so the
/// run's wall-clock time is bounded by `timeout`, not by the interface
/// count. Detectors never communicate with each other; the only shared
/// point is the join barrier here, and no partial results are returned
/// before every detector has reached a terminal state.
pub fn run(
    interfaces: Vec<Interface>,
    timeout: Duration,
    opener: Arc<dyn TransportOpener>,
    reporter: Arc<dyn ProbeReporter>,
) -> AggregateResult {
    let handles: Vec<(Interface, thread::JoinHandle<DetectionOutcome>)> = interfaces
        .into_iter()
        .map(|iface| {
            let opener = Arc::clone(&opener);
            let reporter = Arc::clone(&reporter);
            let detector_iface = iface.clone();
            let handle = thread::spawn(move || {
                LoopDetector::new(detector_iface, timeout).run(opener.as_ref(), reporter.as_ref())
            });
            (iface, handle)
        })
        .collect();

    let outcomes = handles
        .into_iter()
        .map(|(iface, handle)| {
            let outcome = handle.join().unwrap_or_else(|_| {
                // A panicked detector is contained like any other
                // per-interface failure.
                tracing::error!("detector thread for {} panicked", iface.name);
                DetectionOutcome::TransportFailed(TransportError::Recv(
                    "detector thread panicked".to_string(),
                ))
            });
            (iface, outcome)
        })
        .collect();

    AggregateResult { outcomes }
}
