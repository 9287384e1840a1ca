//! Per-interface and aggregate detection results.

use crate::domain::Interface;
use crate::error::TransportError;

/// Terminal state of one per-interface detector.
#[derive(Debug)]
pub enum DetectionOutcome {
    /// The probe frame came back: the segment loops. Carries the name of
    /// the interface the echo was observed on, derived from the channel
    /// it arrived through.
    Detected { echoed_on: String },
    /// The deadline elapsed without a matching echo. An expected result,
    /// not a failure.
    TimedOut,
    /// The channel could not be opened or the probe could not be sent.
    TransportFailed(TransportError),
}

impl DetectionOutcome {
    pub fn is_detected(&self) -> bool {
        matches!(self, DetectionOutcome::Detected { .. })
    }
}

/// The collected outcomes of one detection run.
#[derive(Debug, Default)]
pub struct AggregateResult {
    /// Per-interface outcomes, in discovery order.
    pub outcomes: Vec<(Interface, DetectionOutcome)>,
}

impl AggregateResult {
    /// Number of interfaces on which a loop was detected.
    pub fn detected_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| outcome.is_detected())
            .count()
    }
}
