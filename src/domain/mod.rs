//! Domain models for loop detection.
//!
//! This module contains the core types that are independent
//! of any transport or platform concerns (SRP, DIP).

mod fingerprint;
mod interface;
mod outcome;

pub use fingerprint::{Fingerprint, FINGERPRINT_LEN};
pub use interface::Interface;
pub use outcome::{AggregateResult, DetectionOutcome};
