//! Loop detection module.
//!
//! This module runs the per-interface send / await-echo state machine
//! (SRP), separate from framing, transport, and reporting.

mod loop_detector;

pub use loop_detector::{is_echo, LoopDetector};
