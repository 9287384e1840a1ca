//! looptrap - link-layer loop detector.
//!
//! Sends a fingerprinted broadcast frame out each monitored interface and
//! listens on the same channel for that frame to come back. A frame that
//! returns to its own sender means the switching fabric is looping it,
//! which normally indicates a mis-wired or mis-configured bridge.

pub mod codec;
pub mod detector;
pub mod discovery;
pub mod domain;
pub mod error;
pub mod orchestrator;
pub mod reporter;
pub mod transport;
