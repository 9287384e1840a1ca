//! Probe frame codec module.
//!
//! This module is responsible for encoding and decoding the raw test
//! frame bytes exchanged on the wire (SRP).

mod frame;

pub use frame::{
    decode, encode, encode_probe, DecodedFrame, BROADCAST, FRAME_LEN, HEADER_LEN,
    PAYLOAD_CAPACITY, PROBE_ETHERTYPE,
};
