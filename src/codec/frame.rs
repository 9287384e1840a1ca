//! Fixed-layout probe frame encoding and decoding.
//!
//! On-wire layout (64 bytes total):
//!
//! ```text
//! 0..6    destination MAC
//! 6..12   source MAC
//! 12..14  EtherType, big-endian
//! 14..    payload, zero-padded to the frame length
//! ```
//!
//! Field offsets are explicit; no in-memory struct is ever aliased onto
//! wire bytes.

use macaddr::MacAddr6;

use crate::domain::{Fingerprint, FINGERPRINT_LEN};
use crate::error::CodecError;

/// Total on-wire length of a probe frame.
pub const FRAME_LEN: usize = 64;
/// Ethernet header length: two MACs plus the EtherType.
pub const HEADER_LEN: usize = 14;
/// Bytes available for payload after the header.
pub const PAYLOAD_CAPACITY: usize = FRAME_LEN - HEADER_LEN;
/// Reserved loopback-test EtherType. Never carries ordinary payload
/// traffic, so a frame bearing it on a healthy segment is ours.
pub const PROBE_ETHERTYPE: u16 = 0x9000;
/// All-ones link-layer broadcast address.
pub const BROADCAST: MacAddr6 = MacAddr6::new(0xff, 0xff, 0xff, 0xff, 0xff, 0xff);

const _: () = assert!(FINGERPRINT_LEN <= PAYLOAD_CAPACITY);

/// A structured view of a decoded inbound frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedFrame {
    pub dst: MacAddr6,
    pub src: MacAddr6,
    pub ethertype: u16,
    /// Everything after the header, padding included.
    pub payload: Vec<u8>,
}

/// Build a fixed-layout frame around an arbitrary payload.
///
/// Fails only if the payload does not fit after the header; shorter
/// payloads are zero-padded out to [`FRAME_LEN`].
pub fn encode(
    dst: MacAddr6,
    src: MacAddr6,
    ethertype: u16,
    payload: &[u8],
) -> Result<Vec<u8>, CodecError> {
    if payload.len() > PAYLOAD_CAPACITY {
        return Err(CodecError::PayloadTooLarge {
            len: payload.len(),
            capacity: PAYLOAD_CAPACITY,
        });
    }

    let mut frame = vec![0u8; FRAME_LEN];
    frame[0..6].copy_from_slice(dst.as_bytes());
    frame[6..12].copy_from_slice(src.as_bytes());
    frame[12..14].copy_from_slice(&ethertype.to_be_bytes());
    frame[HEADER_LEN..HEADER_LEN + payload.len()].copy_from_slice(payload);
    Ok(frame)
}

/// Build the probe frame for a fingerprint.
///
/// Infallible: the fingerprint length is statically within capacity.
pub fn encode_probe(dst: MacAddr6, src: MacAddr6, fingerprint: &Fingerprint) -> Vec<u8> {
    let mut frame = vec![0u8; FRAME_LEN];
    frame[0..6].copy_from_slice(dst.as_bytes());
    frame[6..12].copy_from_slice(src.as_bytes());
    frame[12..14].copy_from_slice(&PROBE_ETHERTYPE.to_be_bytes());
    frame[HEADER_LEN..HEADER_LEN + FINGERPRINT_LEN].copy_from_slice(fingerprint.as_bytes());
    frame
}

/// Decode an inbound frame into its header fields and payload.
///
/// Stateless; performs no checksum validation (that is the link layer's
/// job). Fails if the input is shorter than a full probe frame.
pub fn decode(raw: &[u8]) -> Result<DecodedFrame, CodecError> {
    if raw.len() < FRAME_LEN {
        return Err(CodecError::Malformed {
            len: raw.len(),
            min: FRAME_LEN,
        });
    }

    let mut dst = [0u8; 6];
    dst.copy_from_slice(&raw[0..6]);
    let mut src = [0u8; 6];
    src.copy_from_slice(&raw[6..12]);
    let ethertype = u16::from_be_bytes([raw[12], raw[13]]);

    Ok(DecodedFrame {
        dst: MacAddr6::from(dst),
        src: MacAddr6::from(src),
        ethertype,
        payload: raw[HEADER_LEN..].to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_mac(last: u8) -> MacAddr6 {
        MacAddr6::new(0x02, 0x00, 0x00, 0x00, 0x00, last)
    }

    #[test]
    fn test_round_trip_recovers_fields() {
        let fp = Fingerprint::from([0x5a; FINGERPRINT_LEN]);
        let frame = encode_probe(BROADCAST, test_mac(0x01), &fp);
        assert_eq!(frame.len(), FRAME_LEN);

        let decoded = decode(&frame).unwrap();
        assert_eq!(decoded.dst, BROADCAST);
        assert_eq!(decoded.src, test_mac(0x01));
        assert_eq!(decoded.ethertype, PROBE_ETHERTYPE);
        assert!(fp.matches(&decoded.payload));
    }

    #[test]
    fn test_encode_round_trip_arbitrary_payload() {
        let payload = [0xde, 0xad, 0xbe, 0xef];
        let frame = encode(test_mac(0x02), test_mac(0x01), 0x1234, &payload).unwrap();

        let decoded = decode(&frame).unwrap();
        assert_eq!(decoded.src, test_mac(0x01));
        assert_eq!(decoded.ethertype, 0x1234);
        assert_eq!(&decoded.payload[..payload.len()], &payload);
    }

    #[test]
    fn test_encode_zero_pads_to_frame_length() {
        let frame = encode(test_mac(0x02), test_mac(0x01), 0x1234, &[0xff]).unwrap();
        assert_eq!(frame.len(), FRAME_LEN);
        assert!(frame[HEADER_LEN + 1..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_encode_rejects_oversized_payload() {
        let payload = vec![0u8; PAYLOAD_CAPACITY + 1];
        let err = encode(test_mac(0x02), test_mac(0x01), 0x1234, &payload).unwrap_err();
        assert_eq!(
            err,
            CodecError::PayloadTooLarge {
                len: PAYLOAD_CAPACITY + 1,
                capacity: PAYLOAD_CAPACITY,
            }
        );
    }

    #[test]
    fn test_decode_rejects_short_input() {
        let err = decode(&[0u8; FRAME_LEN - 1]).unwrap_err();
        assert_eq!(
            err,
            CodecError::Malformed {
                len: FRAME_LEN - 1,
                min: FRAME_LEN,
            }
        );
        assert!(decode(&[]).is_err());
    }

    #[test]
    fn test_ethertype_is_big_endian_on_the_wire() {
        let frame = encode_probe(BROADCAST, test_mac(0x01), &Fingerprint::generate());
        assert_eq!(frame[12], 0x90);
        assert_eq!(frame[13], 0x00);
    }
}
