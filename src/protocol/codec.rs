//! Protocol codec
//!
//! Encoding and decoding functions for the Zabbix Get wire protocol.
//!
//! ## Wire Format
//!
//! ```text
//! ┌────────────┬───────────┬──────────────────┬─────────────────┐
//! │ "ZBXD" (4) │ ver=1 (1) │ len (8, LE u64)  │     payload     │
//! └────────────┴───────────┴──────────────────┴─────────────────┘
//! ```
//!
//! - Request payload: `key + "\n"` (the newline is the query terminator).
//! - Reply payload: the serialized key value. Bytes past the declared length
//!   are ignored.
//! - A reply not starting with the 5-byte marker `ZBXD\x01` is legacy raw
//!   text and is returned undecoded.

use crate::error::{Result, ZgetError};
use super::Reply;

/// Magic marker opening every framed message
pub const MAGIC: [u8; 4] = *b"ZBXD";

/// Protocol version byte following the magic
pub const PROTOCOL_VERSION: u8 = 0x01;

/// Marker size: 4 bytes magic + 1 byte version
pub const MARKER_SIZE: usize = 5;

/// Header size: 4 bytes magic + 1 byte version + 8 bytes length
pub const HEADER_SIZE: usize = 13;

// =============================================================================
// Request Encoding
// =============================================================================

/// Encode a query key into a framed request
///
/// Appends exactly one `\n` terminator to the key, then wraps it in the
/// magic + version + length header. The key itself must not contain a
/// newline.
pub fn encode_request(key: &str) -> Result<Vec<u8>> {
    if key.contains('\n') {
        return Err(ZgetError::Usage(
            "query key must not contain a newline".to_string(),
        ));
    }

    let payload_len = key.len() + 1;

    let mut message = Vec::with_capacity(HEADER_SIZE + payload_len);
    message.extend_from_slice(&MAGIC);
    message.push(PROTOCOL_VERSION);
    message.extend_from_slice(&(payload_len as u64).to_le_bytes());
    message.extend_from_slice(key.as_bytes());
    message.push(b'\n');

    Ok(message)
}

// =============================================================================
// Reply Decoding
// =============================================================================

/// Decode a complete reply byte sequence
///
/// Expects every byte the peer sent before closing the connection. If the
/// sequence opens with the `ZBXD\x01` marker the 13-byte header is parsed and
/// exactly the declared number of payload bytes is extracted; a declared
/// length the available bytes cannot satisfy is a protocol error, never a
/// partial payload. Anything else (including an empty sequence, or a marker
/// with an unknown version byte) is passed through verbatim as a legacy reply.
pub fn decode_reply(bytes: &[u8]) -> Result<Reply> {
    if !has_marker(bytes) {
        return Ok(Reply::Legacy(bytes.to_vec()));
    }

    if bytes.len() < HEADER_SIZE {
        return Err(ZgetError::Protocol(format!(
            "Incomplete header: expected {} bytes, got {}",
            HEADER_SIZE,
            bytes.len()
        )));
    }

    let payload_len = u64::from_le_bytes([
        bytes[5], bytes[6], bytes[7], bytes[8], bytes[9], bytes[10], bytes[11], bytes[12],
    ]);

    let available = (bytes.len() - HEADER_SIZE) as u64;
    if payload_len > available {
        return Err(ZgetError::Protocol(format!(
            "Truncated frame: header declares {} payload bytes, only {} available",
            payload_len, available
        )));
    }

    let payload = bytes[HEADER_SIZE..HEADER_SIZE + payload_len as usize].to_vec();
    Ok(Reply::Framed(payload))
}

/// Whether the byte sequence opens with the 5-byte `ZBXD\x01` marker
fn has_marker(bytes: &[u8]) -> bool {
    bytes.len() >= MARKER_SIZE && bytes[..4] == MAGIC && bytes[4] == PROTOCOL_VERSION
}
