//! Protocol Module
//!
//! Defines the Zabbix Get wire protocol.
//!
//! ## Frame Format
//!
//! ```text
//! ┌────────────┬───────────┬──────────────────┬─────────────────┐
//! │ "ZBXD" (4) │ ver=1 (1) │ len (8, LE u64)  │     payload     │
//! └────────────┴───────────┴──────────────────┴─────────────────┘
//! ```
//!
//! The header is exactly 13 bytes. Requests carry `key + "\n"` as their
//! payload. Replies either use the same framing or, for legacy servers, are
//! raw unframed text; anything that does not start with the 5-byte marker
//! `ZBXD\x01` is passed through verbatim as a legacy reply.
//!
//! There is no application-level message boundary on the reply other than the
//! peer closing the connection: decoding operates on the complete byte
//! sequence accumulated up to peer close.

mod reply;
mod codec;

pub use reply::Reply;
pub use codec::{decode_reply, encode_request, HEADER_SIZE, MAGIC, MARKER_SIZE, PROTOCOL_VERSION};
