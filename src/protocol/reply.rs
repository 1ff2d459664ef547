//! Reply definitions
//!
//! Represents a decoded server reply.

/// A decoded reply from the server
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// A framed reply: the payload extracted from a `ZBXD` envelope
    Framed(Vec<u8>),

    /// A legacy reply: raw bytes from a server that does not frame its output
    Legacy(Vec<u8>),
}

impl Reply {
    /// Borrow the payload bytes, regardless of framing
    pub fn payload(&self) -> &[u8] {
        match self {
            Reply::Framed(payload) | Reply::Legacy(payload) => payload,
        }
    }

    /// Consume the reply and take the payload bytes
    pub fn into_payload(self) -> Vec<u8> {
        match self {
            Reply::Framed(payload) | Reply::Legacy(payload) => payload,
        }
    }

    /// Whether the reply carried the `ZBXD` envelope
    pub fn is_framed(&self) -> bool {
        matches!(self, Reply::Framed(_))
    }
}
