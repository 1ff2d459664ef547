//! Network Module
//!
//! TCP client for the Zabbix Get protocol.
//!
//! ## Connection Model
//! - One fresh connection per query, never reused
//! - The server sends exactly one reply, then closes
//! - The full reply is read until peer close, then decoded

mod client;

pub use client::Client;
