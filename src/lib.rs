//! # zget
//!
//! A synchronous client for the "Zabbix Get" length-prefixed binary protocol,
//! used to retrieve monitoring key/value data from agent-like services (Zabbix
//! agents, VmBix and friends) over TCP.
//!
//! ## Wire Format
//!
//! ```text
//! ┌────────────┬───────────┬──────────────────┬─────────────────┐
//! │ "ZBXD" (4) │ ver=1 (1) │ len (8, LE u64)  │     payload     │
//! └────────────┴───────────┴──────────────────┴─────────────────┘
//! ```
//!
//! A request carries `key + "\n"` as its payload. The server sends exactly one
//! reply and then closes the connection; the reply is either framed the same
//! way or, for legacy servers, raw unframed text. Connections are never reused.
//!
//! ## Example
//!
//! ```no_run
//! use zget::{Client, Config};
//!
//! let config = Config::builder()
//!     .host("vmbix.example.org")
//!     .port(12050)
//!     .build();
//!
//! let client = Client::new(config);
//! let vms = client.query("vm.discovery[*]")?;
//! # Ok::<(), zget::ZgetError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod protocol;
pub mod network;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{Result, ZgetError};
pub use config::Config;
pub use network::Client;
pub use protocol::Reply;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of zget
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
