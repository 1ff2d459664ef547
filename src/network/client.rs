//! Protocol Client
//!
//! Performs one request/response exchange over a fresh TCP connection.

use std::io::{Read, Write};
use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;

use bytes::BytesMut;

use crate::config::Config;
use crate::error::{Result, ZgetError};
use crate::protocol::{decode_reply, encode_request};

/// Read chunk size while accumulating the reply
const READ_CHUNK_SIZE: usize = 4096;

/// Client for the Zabbix Get protocol
///
/// Holds no connection state: every [`query`](Client::query) opens its own
/// socket, performs a single exchange and closes it. The client is therefore
/// safe to share across threads.
pub struct Client {
    config: Config,
}

impl Client {
    /// Create a new client for the configured target
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// The configuration this client was built with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Query a single key and return the decoded payload
    ///
    /// Opens a TCP connection, sends the framed request, reads the reply
    /// until the peer closes the connection, and decodes it. The protocol
    /// assumes the server sends exactly one reply per connection; there is no
    /// other message boundary on read, so do not point this client at a
    /// keep-alive service.
    ///
    /// A key containing a newline fails with [`ZgetError::Usage`] before any
    /// network activity. No retries are performed; a failed exchange surfaces
    /// its error to the caller.
    pub fn query(&self, key: &str) -> Result<String> {
        let request = encode_request(key)?;

        let mut stream = self.connect()?;
        tracing::debug!("Connected to {}", self.config.addr());

        stream
            .write_all(&request)
            .map_err(|e| ZgetError::from_io("send failed", e))?;
        tracing::trace!("Sent {} byte request for key {:?}", request.len(), key);

        let raw = read_to_close(&mut stream)?;
        tracing::trace!("Received {} bytes", raw.len());

        // One exchange per connection; close before decoding.
        drop(stream);

        let reply = decode_reply(&raw)?;
        tracing::debug!(
            "Decoded {} reply ({} payload bytes)",
            if reply.is_framed() { "framed" } else { "legacy" },
            reply.payload().len()
        );

        Ok(String::from_utf8(reply.into_payload())?)
    }

    /// Open a connection to the configured target
    ///
    /// Applies the configured connect timeout to each resolved address in
    /// turn; the last failure is reported if none succeeds.
    fn connect(&self) -> Result<TcpStream> {
        let addrs = (self.config.host.as_str(), self.config.port)
            .to_socket_addrs()
            .map_err(|e| {
                ZgetError::Connection(format!("cannot resolve {}: {}", self.config.addr(), e))
            })?;

        let mut last_err = None;
        for addr in addrs {
            let attempt = if self.config.connect_timeout_ms > 0 {
                TcpStream::connect_timeout(
                    &addr,
                    Duration::from_millis(self.config.connect_timeout_ms),
                )
            } else {
                TcpStream::connect(addr)
            };

            match attempt {
                Ok(stream) => {
                    self.configure(&stream)
                        .map_err(|e| ZgetError::from_io("socket setup failed", e))?;
                    return Ok(stream);
                }
                Err(e) => last_err = Some(e),
            }
        }

        match last_err {
            Some(e) => Err(ZgetError::from_io(
                &format!("cannot connect to {}", self.config.addr()),
                e,
            )),
            None => Err(ZgetError::Connection(format!(
                "{} resolved to no addresses",
                self.config.addr()
            ))),
        }
    }

    /// Apply socket options from the config
    fn configure(&self, stream: &TcpStream) -> std::io::Result<()> {
        // Disable Nagle's algorithm for low latency
        stream.set_nodelay(true)?;

        if self.config.read_timeout_ms > 0 {
            stream.set_read_timeout(Some(Duration::from_millis(self.config.read_timeout_ms)))?;
        }
        if self.config.write_timeout_ms > 0 {
            stream.set_write_timeout(Some(Duration::from_millis(self.config.write_timeout_ms)))?;
        }

        Ok(())
    }
}

/// Read from the stream until the peer closes the connection
///
/// Peer close (a zero-length read) is the only reply boundary the protocol
/// has. A read timeout while the peer is still open maps to
/// [`ZgetError::Timeout`].
fn read_to_close(stream: &mut TcpStream) -> Result<Vec<u8>> {
    let mut data = BytesMut::with_capacity(READ_CHUNK_SIZE);
    let mut chunk = [0u8; READ_CHUNK_SIZE];

    loop {
        match stream.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => data.extend_from_slice(&chunk[..n]),
            Err(ref e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(ZgetError::from_io("read failed", e)),
        }
    }

    Ok(data.to_vec())
}
