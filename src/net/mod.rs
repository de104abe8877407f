//! TCP transport layer
//!
//! Opens the raw TCP connection that a TLS session is later layered on.
//! Socket creation and the connect itself are separate failure modes, and
//! both are checked: a connect that does not complete surfaces as
//! [`Error::Connect`] before any TLS activity takes place.

use socket2::{Domain, Protocol, SockAddr, Socket, Type};
use std::net::{Ipv4Addr, SocketAddrV4, TcpStream};

/// Result type for transport operations
pub type Result<T> = std::result::Result<T, Error>;

/// Transport errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unable to create socket: {0}")]
    Socket(std::io::Error),

    #[error("Unable to connect to {addr}:{port}: {source}")]
    Connect {
        addr: Ipv4Addr,
        port: u16,
        source: std::io::Error,
    },

    #[error("Invalid port: 0")]
    InvalidPort,
}

/// Open a TCP connection to `addr:port`.
///
/// The returned stream is in blocking mode and owned exclusively by the
/// caller; it is closed when dropped.
pub fn connect(addr: Ipv4Addr, port: u16) -> Result<TcpStream> {
    if port == 0 {
        return Err(Error::InvalidPort);
    }

    let socket =
        Socket::new(Domain::IPV4, Type::STREAM, Some(Protocol::TCP)).map_err(Error::Socket)?;

    let target = SockAddr::from(SocketAddrV4::new(addr, port));
    socket
        .connect(&target)
        .map_err(|source| Error::Connect { addr, port, source })?;

    Ok(socket.into())
}
