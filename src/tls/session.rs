//! TLS session
//!
//! Binds a client configuration to one TCP connection, performs the
//! handshake, and exposes encrypted I/O plus the negotiated peer
//! certificate.

use super::cert::CertInfo;
use super::config::{TlsConfig, TlsError};
use openssl::ssl::{Ssl, SslStream};
use openssl::x509::X509;
use std::io::{Read, Write};
use std::net::TcpStream;

/// An established TLS client session.
///
/// A session only exists in the established state: a handshake failure is
/// surfaced as an error from [`TlsSession::connect`] and no session value
/// is produced, so encrypted I/O cannot be reached after a failed
/// negotiation. I/O failures after the handshake mark the session as
/// failed, which suppresses the orderly TLS shutdown on close.
#[derive(Debug)]
pub struct TlsSession {
    stream: SslStream<TcpStream>,
    failed: bool,
}

impl TlsSession {
    /// Perform the client handshake over `tcp_stream`.
    pub fn connect(tcp_stream: TcpStream, config: &TlsConfig) -> Result<Self, TlsError> {
        let ssl = Ssl::new(&config.ctx)?;

        // The openssl crate's connect() runs the full handshake
        // synchronously on the blocking stream.
        let stream = match ssl.connect(tcp_stream) {
            Ok(stream) => stream,
            Err(e) => {
                return Err(TlsError::HandshakeFailed(format!("Connection failed: {}", e)));
            }
        };

        Ok(TlsSession {
            stream,
            failed: false,
        })
    }

    /// The certificate presented by the peer, if any.
    pub fn peer_certificate(&self) -> Option<X509> {
        self.stream.ssl().peer_certificate()
    }

    /// Subject and issuer of the peer certificate, for diagnostics.
    pub fn peer_cert_info(&self) -> Option<CertInfo> {
        self.peer_certificate()
            .map(|cert| CertInfo::from_x509(&cert))
    }

    /// Negotiated protocol version string (e.g. "TLSv1.3")
    pub fn version(&self) -> &str {
        self.stream.ssl().version_str()
    }

    /// Whether an I/O operation on this session has failed
    pub fn failed(&self) -> bool {
        self.failed
    }

    /// Read up to `buf.len()` decrypted bytes. Blocks until data is
    /// available and may return fewer bytes than requested.
    pub fn read(&mut self, buf: &mut [u8]) -> Result<usize, TlsError> {
        match self.stream.read(buf) {
            Ok(n) => Ok(n),
            Err(e) => {
                self.failed = true;
                Err(TlsError::Io(e))
            }
        }
    }

    /// Write `buf` over the session, returning the number of bytes
    /// actually written.
    pub fn write(&mut self, buf: &[u8]) -> Result<usize, TlsError> {
        match self.stream.write(buf) {
            Ok(n) => Ok(n),
            Err(e) => {
                self.failed = true;
                Err(TlsError::Io(e))
            }
        }
    }

    /// Write all of `buf`, retrying on short writes.
    pub fn write_all(&mut self, buf: &[u8]) -> Result<(), TlsError> {
        let mut written = 0;

        while written < buf.len() {
            let n = self.write(&buf[written..])?;
            if n == 0 {
                return Err(TlsError::OperationFailed(
                    "Connection closed during write".to_string(),
                ));
            }
            written += n;
        }

        Ok(())
    }

    /// Flush buffered output
    pub fn flush(&mut self) -> Result<(), TlsError> {
        self.stream.flush().map_err(|e| {
            self.failed = true;
            TlsError::Io(e)
        })
    }

    /// Close the session: orderly TLS shutdown (unless the session
    /// already failed), then shut down the underlying TCP connection.
    pub fn close(&mut self) -> Result<(), TlsError> {
        if !self.failed {
            let _ = self.stream.shutdown();
        }

        use std::net::Shutdown;
        match self.stream.get_mut().shutdown(Shutdown::Both) {
            Ok(()) => Ok(()),
            // The peer may already have torn the connection down.
            Err(ref e) if e.kind() == std::io::ErrorKind::NotConnected => Ok(()),
            Err(e) => Err(TlsError::Io(e)),
        }
    }
}
