//! Fingerprint exchange client
//!
//! Ties the transport and TLS layers together into the exchange this
//! crate exists for: open a TCP connection, perform the TLS handshake,
//! send the peer certificate's SHA-256 fingerprint over the encrypted
//! channel, and read one reply.

use crate::net;
use crate::tls::{Fingerprint, TlsConfig, TlsError, TlsSession};
use bytes::BytesMut;
use std::net::Ipv4Addr;
use std::path::PathBuf;

/// Default peer address
pub const DEFAULT_ADDR: Ipv4Addr = Ipv4Addr::LOCALHOST;

/// Default peer port
pub const DEFAULT_PORT: u16 = 4433;

/// Maximum reply length in bytes
pub const MAX_REPLY_LEN: usize = 64;

/// Result type for client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Client errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Transport error: {0}")]
    Net(#[from] net::Error),

    #[error("TLS error: {0}")]
    Tls(#[from] TlsError),
}

/// Client settings
///
/// The defaults match the exercise setup: loopback peer on port 4433,
/// `cert.pem` and `key.pem` from the working directory, and the
/// trust-on-first-use verification policy.
#[derive(Debug, Clone)]
pub struct ClientOpts {
    /// Peer IPv4 address
    pub addr: Ipv4Addr,
    /// Peer TCP port
    pub port: u16,
    /// Path to the client certificate (PEM)
    pub cert_file: PathBuf,
    /// Path to the client private key (PEM)
    pub key_file: PathBuf,
    /// Accept the peer certificate without chain validation
    pub accept_any_peer: bool,
}

impl Default for ClientOpts {
    fn default() -> Self {
        ClientOpts {
            addr: DEFAULT_ADDR,
            port: DEFAULT_PORT,
            cert_file: PathBuf::from("cert.pem"),
            key_file: PathBuf::from("key.pem"),
            accept_any_peer: true,
        }
    }
}

/// Outcome of one fingerprint exchange
#[derive(Debug)]
pub struct Exchange {
    /// Fingerprint sent to the peer; `None` if the peer presented no
    /// certificate or its digest was rejected.
    pub fingerprint: Option<Fingerprint>,
    /// Subject CN of the peer certificate, if one was presented
    pub peer_subject: Option<String>,
    /// Reply read from the peer, decoded as a NUL-terminated string
    pub reply: String,
}

/// Run one fingerprint exchange against the configured peer.
///
/// Pipeline: TCP connect, TLS configuration, handshake, fingerprint
/// exchange, one reply read, session close. Connect and handshake
/// failures abort the flow before any later step runs; a failed digest
/// only skips the fingerprint send.
pub fn run(opts: &ClientOpts) -> Result<Exchange> {
    // Process-wide OpenSSL initialization; idempotent.
    openssl::init();

    let tcp_stream = net::connect(opts.addr, opts.port)?;
    log::debug!("connected to {}:{}", opts.addr, opts.port);

    let config = TlsConfig::client()
        .cert_file(&opts.cert_file)?
        .key_file(&opts.key_file)?
        .accept_any_peer(opts.accept_any_peer)
        .build()?;

    let mut session = config.connect(tcp_stream)?;
    log::info!("connected, negotiated {}", session.version());

    let peer_subject = session.peer_cert_info().map(|info| {
        log::info!("peer certificate subject: {}", info.subject);
        info.subject
    });

    let fingerprint = fingerprint_and_send(&mut session)?;

    let reply = read_reply(&mut session)?;

    session.close()?;

    Ok(Exchange {
        fingerprint,
        peer_subject,
        reply,
    })
}

/// Compute the peer certificate's fingerprint and send it.
///
/// The digest is hex encoded and written as-is: 64 lowercase hex
/// characters, no newline, no length prefix. If the peer presented no
/// certificate, or the digest fails or has an unexpected length,
/// nothing is written and the exchange continues without a fingerprint.
pub fn fingerprint_and_send(session: &mut TlsSession) -> Result<Option<Fingerprint>> {
    let cert = match session.peer_certificate() {
        Some(cert) => cert,
        None => {
            log::warn!("peer presented no certificate");
            return Ok(None);
        }
    };

    let fingerprint = match Fingerprint::from_cert(&cert) {
        Ok(fingerprint) => fingerprint,
        Err(e) => {
            log::warn!("no fingerprint for peer certificate: {}", e);
            return Ok(None);
        }
    };

    let hex = fingerprint.to_hex();
    log::info!("peer fingerprint: {}", hex);
    session.write_all(hex.as_bytes())?;

    Ok(Some(fingerprint))
}

/// Read one reply from the session, capped at [`MAX_REPLY_LEN`] bytes.
fn read_reply(session: &mut TlsSession) -> Result<String> {
    let mut buf = BytesMut::zeroed(MAX_REPLY_LEN);
    let n = session.read(&mut buf)?;
    buf.truncate(n);

    Ok(reply_to_string(&buf))
}

/// Decode a reply as a NUL-terminated printable string.
///
/// Bytes past the first NUL are discarded; a reply without a NUL is
/// taken whole, so a reply filling the entire buffer stays within it.
fn reply_to_string(buf: &[u8]) -> String {
    let end = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
    String::from_utf8_lossy(&buf[..end]).into_owned()
}
