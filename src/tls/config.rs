//! TLS client configuration
//!
//! This module provides the configuration builder for client sessions:
//! certificate and key loading, and the peer verification policy.

use std::path::Path;

/// TLS errors
#[derive(Debug, thiserror::Error)]
pub enum TlsError {
    #[error("OpenSSL error: {0}")]
    OpenSsl(#[from] openssl::error::ErrorStack),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Certificate error: {0}")]
    Certificate(String),

    #[error("Handshake failed: {0}")]
    HandshakeFailed(String),

    #[error("Unexpected digest length {len} (expected {expected})")]
    DigestLength { len: usize, expected: usize },

    #[error("TLS operation failed: {0}")]
    OperationFailed(String),
}

/// TLS client configuration (immutable after building)
///
/// Holds the OpenSSL context with the local certificate and key loaded
/// plus the verification policy. One configuration can back any number
/// of sessions; this client creates exactly one.
#[derive(Clone)]
pub struct TlsConfig {
    pub(crate) ctx: openssl::ssl::SslContext,
    pub(crate) accept_any_peer: bool,
}

impl TlsConfig {
    /// Create a new client configuration builder
    pub fn client() -> ClientConfigBuilder {
        ClientConfigBuilder::new()
    }

    /// Whether the peer certificate is accepted without chain validation
    pub fn accept_any_peer(&self) -> bool {
        self.accept_any_peer
    }

    /// Connect to a server with TLS (perform the client handshake)
    pub fn connect(
        &self,
        stream: std::net::TcpStream,
    ) -> Result<super::TlsSession, TlsError> {
        super::session::TlsSession::connect(stream, self)
    }
}

/// Client configuration builder
///
/// The defaults match the pinning exercise: version-negotiating client
/// method, peer certificate required, and `accept_any_peer` enabled so
/// that the fingerprint exchange stands in for chain validation.
pub struct ClientConfigBuilder {
    ctx_builder: openssl::ssl::SslContextBuilder,
    accept_any_peer: bool,
}

impl std::fmt::Debug for ClientConfigBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfigBuilder")
            .field("accept_any_peer", &self.accept_any_peer)
            .finish_non_exhaustive()
    }
}

impl ClientConfigBuilder {
    fn new() -> Self {
        use openssl::ssl::{SslContextBuilder, SslMethod};

        let ctx_builder = SslContextBuilder::new(SslMethod::tls_client())
            .expect("Failed to create SSL context");

        let mut builder = ClientConfigBuilder {
            ctx_builder,
            accept_any_peer: false,
        };
        builder.set_verify_policy(true);
        builder
    }

    /// Load the client certificate from a PEM file
    pub fn cert_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, TlsError> {
        use openssl::ssl::SslFiletype;

        self.ctx_builder
            .set_certificate_file(path.as_ref(), SslFiletype::PEM)
            .map_err(|e| {
                TlsError::Certificate(format!(
                    "Failed to load certificate {}: {}",
                    path.as_ref().display(),
                    e
                ))
            })?;

        Ok(self)
    }

    /// Load the client private key from a PEM file
    pub fn key_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, TlsError> {
        use openssl::ssl::SslFiletype;

        self.ctx_builder
            .set_private_key_file(path.as_ref(), SslFiletype::PEM)
            .map_err(|e| {
                TlsError::Certificate(format!(
                    "Failed to load private key {}: {}",
                    path.as_ref().display(),
                    e
                ))
            })?;

        Ok(self)
    }

    /// Set the peer verification policy.
    ///
    /// With `true` (the default) the peer must present a certificate but
    /// the certificate is accepted regardless of chain validity; the
    /// fingerprint exchange is the identity check. Production use
    /// requires `false`, which keeps OpenSSL's chain validation active.
    pub fn accept_any_peer(mut self, accept: bool) -> Self {
        self.set_verify_policy(accept);
        self
    }

    fn set_verify_policy(&mut self, accept: bool) {
        use openssl::ssl::SslVerifyMode;

        self.accept_any_peer = accept;
        if accept {
            self.ctx_builder
                .set_verify_callback(SslVerifyMode::PEER, |_preverify_ok, _ctx| true);
        } else {
            self.ctx_builder.set_verify(SslVerifyMode::PEER);
        }
    }

    /// Build the TLS configuration
    pub fn build(self) -> Result<TlsConfig, TlsError> {
        Ok(TlsConfig {
            ctx: self.ctx_builder.build(),
            accept_any_peer: self.accept_any_peer,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tls::builtin_cert::{cert_pem, key_pem};
    use std::io::Write;

    fn write_pem(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_default_accepts_any_peer() {
        let config = TlsConfig::client().build().unwrap();
        assert!(config.accept_any_peer());
    }

    #[test]
    fn test_strict_policy() {
        let config = TlsConfig::client().accept_any_peer(false).build().unwrap();
        assert!(!config.accept_any_peer());
    }

    #[test]
    fn test_cert_and_key_load() {
        let cert = write_pem(cert_pem());
        let key = write_pem(key_pem());

        let config = TlsConfig::client()
            .cert_file(cert.path())
            .unwrap()
            .key_file(key.path())
            .unwrap()
            .build()
            .unwrap();

        assert!(config.accept_any_peer());
    }

    #[test]
    fn test_missing_cert_file_is_an_error() {
        let err = TlsConfig::client()
            .cert_file("/nonexistent/cert.pem")
            .unwrap_err();
        assert!(matches!(err, TlsError::Certificate(_)));
    }

    #[test]
    fn test_missing_key_file_is_an_error() {
        let err = TlsConfig::client()
            .key_file("/nonexistent/key.pem")
            .unwrap_err();
        assert!(matches!(err, TlsError::Certificate(_)));
    }
}
