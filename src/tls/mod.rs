//! TLS client support
//!
//! This module implements the TLS side of the fingerprint exchange:
//! building a client configuration, performing the handshake over an
//! existing TCP connection, and digesting the certificate the peer
//! presented.
//!
//! # Architecture
//!
//! 1. [`TlsConfig`] holds the local certificate/key material and the peer
//!    verification policy. It is immutable after building and can create
//!    any number of sessions.
//! 2. [`TlsSession`] binds a configuration to one TCP connection and
//!    performs the client handshake. Only an established session is
//!    representable; a failed handshake is an error, not a session.
//! 3. [`Fingerprint`] is the SHA-256 digest of a certificate's DER
//!    encoding, sent over the session as 64 lowercase hex characters.
//!
//! # Examples
//!
//! ```no_run
//! use certfp::tls::TlsConfig;
//! use std::net::TcpStream;
//!
//! let config = TlsConfig::client()
//!     .cert_file("cert.pem")
//!     .unwrap()
//!     .key_file("key.pem")
//!     .unwrap()
//!     .accept_any_peer(true)
//!     .build()
//!     .unwrap();
//!
//! let tcp_stream = TcpStream::connect("127.0.0.1:4433").unwrap();
//! let session = config.connect(tcp_stream).unwrap();
//! let cert = session.peer_certificate();
//! ```

pub mod builtin_cert;
pub mod cert;
pub mod config;
pub mod fingerprint;
pub mod session;

pub use cert::CertInfo;
pub use config::{ClientConfigBuilder, TlsConfig, TlsError};
pub use fingerprint::{Fingerprint, FINGERPRINT_LEN};
pub use session::TlsSession;

/// Result type for TLS operations
pub type Result<T> = std::result::Result<T, TlsError>;
