//! certfp - TLS certificate fingerprinting client
//!
//! This crate implements a small TLS client for a certificate pinning
//! exercise: it connects to a loopback server, performs a TLS handshake,
//! computes the SHA-256 fingerprint of the certificate the peer presented,
//! sends the hex-encoded fingerprint back over the encrypted channel and
//! reads one reply.

pub mod client;
pub mod net;
pub mod tls;
