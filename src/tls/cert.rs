//! Peer certificate information
//!
//! Extracts the human-readable parts of an X.509 certificate used in
//! diagnostic output. The certificate's encoded bytes feed the
//! fingerprint computation in [`super::fingerprint`].

use openssl::nid::Nid;
use openssl::x509::{X509NameRef, X509Ref};

/// Certificate information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertInfo {
    /// Certificate subject (Common Name)
    pub subject: String,
    /// Certificate issuer (Common Name)
    pub issuer: String,
}

impl CertInfo {
    /// Extract certificate information from an X.509 certificate
    pub fn from_x509(cert: &X509Ref) -> Self {
        CertInfo {
            subject: get_cn(cert.subject_name()),
            issuer: get_cn(cert.issuer_name()),
        }
    }
}

/// Get the Common Name from an X509 name
fn get_cn(name: &X509NameRef) -> String {
    name.entries_by_nid(Nid::COMMONNAME)
        .next()
        .and_then(|entry| entry.data().as_utf8().ok())
        .map(|s| s.to_string())
        .unwrap_or_else(|| "<undef>".to_string())
}
