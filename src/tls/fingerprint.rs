//! Certificate fingerprinting
//!
//! A fingerprint is the SHA-256 digest of a certificate's DER encoding.
//! On the wire it travels as 64 lowercase hex characters, two per digest
//! byte in order, with no separators and no terminator.

use super::config::TlsError;
use openssl::hash::MessageDigest;
use openssl::x509::X509Ref;

/// Length in bytes of a SHA-256 certificate digest
pub const FINGERPRINT_LEN: usize = 32;

/// SHA-256 fingerprint of a certificate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fingerprint {
    bytes: [u8; FINGERPRINT_LEN],
}

impl Fingerprint {
    /// Compute the fingerprint of a certificate.
    ///
    /// Digests the certificate's DER encoding. The digest must succeed
    /// and produce exactly [`FINGERPRINT_LEN`] bytes; any other outcome
    /// is an error and nothing fingerprint-shaped is produced.
    pub fn from_cert(cert: &X509Ref) -> Result<Self, TlsError> {
        let digest = cert.digest(MessageDigest::sha256())?;
        Self::from_digest(&digest)
    }

    /// Compute the fingerprint of raw DER-encoded certificate bytes
    pub fn from_der(der: &[u8]) -> Result<Self, TlsError> {
        let digest = openssl::hash::hash(MessageDigest::sha256(), der)?;
        Self::from_digest(&digest)
    }

    fn from_digest(digest: &[u8]) -> Result<Self, TlsError> {
        let bytes: [u8; FINGERPRINT_LEN] =
            digest.try_into().map_err(|_| TlsError::DigestLength {
                len: digest.len(),
                expected: FINGERPRINT_LEN,
            })?;

        Ok(Fingerprint { bytes })
    }

    /// The raw digest bytes
    pub fn as_bytes(&self) -> &[u8; FINGERPRINT_LEN] {
        &self.bytes
    }

    /// Hex representation: 64 lowercase hex characters, byte `i` at
    /// string positions `2i` and `2i + 1`.
    pub fn to_hex(&self) -> String {
        hex::encode(self.bytes)
    }
}

impl std::fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tls::builtin_cert::BUILTIN_CERT;
    use openssl::x509::X509;

    #[test]
    fn test_hex_is_64_lowercase_chars() {
        let fp = Fingerprint::from_der(b"some certificate bytes").unwrap();
        let hex = fp.to_hex();

        assert_eq!(hex.len(), 2 * FINGERPRINT_LEN);
        assert!(hex
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn test_hex_round_trip() {
        let fp = Fingerprint::from_der(b"round trip").unwrap();
        let decoded = hex::decode(fp.to_hex()).unwrap();
        assert_eq!(decoded.as_slice(), fp.as_bytes());
    }

    #[test]
    fn test_deterministic() {
        let a = Fingerprint::from_der(b"fixed input").unwrap();
        let b = Fingerprint::from_der(b"fixed input").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.to_hex(), b.to_hex());
    }

    #[test]
    fn test_distinct_inputs_distinct_fingerprints() {
        let a = Fingerprint::from_der(b"cert A").unwrap();
        let b = Fingerprint::from_der(b"cert B").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_known_answer_empty_input() {
        // SHA-256 of the empty string
        let fp = Fingerprint::from_der(b"").unwrap();
        assert_eq!(
            fp.to_hex(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_from_cert_matches_from_der() {
        let cert = X509::from_pem(BUILTIN_CERT.as_bytes()).unwrap();
        let from_cert = Fingerprint::from_cert(&cert).unwrap();
        let from_der = Fingerprint::from_der(&cert.to_der().unwrap()).unwrap();
        assert_eq!(from_cert, from_der);
    }

    #[test]
    fn test_wrong_digest_length_rejected() {
        let err = Fingerprint::from_digest(&[0u8; 20]).unwrap_err();
        match err {
            TlsError::DigestLength { len, expected } => {
                assert_eq!(len, 20);
                assert_eq!(expected, FINGERPRINT_LEN);
            }
            other => panic!("expected DigestLength, got {:?}", other),
        }
    }
}
