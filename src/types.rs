//! Opaque certificate value and wire size caps.

/// Maximum accepted DER size for a single certificate (deployment-defined;
/// enforced by the codec before allocation).
pub const MAX_CERT_DER_LEN: usize = 1_048_576; // 1 MiB
/// Maximum number of certificates in one chain request.
pub const MAX_CHAIN_CERTS: usize = 32;

/// A binary-encoded public-key certificate (e.g. X.509 DER).
///
/// The internal structure is never interpreted here; the downstream
/// authenticator owns all trust checks. Equality and hashing are structural
/// over the raw bytes.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Certificate(Vec<u8>);

impl Certificate {
    /// Wrap raw DER bytes as presented by the intermediary.
    #[must_use]
    pub fn from_der(der: impl Into<Vec<u8>>) -> Self {
        Self(der.into())
    }

    /// The exact bytes this certificate was constructed from.
    #[must_use]
    pub fn as_der(&self) -> &[u8] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<u8>> for Certificate {
    fn from(der: Vec<u8>) -> Self {
        Self(der)
    }
}

impl AsRef<[u8]> for Certificate {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
