//! Seam to the trust-verification and credential-issuance subsystem.

use crate::request::CertificateChainRequest;

/// Sole consumer of a validated, decoded [`CertificateChainRequest`].
///
/// Implementations verify the chain cryptographically (CA path, signatures,
/// expiry, revocation) and mint the short-lived credential. None of that
/// lives in this crate; callers hand over a request only after
/// [`CertificateChainRequest::validate`] came back empty.
pub trait RequestGateway {
    /// Short-lived credential issued on success; format is owned downstream.
    type Credential;
    /// Trust-verification failure.
    type Error;

    fn exchange(&self, request: CertificateChainRequest) -> Result<Self::Credential, Self::Error>;
}
