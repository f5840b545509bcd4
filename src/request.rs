//! The delegated-authentication request entity and its validation rules.

use thiserror::Error;

use crate::types::Certificate;

/// Structural defects in a [`CertificateChainRequest`].
///
/// Reported as data from [`CertificateChainRequest::validate`], never as a
/// panic or propagated error; the caller inspects the result and aborts the
/// send path on any non-empty outcome. The display strings are part of the
/// client-visible contract and must stay stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("certificates must not be null")]
    MissingCertificates,

    #[error("certificates array must not be empty")]
    EmptyCertificates,
}

/// A certificate chain presented by a trusted intermediary on behalf of an
/// end user, to be exchanged for a short-lived access credential.
///
/// Immutable value entity; one instance per delegation attempt. Construction
/// always succeeds, even with an absent or empty chain, so that a defective
/// request can be inspected and reported before anything is trusted
/// downstream. Equality and hashing are structural, element-wise, and
/// order-sensitive over the certificate sequence.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CertificateChainRequest {
    certificates: Option<Vec<Certificate>>,
}

impl CertificateChainRequest {
    /// Store exactly what was given. Absence is modeled explicitly with
    /// `None` rather than a sentinel value.
    #[must_use]
    pub const fn new(certificates: Option<Vec<Certificate>>) -> Self {
        Self { certificates }
    }

    /// Convenience constructor for a present chain.
    #[must_use]
    pub const fn from_chain(certificates: Vec<Certificate>) -> Self {
        Self::new(Some(certificates))
    }

    /// The stored sequence, in original order, or `None` when absent.
    #[must_use]
    pub fn certificates(&self) -> Option<&[Certificate]> {
        self.certificates.as_deref()
    }

    /// Structural validation.
    ///
    /// At most one error is produced per call: absence is checked before
    /// emptiness, and the two can never hold at once. An empty result means
    /// the request is well-formed and may be handed to the codec and the
    /// gateway.
    #[must_use]
    pub fn validate(&self) -> Vec<ValidationError> {
        match self.certificates.as_deref() {
            None => vec![ValidationError::MissingCertificates],
            Some([]) => vec![ValidationError::EmptyCertificates],
            Some(_) => Vec::new(),
        }
    }
}
