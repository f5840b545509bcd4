use thiserror::Error;

/// Wire-level failures of the chain codec.
///
/// Any of these aborts the current encode/decode call; no partial request is
/// ever returned. Retrying the whole exchange is a caller decision.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("certificate chain too long: {count} certificates, limit {max}")]
    ChainTooLong { count: usize, max: usize },

    #[error("certificate too large: {len} bytes, limit {max}")]
    CertificateTooLarge { len: usize, max: usize },

    #[error("trailing bytes after certificate chain")]
    Trailing,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CodecError {
    /// True when the underlying stream ended before the advertised layout was
    /// complete (truncated transmission).
    #[must_use]
    pub fn is_truncation(&self) -> bool {
        matches!(self, Self::Io(e) if e.kind() == std::io::ErrorKind::UnexpectedEof)
    }
}
