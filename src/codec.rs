//! Binary wire codec for [`CertificateChainRequest`].
//!
//! Layout: `LE32(count)` || count * ( `LE32(len)` || len raw DER bytes ),
//! certificates in the exact order stored in the request. Order is fixed;
//! lengths are exact; no trailing bytes on the slice form.
//!
//! Encoding does not validate the request: an absent or empty chain writes a
//! zero count deterministically, and catching that earlier is the caller's
//! job via [`CertificateChainRequest::validate`]. Both operations are
//! single-pass and stateless; concurrent calls on independent streams need no
//! synchronization.

use std::io::{Read, Write};

use crate::errors::CodecError;
use crate::request::CertificateChainRequest;
use crate::types::{Certificate, MAX_CERT_DER_LEN, MAX_CHAIN_CERTS};

#[inline]
#[must_use]
pub const fn le32(x: u32) -> [u8; 4] {
    x.to_le_bytes()
}

fn read_le32<R: Read>(source: &mut R) -> Result<u32, CodecError> {
    let mut buf = [0u8; 4];
    source.read_exact(&mut buf)?;
    Ok(u32::from_le_bytes(buf))
}

/// Write the request's chain onto `sink`.
///
/// # Errors
///
/// Returns `CodecError` when the chain exceeds the wire caps or the sink
/// reports a write failure. Stream errors surface immediately; nothing is
/// retried.
pub fn encode_chain<W: Write>(
    request: &CertificateChainRequest,
    sink: &mut W,
) -> Result<(), CodecError> {
    let certs = request.certificates().unwrap_or(&[]);
    if certs.len() > MAX_CHAIN_CERTS {
        return Err(CodecError::ChainTooLong { count: certs.len(), max: MAX_CHAIN_CERTS });
    }
    let count = u32::try_from(certs.len())
        .map_err(|_| CodecError::ChainTooLong { count: certs.len(), max: MAX_CHAIN_CERTS })?;
    sink.write_all(&le32(count))?;
    for cert in certs {
        if cert.len() > MAX_CERT_DER_LEN {
            return Err(CodecError::CertificateTooLarge { len: cert.len(), max: MAX_CERT_DER_LEN });
        }
        let len = u32::try_from(cert.len())
            .map_err(|_| CodecError::CertificateTooLarge { len: cert.len(), max: MAX_CERT_DER_LEN })?;
        sink.write_all(&le32(len))?;
        sink.write_all(cert.as_der())?;
    }
    Ok(())
}

/// Read one chain request from `source`.
///
/// A zero count decodes to a present-but-empty chain; "absent" is a
/// construction-side state only and is not representable on the wire.
///
/// # Errors
///
/// Returns `CodecError` on truncation, short read, or a count/length beyond
/// the wire caps. Caps are checked before allocating, so a hostile header
/// cannot force an oversized buffer. No partial request is ever returned.
pub fn decode_chain<R: Read>(source: &mut R) -> Result<CertificateChainRequest, CodecError> {
    let count = read_le32(source)? as usize;
    if count > MAX_CHAIN_CERTS {
        return Err(CodecError::ChainTooLong { count, max: MAX_CHAIN_CERTS });
    }
    let mut certs = Vec::with_capacity(count);
    for _ in 0..count {
        let len = read_le32(source)? as usize;
        if len > MAX_CERT_DER_LEN {
            return Err(CodecError::CertificateTooLarge { len, max: MAX_CERT_DER_LEN });
        }
        let mut der = vec![0u8; len];
        source.read_exact(&mut der)?;
        certs.push(Certificate::from_der(der));
    }
    Ok(CertificateChainRequest::new(Some(certs)))
}

/// Canonical chain encoding into an owned buffer.
///
/// # Errors
///
/// Returns `CodecError` when the chain exceeds the wire caps.
pub fn encode_chain_to_vec(request: &CertificateChainRequest) -> Result<Vec<u8>, CodecError> {
    let certs = request.certificates().unwrap_or(&[]);
    let mut out = Vec::with_capacity(4 + certs.iter().map(|c| 4 + c.len()).sum::<usize>());
    encode_chain(request, &mut out)?;
    Ok(out)
}

/// Decode a chain request from a complete buffer.
///
/// # Errors
///
/// As [`decode_chain`], plus `CodecError::Trailing` when bytes remain after
/// the advertised layout.
pub fn decode_chain_from_slice(mut b: &[u8]) -> Result<CertificateChainRequest, CodecError> {
    let request = decode_chain(&mut b)?;
    if !b.is_empty() {
        return Err(CodecError::Trailing);
    }
    Ok(request)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_absent_chains_encode_as_zero_count() {
        let absent = CertificateChainRequest::new(None);
        let empty = CertificateChainRequest::new(Some(Vec::new()));
        assert_eq!(encode_chain_to_vec(&absent).unwrap(), le32(0));
        assert_eq!(encode_chain_to_vec(&empty).unwrap(), le32(0));
    }

    #[test]
    fn zero_count_decodes_to_present_empty_chain() {
        let decoded = decode_chain_from_slice(&le32(0)).unwrap();
        assert_eq!(decoded.certificates(), Some(&[][..]));
    }

    #[test]
    fn oversized_count_is_rejected_before_allocation() {
        let bytes = le32(u32::MAX);
        let err = decode_chain_from_slice(&bytes).unwrap_err();
        assert!(matches!(err, CodecError::ChainTooLong { .. }));
    }

    #[test]
    fn oversized_length_prefix_is_rejected() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&le32(1));
        bytes.extend_from_slice(&le32(u32::MAX));
        let err = decode_chain_from_slice(&bytes).unwrap_err();
        assert!(matches!(err, CodecError::CertificateTooLarge { .. }));
    }

    #[test]
    fn trailing_bytes_are_rejected_on_slice_decode() {
        let request = CertificateChainRequest::from_chain(vec![Certificate::from_der(vec![7u8; 3])]);
        let mut bytes = encode_chain_to_vec(&request).unwrap();
        bytes.push(0xFF);
        let err = decode_chain_from_slice(&bytes).unwrap_err();
        assert!(matches!(err, CodecError::Trailing));
    }
}
