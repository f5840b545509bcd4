#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]

//! Delegated PKI authentication core.
//!
//! A trusted intermediary (typically a TLS-terminating proxy) presents the
//! certificate chain of an end user to the platform, to be exchanged for a
//! short-lived access credential. This crate owns the request side of that
//! exchange: the [`CertificateChainRequest`] value entity with its structural
//! validation rules, and the binary wire codec that carries it between peers.
//!
//! Trust decisions are explicitly out of scope. Certificates are opaque DER
//! blobs here; CA chain building, signature and expiry checks, and credential
//! issuance all happen behind the [`RequestGateway`] seam.

// Core modules
pub mod codec;
pub mod errors;
pub mod feature;
pub mod gateway;
pub mod request;
pub mod stats;
pub mod types;

// Re-export commonly used types and functions
pub use codec::{decode_chain, decode_chain_from_slice, encode_chain, encode_chain_to_vec};
pub use errors::CodecError;
pub use feature::{DelegatedAuthFeature, FeatureReport};
pub use gateway::RequestGateway;
pub use request::{CertificateChainRequest, ValidationError};
pub use stats::DataCounts;
pub use types::{Certificate, MAX_CERT_DER_LEN, MAX_CHAIN_CERTS};

// Version and protocol constants
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const WIRE_VERSION: u32 = 1;
