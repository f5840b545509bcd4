//! Peripheral feature-flag reporting.

/// Capability report surfaced to cluster-info consumers.
pub trait FeatureReport {
    fn name(&self) -> &'static str;
    fn available(&self) -> bool;
    fn enabled(&self) -> bool;
}

/// Delegated authentication ships unconditionally: always available, always
/// enabled, no configurable state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DelegatedAuthFeature;

impl FeatureReport for DelegatedAuthFeature {
    fn name(&self) -> &'static str {
        "delegated_authentication"
    }

    fn available(&self) -> bool {
        true
    }

    fn enabled(&self) -> bool {
        true
    }
}
