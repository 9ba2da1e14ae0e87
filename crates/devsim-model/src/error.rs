use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("type allocation code must be exactly 8 digits, got {0:?}")]
    InvalidTypeAllocationCode(String),
    #[error("region {region}: mobile country code must be exactly 3 digits, got {code:?}")]
    InvalidMobileCountryCode { region: String, code: String },
    #[error("region {region}, carrier {carrier}: network code must be 2 or 3 digits, got {code:?}")]
    InvalidNetworkCode {
        region: String,
        carrier: String,
        code: String,
    },
    #[error("region name must not be empty")]
    EmptyRegionName,
    #[error("brand name must not be empty")]
    EmptyBrandName,
}
