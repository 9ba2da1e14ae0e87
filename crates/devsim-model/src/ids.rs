#![deny(unsafe_code)]

use std::fmt;

use devsim_codec::is_digits;
use serde::{Deserialize, Serialize};

use crate::ModelError;

/// Number of digits in a type allocation code.
pub const TYPE_ALLOCATION_CODE_LEN: usize = 8;

/// The 8-digit IMEI prefix identifying a device model.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TypeAllocationCode(String);

impl TypeAllocationCode {
    /// Code used when the catalog has no codes at all.
    pub const FALLBACK: &'static str = "12345678";

    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        let trimmed = value.trim();
        if !is_digits(trimmed, TYPE_ALLOCATION_CODE_LEN) {
            return Err(ModelError::InvalidTypeAllocationCode(value));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn fallback() -> Self {
        Self(Self::FALLBACK.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric digit values, most significant first.
    pub fn digits(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.bytes().map(|b| b - b'0')
    }
}

impl TryFrom<String> for TypeAllocationCode {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for TypeAllocationCode {
    type Error = ModelError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TypeAllocationCode> for String {
    fn from(value: TypeAllocationCode) -> Self {
        value.0
    }
}

impl fmt::Display for TypeAllocationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_eight_digits() {
        let tac = TypeAllocationCode::new("35050556").unwrap();
        assert_eq!(tac.as_str(), "35050556");
        assert_eq!(tac.digits().collect::<Vec<_>>(), vec![3, 5, 0, 5, 0, 5, 5, 6]);
    }

    #[test]
    fn rejects_wrong_length_and_letters() {
        assert!(TypeAllocationCode::new("3505055").is_err());
        assert!(TypeAllocationCode::new("350505561").is_err());
        assert!(TypeAllocationCode::new("3505A556").is_err());
    }

    #[test]
    fn fallback_is_valid() {
        let fallback = TypeAllocationCode::fallback();
        assert_eq!(
            TypeAllocationCode::new(fallback.as_str()).unwrap(),
            fallback
        );
    }
}
