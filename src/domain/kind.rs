//! Provider / service kind discriminant

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::support::errors::DomainError;

/// The fixed discriminant shared by providers and services.
///
/// A provider is only ever assigned services of its own kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    Vet,
    Groomer,
    Sitter,
}

impl ProviderKind {
    pub const ALL: [ProviderKind; 3] = [Self::Vet, Self::Groomer, Self::Sitter];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Vet => "vet",
            Self::Groomer => "groomer",
            Self::Sitter => "sitter",
        }
    }

    /// Vets must be verified before they may act as providers.
    pub fn requires_verification(&self) -> bool {
        matches!(self, Self::Vet)
    }
}

impl FromStr for ProviderKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "vet" => Ok(Self::Vet),
            "groomer" => Ok(Self::Groomer),
            "sitter" => Ok(Self::Sitter),
            other => Err(DomainError::Validation(format!(
                "Unknown provider kind: {}",
                other
            ))),
        }
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Vet".parse::<ProviderKind>().unwrap(), ProviderKind::Vet);
        assert_eq!("SITTER".parse::<ProviderKind>().unwrap(), ProviderKind::Sitter);
    }

    #[test]
    fn unknown_kind_is_validation_error() {
        let err = "plumber".parse::<ProviderKind>().unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn only_vets_require_verification() {
        assert!(ProviderKind::Vet.requires_verification());
        assert!(!ProviderKind::Groomer.requires_verification());
        assert!(!ProviderKind::Sitter.requires_verification());
    }
}
