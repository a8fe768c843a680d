use thiserror::Error;

use crate::domain::product::ProductId;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),
    #[error("unknown product `{0}`")]
    UnknownProduct(ProductId),
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("configuration failure: {0}")]
    Configuration(String),
}

impl ApplicationError {
    /// Stable machine-readable class used in command outcome payloads.
    pub fn error_class(&self) -> &'static str {
        match self {
            Self::Domain(DomainError::InvalidCatalog(_)) => "catalog_validation",
            Self::Domain(_) => "domain",
            Self::Configuration(_) => "config_validation",
        }
    }

    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Domain(DomainError::InvalidCatalog(_)) => {
                "The product catalog failed validation and the shop cannot open."
            }
            Self::Domain(_) => "The request could not be processed. Check inputs and try again.",
            Self::Configuration(_) => {
                "The configuration is invalid. Check kitbag.toml and KITBAG_* variables."
            }
        }
    }
}
