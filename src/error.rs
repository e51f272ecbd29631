use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConvertError {
    /// The category identifier is not registered in the catalog.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// The unit identifier does not belong to the given category.
    #[error("Unknown unit '{unit}' in category '{category}'")]
    UnknownUnit { category: String, unit: String },

    /// Raw input is empty or does not parse as a finite number
    /// (strict mode only).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Catalog data violates one of its load‑time invariants.
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    /// A configuration value could not be parsed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, ConvertError>;
