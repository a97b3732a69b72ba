use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProteoscopeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Spreadsheet error: {0}")]
    Spreadsheet(String),

    #[error("Worksheet not found: {0}")]
    SheetNotFound(String),

    #[error("Required column not found: {0}")]
    ColumnNotFound(String),

    #[error("Gene not found: {0}")]
    GeneNotFound(String),

    #[error("Gene symbol is ambiguous: {0}")]
    AmbiguousGene(String),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Publications unavailable: {0}")]
    PublicationsUnavailable(String),

    #[error("Security error: {0}")]
    Security(String),

    #[error("Template error: {0}")]
    Template(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, ProteoscopeError>;
