//! Core Errors

use thiserror::Error;

/// Errors raised while loading or preparing the catalog.
///
/// None of these are fatal to the UI: each one maps to an empty state or a
/// logged warning.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("car database not found")]
    MissingCatalog,

    #[error("invalid vehicle record: {0}")]
    InvalidRecord(#[from] serde_json::Error),

    #[error("image hydration failed: {0}")]
    Hydration(String),

    #[error("config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
