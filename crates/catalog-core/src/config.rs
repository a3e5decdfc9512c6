//! Catalog Configuration
//!
//! Display constants the page may override through `window.catalogConfig`.

use std::num::NonZeroUsize;

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};
use crate::pagination::PAGE_SIZE;
use crate::record::DEFAULT_CATEGORY;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub page_size: usize,
    pub default_category: String,
    /// Text rendered on the fallback image for broken card images
    pub placeholder_text: String,
    pub placeholder_base_url: String,
    pub missing_catalog_message: String,
    pub no_results_message: String,
    /// Delay before the modal is hidden, to let the close transition play
    pub closing_transition_ms: u32,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            page_size: PAGE_SIZE,
            default_category: DEFAULT_CATEGORY.to_string(),
            placeholder_text: "Indisponível".to_string(),
            placeholder_base_url: "https://via.placeholder.com/400x300".to_string(),
            missing_catalog_message: "Error: car database not found.".to_string(),
            no_results_message: "No cars found.".to_string(),
            closing_transition_ms: 300,
        }
    }
}

impl CatalogConfig {
    pub fn validate(&self) -> Result<()> {
        self.page_size().map(|_| ())
    }

    /// The configured page size; zero is rejected.
    pub fn page_size(&self) -> Result<NonZeroUsize> {
        NonZeroUsize::new(self.page_size)
            .ok_or_else(|| CatalogError::Config("page_size must be at least 1".to_string()))
    }

    /// URL of the image shown when a card image fails to load.
    pub fn placeholder_image_url(&self) -> String {
        format!(
            "{}?text={}",
            self.placeholder_base_url,
            utf8_percent_encode(&self.placeholder_text, NON_ALPHANUMERIC)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CatalogConfig::default();
        assert_eq!(config.page_size, 6);
        assert_eq!(config.default_category, "Premium");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: CatalogConfig = serde_json::from_str(r#"{"page_size": 9}"#).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.page_size().unwrap().get(), 9);
        assert_eq!(config.closing_transition_ms, 300);
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let config: CatalogConfig = serde_json::from_str(r#"{"page_size": 0}"#).unwrap();
        assert!(matches!(config.validate(), Err(CatalogError::Config(_))));
        assert!(matches!(config.page_size(), Err(CatalogError::Config(_))));
    }

    #[test]
    fn test_placeholder_url_is_encoded() {
        let config = CatalogConfig::default();
        assert_eq!(
            config.placeholder_image_url(),
            "https://via.placeholder.com/400x300?text=Indispon%C3%ADvel"
        );
    }
}
