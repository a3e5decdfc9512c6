//! Display Projections
//!
//! Read-only views of a record for the card grid and the detail modal.

use crate::config::CatalogConfig;
use crate::record::VehicleRecord;

const EMPTY_FIELD: &str = "-";

fn or_dash(value: &str) -> String {
    if value.trim().is_empty() {
        EMPTY_FIELD.to_string()
    } else {
        value.to_string()
    }
}

fn first_word(value: &str) -> String {
    value.split_whitespace().next().unwrap_or_default().to_string()
}

/// Fields shown in the detail modal. Empty values become "-".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub image: String,
    pub make: String,
    pub model: String,
    pub engine: String,
    pub transmission: String,
    pub drive: String,
    pub city_mpg: String,
    pub fuel: String,
    pub year: String,
    pub price: String,
}

impl From<&VehicleRecord> for DetailView {
    fn from(record: &VehicleRecord) -> Self {
        Self {
            image: record.image.clone(),
            make: or_dash(&record.make),
            model: or_dash(&record.model),
            engine: or_dash(&record.engine),
            transmission: or_dash(&record.transmission),
            drive: or_dash(&record.drive),
            city_mpg: or_dash(&record.city_mpg),
            fuel: or_dash(&record.fuel),
            year: or_dash(&record.year),
            price: or_dash(&record.price),
        }
    }
}

/// Summary shown on a catalog card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub image: String,
    pub fallback_image: String,
    pub category: String,
    pub make: String,
    pub model: String,
    pub year: String,
    /// First word of the engine description, e.g. "2.0L"
    pub engine: String,
    /// First word of the transmission description
    pub transmission: String,
    pub price: String,
}

impl CardView {
    pub fn new(record: &VehicleRecord, config: &CatalogConfig) -> Self {
        Self {
            image: record.image.clone(),
            fallback_image: config.placeholder_image_url(),
            category: record.category_or(&config.default_category).to_string(),
            make: record.make.clone(),
            model: record.model.clone(),
            year: record.year.clone(),
            engine: first_word(&record.engine),
            transmission: first_word(&record.transmission),
            price: record.price.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn civic() -> VehicleRecord {
        VehicleRecord {
            make: "Honda".into(),
            model: "Civic".into(),
            year: "2021".into(),
            engine: "2.0L I4 gas".into(),
            transmission: "CVT automatic".into(),
            drive: String::new(),
            fuel: "gas".into(),
            city_mpg: "31".into(),
            price: "$22,000".into(),
            image: "civic.jpg".into(),
            class: None,
        }
    }

    #[test]
    fn test_detail_substitutes_dash_for_empty() {
        let detail = DetailView::from(&civic());
        assert_eq!(detail.drive, "-");
        assert_eq!(detail.engine, "2.0L I4 gas");
        assert_eq!(detail.image, "civic.jpg");
    }

    #[test]
    fn test_card_summary() {
        let config = CatalogConfig::default();
        let card = CardView::new(&civic(), &config);
        assert_eq!(card.engine, "2.0L");
        assert_eq!(card.transmission, "CVT");
        assert_eq!(card.category, "Premium");
        assert!(card.fallback_image.ends_with("Indispon%C3%ADvel"));
    }

    #[test]
    fn test_card_uses_configured_default_category() {
        let config = CatalogConfig {
            default_category: "Standard".into(),
            ..Default::default()
        };
        let mut record = civic();
        assert_eq!(CardView::new(&record, &config).category, "Standard");

        record.class = Some("Sedan".into());
        assert_eq!(CardView::new(&record, &config).category, "Sedan");
    }
}
