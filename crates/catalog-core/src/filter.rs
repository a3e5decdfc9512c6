//! Filter Engine
//!
//! Case-insensitive substring search over make and model.

use crate::record::VehicleRecord;

/// Check whether a record matches an already lower-cased term.
pub fn matches(record: &VehicleRecord, term: &str) -> bool {
    record.make.to_lowercase().contains(term) || record.model.to_lowercase().contains(term)
}

/// Derive the active view for `term`.
///
/// An empty term returns the whole catalog in its original order.
pub fn filter(catalog: &[VehicleRecord], term: &str) -> Vec<VehicleRecord> {
    let term = term.to_lowercase();
    if term.is_empty() {
        return catalog.to_vec();
    }

    catalog
        .iter()
        .filter(|record| matches(record, &term))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn car(make: &str, model: &str) -> VehicleRecord {
        VehicleRecord {
            make: make.to_string(),
            model: model.to_string(),
            ..Default::default()
        }
    }

    fn sample() -> Vec<VehicleRecord> {
        vec![
            car("Honda", "Civic"),
            car("Toyota", "Corolla"),
            car("Honda", "Accord"),
            car("Chevrolet", "Onix"),
        ]
    }

    #[test]
    fn test_empty_term_returns_catalog() {
        let catalog = sample();
        assert_eq!(filter(&catalog, ""), catalog);
    }

    #[test]
    fn test_matches_model() {
        let catalog = vec![car("Honda", "Civic"), car("Honda", "Accord")];
        let result = filter(&catalog, "civic");
        assert_eq!(result, vec![car("Honda", "Civic")]);
    }

    #[test]
    fn test_matches_make_substring() {
        let result = filter(&sample(), "hon");
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|r| r.make == "Honda"));
    }

    #[test]
    fn test_case_insensitive() {
        let catalog = sample();
        assert_eq!(filter(&catalog, "HONDA"), filter(&catalog, "honda"));
        assert_eq!(filter(&catalog, "CoRoLLa").len(), 1);
    }

    #[test]
    fn test_preserves_relative_order() {
        let catalog = sample();
        let result = filter(&catalog, "o");
        let positions: Vec<usize> = result
            .iter()
            .map(|r| catalog.iter().position(|c| c == r).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_no_match_is_empty() {
        assert!(filter(&sample(), "ferrari").is_empty());
    }

    #[test]
    fn test_other_fields_are_ignored() {
        let mut record = car("Fiat", "Uno");
        record.engine = "Turbo".to_string();
        assert!(!matches(&record, "turbo"));
    }
}
