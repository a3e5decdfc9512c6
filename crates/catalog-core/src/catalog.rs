//! Catalog Store
//!
//! Holds the full record list. Records are never mutated after load except by
//! the single hydration pass.

use crate::error::{CatalogError, Result};
use crate::hydrate::{HydrationOutcome, ImageHydrator};
use crate::record::VehicleRecord;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    records: Vec<VehicleRecord>,
    hydrated: bool,
}

impl Catalog {
    pub fn new(records: Vec<VehicleRecord>) -> Self {
        Self { records, hydrated: false }
    }

    /// Parse a JSON array of records, skipping malformed entries.
    ///
    /// An array with no usable record is reported as
    /// [`CatalogError::MissingCatalog`].
    pub fn from_json(json: &str) -> Result<Self> {
        let records = parse_records(json)?;
        if records.is_empty() {
            return Err(CatalogError::MissingCatalog);
        }
        Ok(Self::new(records))
    }

    pub fn records(&self) -> &[VehicleRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn is_hydrated(&self) -> bool {
        self.hydrated
    }

    /// Run the hydration hook once.
    ///
    /// The hook works on a copy; only the `image` field is taken back, and only
    /// when the hook succeeded without changing the number of records. Later
    /// calls return [`HydrationOutcome::AlreadyHydrated`] whatever the first
    /// outcome was.
    pub async fn hydrate(&mut self, hydrator: Option<&dyn ImageHydrator>) -> HydrationOutcome {
        if self.is_hydrated() {
            return HydrationOutcome::AlreadyHydrated;
        }
        self.hydrated = true;

        let Some(hydrator) = hydrator else {
            log::debug!("[Catalog] no image hydrator installed");
            return HydrationOutcome::Skipped;
        };
        if self.records.is_empty() {
            return HydrationOutcome::Skipped;
        }

        let mut working = self.records.clone();
        match hydrator.hydrate(&mut working).await {
            Ok(()) if working.len() == self.records.len() => {
                for (record, hydrated) in self.records.iter_mut().zip(working) {
                    record.image = hydrated.image;
                }
                log::info!("[Catalog] hydrated images for {} records", self.records.len());
                HydrationOutcome::Hydrated
            }
            Ok(()) => {
                let reason = format!(
                    "hook returned {} records, expected {}",
                    working.len(),
                    self.records.len()
                );
                log::warn!("[Catalog] image fallback active: {}", reason);
                HydrationOutcome::Failed(reason)
            }
            Err(e) => {
                log::warn!("[Catalog] image fallback active: {}", e);
                HydrationOutcome::Failed(e.to_string())
            }
        }
    }
}

/// Decode a JSON array element by element.
///
/// Elements that are not valid records are logged and dropped so one bad
/// entry does not hide the rest. Input that is not an array is an error.
pub fn parse_records(json: &str) -> Result<Vec<VehicleRecord>> {
    let values: Vec<serde_json::Value> = serde_json::from_str(json)?;
    let total = values.len();
    let records: Vec<VehicleRecord> = values
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value(value) {
            Ok(record) => Some(record),
            Err(e) => {
                log::warn!("[Catalog] skipping record {}: {}", index, e);
                None
            }
        })
        .collect();
    if records.len() < total {
        log::warn!("[Catalog] kept {} of {} records", records.len(), total);
    }
    Ok(records)
}
