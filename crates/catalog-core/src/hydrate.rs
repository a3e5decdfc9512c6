//! Image Hydration
//!
//! Best-effort enrichment of image URLs, performed once before the first render.

use async_trait::async_trait;

use crate::error::Result;
use crate::record::VehicleRecord;

/// Capability that resolves image URLs for a batch of records.
///
/// Implementations may rewrite `image` on any record, or leave everything
/// untouched. Returning an error means "keep the original data".
#[async_trait(?Send)]
pub trait ImageHydrator {
    async fn hydrate(&self, records: &mut Vec<VehicleRecord>) -> Result<()>;
}

/// What happened when the catalog asked for hydration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HydrationOutcome {
    Hydrated,
    /// The hook failed; original images are kept.
    Failed(String),
    /// Nothing to hydrate or no hook installed.
    Skipped,
    AlreadyHydrated,
}

impl HydrationOutcome {
    pub fn is_degraded(&self) -> bool {
        matches!(self, HydrationOutcome::Failed(_))
    }
}
