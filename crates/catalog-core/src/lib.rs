//! Catalog Core
//!
//! Layered the same way as the UI expects to consume it:
//! - record / catalog: data and the one-shot hydration step
//! - filter / pagination: pure functions over the active view
//! - state / browser: the search + navigation state machine and frame emission
//! - projection: display-only views for cards and the detail modal
//!
//! This crate has NO web dependencies so it can be tested natively.

pub mod browser;
pub mod catalog;
pub mod config;
pub mod error;
pub mod filter;
pub mod hydrate;
pub mod pagination;
pub mod projection;
pub mod record;
pub mod state;

pub use browser::{CatalogBrowser, Presenter};
pub use catalog::{parse_records, Catalog};
pub use config::CatalogConfig;
pub use error::{CatalogError, Result};
pub use filter::{filter, matches};
pub use hydrate::{HydrationOutcome, ImageHydrator};
pub use pagination::{
    next, page, prev, total_pages, Page, PaginationState, DEFAULT_PAGE_SIZE,
    PAGE_SIZE,
};
pub use projection::{CardView, DetailView};
pub use record::{VehicleRecord, DEFAULT_CATEGORY};
pub use state::{CatalogState, PageFrame, ViewStatus};
