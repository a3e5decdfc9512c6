//! Global UI State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The catalog
//! itself lives in the browser (see `context`); this store only holds what
//! the components draw.

use catalog_core::{CatalogConfig, DetailView, PageFrame, Presenter};
use leptos::prelude::*;
use reactive_stores::Store;

use crate::bindings;

/// Section the card grid lives in, scrolled into view on page changes
pub const CARS_SECTION_ID: &str = "cars";
/// Space left above the section for the fixed navbar
const CARS_SECTION_OFFSET: i32 = 100;

#[derive(Clone, Debug, Default, Store)]
pub struct UiState {
    /// Page currently on screen
    pub frame: PageFrame,
    /// Record shown in the detail modal
    pub detail: Option<DetailView>,
    /// Modal has the `open` class (drives the CSS transition)
    pub modal_open: bool,
    /// Modal is displayed at all; lags `modal_open` by the closing transition
    pub modal_visible: bool,
    pub menu_open: bool,
    pub mobile_search_open: bool,
    /// True until the catalog is loaded and hydrated
    pub loading: bool,
    pub config: CatalogConfig,
}

impl UiState {
    pub fn new(config: CatalogConfig) -> Self {
        Self {
            loading: true,
            config,
            ..Default::default()
        }
    }
}

pub type UiStore = Store<UiState>;

/// Get the UI store from context
pub fn use_ui_store() -> UiStore {
    expect_context::<UiStore>()
}

/// Writes every frame the browser emits into the store.
#[derive(Clone, Copy)]
pub struct StorePresenter {
    store: UiStore,
}

impl StorePresenter {
    pub fn new(store: UiStore) -> Self {
        Self { store }
    }
}

impl Presenter for StorePresenter {
    fn present(&mut self, frame: PageFrame) {
        let scroll = frame.current_page > 1;
        self.store.frame().set(frame);
        if scroll {
            bindings::scroll_to_section(CARS_SECTION_ID, CARS_SECTION_OFFSET);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_starts_loading_with_empty_frame() {
        let state = UiState::new(CatalogConfig::default());
        assert!(state.loading);
        assert!(!state.modal_open);
        assert_eq!(state.frame.total_pages, 1);
        assert!(state.frame.items.is_empty());
    }
}
