//! Application Context
//!
//! Shared handles provided via Leptos Context API. Every UI event goes
//! through here so the desktop and mobile controls behave identically.

use catalog_core::CatalogBrowser;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::bindings;
use crate::store::{StorePresenter, UiStateStoreFields, UiStore};

pub type Browser = CatalogBrowser<StorePresenter>;

#[derive(Clone, Copy)]
pub struct CatalogContext {
    pub store: UiStore,
    browser: StoredValue<Browser>,
}

impl CatalogContext {
    pub fn new(store: UiStore, browser: StoredValue<Browser>) -> Self {
        Self { store, browser }
    }

    /// Filter the catalog; both search inputs call this.
    pub fn search(&self, term: &str) {
        self.browser.update_value(|browser| browser.search(term));
    }

    pub fn next_page(&self) {
        self.browser.update_value(|browser| {
            browser.next_page();
        });
    }

    pub fn prev_page(&self) {
        self.browser.update_value(|browser| {
            browser.prev_page();
        });
    }

    /// Open the detail modal for the `index`-th card of the current page
    pub fn open_details(&self, index: usize) {
        let Some(detail) = self.browser.with_value(|browser| browser.show_details(index)) else {
            log::debug!("[Modal] no record at index {}", index);
            return;
        };
        self.store.detail().set(Some(detail));
        self.store.modal_visible().set(true);
        self.store.modal_open().set(true);
        bindings::set_body_scroll_locked(true);
    }

    /// Start the closing transition; the modal is hidden once it finishes
    pub fn close_details(&self) {
        if !self.store.modal_open().get_untracked() {
            return;
        }
        self.store.modal_open().set(false);
        bindings::set_body_scroll_locked(false);

        let store = self.store;
        let delay = store.config().with_untracked(|config| config.closing_transition_ms);
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            // Reopened during the transition
            if !store.modal_open().get_untracked() {
                store.modal_visible().set(false);
            }
        });
    }

    pub fn toggle_menu(&self) {
        self.store.menu_open().update(|open| *open = !*open);
        self.store.mobile_search_open().set(false);
    }

    /// Returns whether the mobile search box is now open
    pub fn toggle_mobile_search(&self) -> bool {
        self.store.mobile_search_open().update(|open| *open = !*open);
        self.store.menu_open().set(false);
        self.store.mobile_search_open().get_untracked()
    }

    /// Called on every window scroll, so only writes when something is open
    pub fn close_menus(&self) {
        if self.store.menu_open().get_untracked() {
            self.store.menu_open().set(false);
        }
        if self.store.mobile_search_open().get_untracked() {
            self.store.mobile_search_open().set(false);
        }
    }
}

/// Get the catalog context
pub fn use_catalog() -> CatalogContext {
    expect_context::<CatalogContext>()
}
