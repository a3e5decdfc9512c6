//! Catalog Browser
//!
//! Drives [`CatalogState`] from UI events and hands a [`PageFrame`] to the
//! presentation layer after every effective state change.

use std::num::NonZeroUsize;

use crate::catalog::Catalog;
use crate::config::CatalogConfig;
use crate::error::Result;
use crate::projection::DetailView;
use crate::state::{CatalogState, PageFrame};

/// Receiver of rendered pages (the DOM layer in the app, a recorder in tests).
pub trait Presenter {
    fn present(&mut self, frame: PageFrame);
}

pub struct CatalogBrowser<P: Presenter> {
    state: CatalogState,
    page_size: NonZeroUsize,
    presenter: P,
}

impl<P: Presenter> CatalogBrowser<P> {
    /// Create a browser over an empty catalog; nothing is presented until
    /// [`CatalogBrowser::load`].
    ///
    /// Fails with [`crate::CatalogError::Config`] when the page size is zero.
    pub fn new(config: &CatalogConfig, presenter: P) -> Result<Self> {
        Ok(Self::with_page_size(config.page_size()?, presenter))
    }

    pub fn with_page_size(page_size: NonZeroUsize, presenter: P) -> Self {
        Self {
            state: CatalogState::new(Catalog::default(), page_size),
            page_size,
            presenter,
        }
    }

    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Install the (already hydrated) catalog and render page 1.
    pub fn load(&mut self, catalog: Catalog) {
        if catalog.is_empty() {
            log::warn!("[Browser] car database not found");
        } else {
            log::info!("[Browser] loaded {} records", catalog.len());
        }
        self.state = CatalogState::new(catalog, self.page_size);
        self.render();
    }

    pub fn search(&mut self, term: &str) {
        self.state.search(term);
        log::debug!(
            "[Browser] search {:?} -> {} results",
            term,
            self.state.view().len()
        );
        self.render();
    }

    pub fn next_page(&mut self) -> bool {
        let moved = self.state.next_page();
        if moved {
            self.render();
        }
        moved
    }

    pub fn prev_page(&mut self) -> bool {
        let moved = self.state.prev_page();
        if moved {
            self.render();
        }
        moved
    }

    /// Detail projection for a card of the current page. Does not re-render.
    pub fn show_details(&self, index: usize) -> Option<DetailView> {
        self.state.detail(index)
    }

    fn render(&mut self) {
        self.presenter.present(self.state.frame());
    }
}
