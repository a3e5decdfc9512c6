//! Application State
//!
//! The catalog, the active view and the pagination position, owned together
//! so the search/navigation rules can be exercised without a DOM.

use std::num::NonZeroUsize;

use crate::catalog::Catalog;
use crate::filter::filter;
use crate::pagination::{page, PaginationState};
use crate::projection::DetailView;
use crate::record::VehicleRecord;

/// What the current page should show besides the cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewStatus {
    #[default]
    Ready,
    /// The search term matched nothing.
    NoResults,
    /// No records were available at startup.
    MissingCatalog,
}

/// Everything the presentation layer needs to draw one page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageFrame {
    pub items: Vec<VehicleRecord>,
    pub current_page: usize,
    pub total_pages: usize,
    pub status: ViewStatus,
}

impl PageFrame {
    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub fn label(&self) -> String {
        format!("Page {} of {}", self.current_page, self.total_pages)
    }
}

impl Default for PageFrame {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            current_page: 1,
            total_pages: 1,
            status: ViewStatus::Ready,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CatalogState {
    catalog: Catalog,
    view: Vec<VehicleRecord>,
    pagination: PaginationState,
}

impl CatalogState {
    pub fn new(catalog: Catalog, page_size: NonZeroUsize) -> Self {
        let view = catalog.records().to_vec();
        let pagination = PaginationState::new(view.len(), page_size);
        Self {
            catalog,
            view,
            pagination,
        }
    }

    pub fn view(&self) -> &[VehicleRecord] {
        &self.view
    }

    pub fn current_page(&self) -> usize {
        self.pagination.current_page
    }

    pub fn total_pages(&self) -> usize {
        self.pagination.total_pages
    }

    /// Replace the active view for `term` and return to page 1.
    pub fn search(&mut self, term: &str) {
        self.view = filter(self.catalog.records(), term);
        self.pagination.reset(self.view.len());
    }

    /// Returns false when already on the last page.
    pub fn next_page(&mut self) -> bool {
        self.pagination.advance()
    }

    /// Returns false when already on page 1.
    pub fn prev_page(&mut self) -> bool {
        self.pagination.retreat()
    }

    pub fn status(&self) -> ViewStatus {
        if self.catalog.is_empty() {
            ViewStatus::MissingCatalog
        } else if self.view.is_empty() {
            ViewStatus::NoResults
        } else {
            ViewStatus::Ready
        }
    }

    pub fn frame(&self) -> PageFrame {
        let current = page(
            &self.view,
            self.pagination.current_page,
            self.pagination.page_size.get(),
        );
        PageFrame {
            items: current.items,
            current_page: self.pagination.current_page,
            total_pages: current.total_pages,
            status: self.status(),
        }
    }

    /// Detail projection for the `index`-th card of the current page.
    pub fn detail(&self, index: usize) -> Option<DetailView> {
        let page_size = self.pagination.page_size.get();
        if index >= page_size {
            return None;
        }
        let start = (self.pagination.current_page - 1).checked_mul(page_size)?;
        self.view.get(start.checked_add(index)?).map(DetailView::from)
    }
}
