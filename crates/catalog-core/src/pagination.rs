//! Paginator
//!
//! Fixed-size, 1-based page slices over the active view. The slicing
//! functions never clamp; range checks belong to the navigation helpers.

use std::num::NonZeroUsize;

/// Cards per page.
pub const PAGE_SIZE: usize = 6;

/// [`PAGE_SIZE`] as a page size the navigation state accepts.
pub const DEFAULT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(PAGE_SIZE) {
    Some(size) => size,
    None => panic!("PAGE_SIZE must be non-zero"),
};

/// One page of the active view.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_pages: usize,
}

/// Number of pages for `len` items, never less than 1.
///
/// A zero page size holds nothing, so it also reports a single page.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    len.div_ceil(page_size).max(1)
}

/// Slice page `page_number` out of `view`.
///
/// A page past the end yields no items, including page numbers so large
/// that the slice offset does not fit in a `usize`.
pub fn page<T: Clone>(view: &[T], page_number: usize, page_size: usize) -> Page<T> {
    let items = page_number
        .saturating_sub(1)
        .checked_mul(page_size)
        .filter(|start| *start < view.len())
        .map(|start| {
            let end = start.saturating_add(page_size).min(view.len());
            view[start..end].to_vec()
        })
        .unwrap_or_default();

    Page {
        items,
        total_pages: total_pages(view.len(), page_size),
    }
}

/// Advance one page unless already on the last one.
pub fn next(current_page: usize, total_pages: usize) -> usize {
    if current_page < total_pages {
        current_page + 1
    } else {
        current_page
    }
}

/// Go back one page unless already on the first one.
pub fn prev(current_page: usize) -> usize {
    if current_page > 1 {
        current_page - 1
    } else {
        current_page
    }
}

/// Navigation position over the active view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    pub current_page: usize,
    pub page_size: NonZeroUsize,
    pub total_pages: usize,
}

impl PaginationState {
    pub fn new(view_len: usize, page_size: NonZeroUsize) -> Self {
        Self {
            current_page: 1,
            page_size,
            total_pages: total_pages(view_len, page_size.get()),
        }
    }

    /// Recompute for a new view and go back to page 1.
    pub fn reset(&mut self, view_len: usize) {
        self.current_page = 1;
        self.total_pages = total_pages(view_len, self.page_size.get());
    }

    /// Move forward; returns false when already on the last page.
    pub fn advance(&mut self) -> bool {
        let target = next(self.current_page, self.total_pages);
        let moved = target != self.current_page;
        self.current_page = target;
        moved
    }

    /// Move back; returns false when already on page 1.
    pub fn retreat(&mut self) -> bool {
        let target = prev(self.current_page);
        let moved = target != self.current_page;
        self.current_page = target;
        moved
    }
}
