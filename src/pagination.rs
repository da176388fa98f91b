//! Page arithmetic shared by every paginated list view.
//!
//! [`PageState`] owns the `(total_items, page_size, current_page)` triple and
//! keeps `current_page` inside `1..=total_pages()` at all times. Views filter
//! their collection in memory, build a state from the filtered length and the
//! requested page, and cut the visible rows with [`PageState::slice`].

use std::num::NonZeroUsize;
use std::ops::Range;

use serde::Serialize;

/// Number of rows shown per page in the admin and flight list views.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 5;

/// Pagination state for a single list view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageState {
    total_items: usize,
    page_size: NonZeroUsize,
    current_page: usize,
}

impl PageState {
    /// Builds a state, clamping `current_page` into `1..=total_pages()`.
    ///
    /// A stale or hand-edited page number (for example `page=0` or a page that
    /// vanished after a deletion) lands on the nearest existing page instead of
    /// rendering an empty list.
    pub fn new(total_items: usize, page_size: NonZeroUsize, current_page: usize) -> Self {
        let mut state = Self {
            total_items,
            page_size,
            current_page: 1,
        };
        state.current_page = current_page.clamp(1, state.total_pages());
        state
    }

    /// State for the list views that use [`DEFAULT_ITEMS_PER_PAGE`].
    pub fn with_default_size(total_items: usize, current_page: usize) -> Self {
        Self::new(total_items, default_page_size(), current_page)
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn page_size(&self) -> usize {
        self.page_size.get()
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// `max(1, ceil(total_items / page_size))`.
    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.page_size.get()).max(1)
    }

    /// Every page index from 1 through [`Self::total_pages`], in order.
    pub fn visible_pages(&self) -> Vec<usize> {
        (1..=self.total_pages()).collect()
    }

    /// Whether a page selector should be shown at all.
    pub fn has_controls(&self) -> bool {
        self.total_pages() > 1
    }

    /// Half-open `[start, end)` index range of the current page.
    ///
    /// Both ends are capped at `total_items`, so the range can index the
    /// filtered collection directly.
    pub fn slice_bounds(&self) -> Range<usize> {
        let size = self.page_size.get();
        let start = (self.current_page - 1)
            .saturating_mul(size)
            .min(self.total_items);
        let end = self.current_page.saturating_mul(size).min(self.total_items);
        start..end
    }

    /// Borrows the rows of the current page out of the filtered collection.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let Range { start, end } = self.slice_bounds();
        let end = end.min(items.len());
        &items[start.min(end)..end]
    }

    /// Moves to page `page` if it exists; out-of-range targets are ignored.
    ///
    /// Returns `true` when the current page changed.
    pub fn go_to_page(&mut self, page: usize) -> bool {
        if page == 0 || page > self.total_pages() || page == self.current_page {
            return false;
        }
        self.current_page = page;
        true
    }

    /// Replaces the collection size, pulling the current page back onto the
    /// last page when the collection shrank below it.
    pub fn set_total_items(&mut self, total_items: usize) {
        self.total_items = total_items;
        self.current_page = self.current_page.min(self.total_pages());
    }

    /// Returns to the first page. Used whenever the filter changes.
    pub fn reset(&mut self) {
        self.current_page = 1;
    }
}

fn default_page_size() -> NonZeroUsize {
    NonZeroUsize::new(DEFAULT_ITEMS_PER_PAGE).unwrap_or(NonZeroUsize::MIN)
}

/// A page of rows together with the page selector data for templates.
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    /// Page buttons to render; empty when the list fits on a single page.
    pub pages: Vec<usize>,
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

impl<T: Clone> Paginated<T> {
    /// Cuts the current page out of the full filtered collection.
    pub fn from_filtered(filtered: &[T], state: &PageState) -> Self {
        Self::new(state.slice(filtered).to_vec(), state)
    }
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, state: &PageState) -> Self {
        let pages = if state.has_controls() {
            state.visible_pages()
        } else {
            Vec::new()
        };

        Self {
            items,
            pages,
            page: state.current_page(),
            total_pages: state.total_pages(),
            total_items: state.total_items(),
        }
    }
}
