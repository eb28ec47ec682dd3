//! Pagination control state: the page-range model with ellipsis markers.

use gridkit_core::{PageChanged, PageSizeChanged};
use serde::{Deserialize, Serialize};

/// Default number of sibling pages shown on each side of the current one.
pub const DEFAULT_SIBLING_COUNT: usize = 5;

/// One slot in the rendered page range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    /// A concrete page number
    Page(usize),
    /// A gap between page numbers
    Ellipsis,
}

/// Pagination control state.
///
/// Owns the page-range presentation model; the actual row slicing is
/// [`gridkit_core::paginate`]'s job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pager {
    /// Total number of items
    total_items: usize,
    /// Items per page
    page_size: usize,
    /// Current 1-based page
    current_page: usize,
    /// Pages shown on each side of the current page
    sibling_count: usize,
    /// Selectable page sizes
    page_size_options: Vec<usize>,
}

impl Pager {
    /// Create a pager.
    #[must_use]
    pub fn new(total_items: usize, page_size: usize) -> Self {
        Self {
            total_items,
            page_size: page_size.max(1),
            current_page: 1,
            sibling_count: DEFAULT_SIBLING_COUNT,
            page_size_options: Vec::new(),
        }
    }

    /// Set the sibling count.
    #[must_use]
    pub fn sibling_count(mut self, count: usize) -> Self {
        self.sibling_count = count;
        self
    }

    /// Offer selectable page sizes.
    #[must_use]
    pub fn page_size_options(mut self, options: impl IntoIterator<Item = usize>) -> Self {
        self.page_size_options = options.into_iter().filter(|&s| s > 0).collect();
        self
    }

    /// Current 1-based page.
    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.current_page
    }

    /// Items per page.
    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Selectable page sizes.
    #[must_use]
    pub fn size_options(&self) -> &[usize] {
        &self.page_size_options
    }

    /// Number of pages.
    #[must_use]
    pub const fn total_pages(&self) -> usize {
        if self.total_items == 0 {
            1
        } else {
            self.total_items.div_ceil(self.page_size)
        }
    }

    /// Whether the control should render at all.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.total_pages() > 1
    }

    /// Whether a previous page exists.
    #[must_use]
    pub const fn can_prev(&self) -> bool {
        self.current_page > 1
    }

    /// Whether a next page exists.
    #[must_use]
    pub const fn can_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    /// Record a new total, clamping the current page if the set shrank.
    pub fn set_total_items(&mut self, total: usize) {
        self.total_items = total;
        self.current_page = self.current_page.clamp(1, self.total_pages());
    }

    /// Move to a page. Out-of-range targets and the current page are
    /// rejected rather than clamped: a disabled button does nothing.
    pub fn set_page(&mut self, page: usize) -> Option<PageChanged> {
        if page == self.current_page || page < 1 || page > self.total_pages() {
            return None;
        }
        self.current_page = page;
        Some(PageChanged { page })
    }

    /// Move to the first page.
    pub fn first(&mut self) -> Option<PageChanged> {
        self.set_page(1)
    }

    /// Move to the last page.
    pub fn last(&mut self) -> Option<PageChanged> {
        self.set_page(self.total_pages())
    }

    /// Move to the previous page.
    pub fn prev(&mut self) -> Option<PageChanged> {
        self.current_page
            .checked_sub(1)
            .and_then(|p| self.set_page(p))
    }

    /// Move to the next page.
    pub fn next(&mut self) -> Option<PageChanged> {
        self.set_page(self.current_page + 1)
    }

    /// Change the page size, jumping back to page 1.
    pub fn set_page_size(&mut self, size: usize) -> Option<PageSizeChanged> {
        if size == 0 || size == self.page_size {
            return None;
        }
        if !self.page_size_options.is_empty() && !self.page_size_options.contains(&size) {
            return None;
        }
        self.page_size = size;
        self.current_page = 1;
        Some(PageSizeChanged { size })
    }

    /// The page range to render: page numbers with ellipsis markers where
    /// the range is elided around the current page.
    #[must_use]
    pub fn page_items(&self) -> Vec<PageItem> {
        let total_pages = self.total_pages();
        let siblings = self.sibling_count;

        // Below this many pages the full range always fits.
        let total_blocks = siblings + 7;
        if total_pages <= total_blocks {
            return (1..=total_pages).map(PageItem::Page).collect();
        }

        let left_sibling = self.current_page.saturating_sub(siblings).max(1);
        let right_sibling = (self.current_page + siblings).min(total_pages);
        let show_left_dots = left_sibling > 2;
        let show_right_dots = right_sibling < total_pages - 1;

        // A large sibling count can ask for more pages than exist; the
        // leading/trailing blocks never cover the page they elide toward.
        let block = (3 + 2 * siblings).min(total_pages.saturating_sub(1));

        let mut items = Vec::new();
        match (show_left_dots, show_right_dots) {
            (false, true) => {
                items.extend((1..=block).map(PageItem::Page));
                items.push(PageItem::Ellipsis);
                items.push(PageItem::Page(total_pages));
            }
            (true, false) => {
                items.push(PageItem::Page(1));
                items.push(PageItem::Ellipsis);
                items.extend((total_pages - block + 1..=total_pages).map(PageItem::Page));
            }
            _ => {
                items.push(PageItem::Page(1));
                items.push(PageItem::Ellipsis);
                items.extend((left_sibling..=right_sibling).map(PageItem::Page));
                items.push(PageItem::Ellipsis);
                items.push(PageItem::Page(total_pages));
            }
        }
        items
    }
}
