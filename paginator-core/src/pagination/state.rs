use paginator_api::{
    require_positive, PageValue, PaginationError, PaginationResult, PaginatorConfig, Subject,
    ValidationResult, DEFAULT_ITEMS_PER_PAGE,
};
use tracing::{debug, trace};
use validator::Validate;

use super::calc;
use super::request::PageRequest;

/// Pagination metadata for a fixed number of items
///
/// Every construction and every successful setter rebuilds the derived fields
/// (`last_page`, `next_page`, `current_page_first_item_offset`) in one step, so
/// the following always hold:
/// - `1 <= current_page <= last_page`
/// - `last_page == ceil(total_items / items_per_page)`
/// - `current_page_first_item_offset == (current_page - 1) * items_per_page + 1`
/// - `next_page` is `None` exactly on the last page
///
/// A rejected setter leaves the state untouched.
///
/// # Example
/// ```
/// use paginator_core::PaginationState;
///
/// let mut state = PaginationState::new(25).unwrap();
/// assert_eq!(state.last_page(), 3);
/// assert_eq!(state.next_page(), Some(2));
///
/// state.set_current_page(3).unwrap();
/// assert_eq!(state.current_page_first_item_offset(), 21);
/// assert_eq!(state.next_page(), None);
///
/// assert!(state.set_current_page(4).is_err());
/// assert_eq!(state.current_page(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    total_items: u64,
    items_per_page: u64,
    current_page: u64,
    last_page: u64,
    next_page: Option<u64>,
    current_page_first_item_offset: u64,
}

impl PaginationState {
    /// Paginate `total_items` items, 10 per page, starting on page 1.
    pub fn new(total_items: impl PageValue) -> ValidationResult<Self> {
        let total_items = require_positive(total_items, Subject::TotalItems)?;
        Ok(Self::rebuild(total_items, DEFAULT_ITEMS_PER_PAGE, 1))
    }

    /// Like [`PaginationState::new`], with the page size taken from `config`.
    ///
    /// `total_items` is checked before `config`.
    pub fn with_config(
        total_items: impl PageValue,
        config: &PaginatorConfig,
    ) -> PaginationResult<Self> {
        let total_items = require_positive(total_items, Subject::TotalItems)?;
        config.validate()?;
        Ok(Self::rebuild(total_items, config.default_items_per_page(), 1))
    }

    fn rebuild(total_items: u64, items_per_page: u64, current_page: u64) -> Self {
        let last_page = calc::last_page(total_items, items_per_page);
        let next_page = calc::next_page(current_page, last_page);
        let current_page_first_item_offset = calc::first_item_offset(current_page, items_per_page);

        trace!(
            total_items,
            items_per_page,
            current_page,
            last_page,
            ?next_page,
            current_page_first_item_offset,
            "Rebuilt pagination state"
        );

        Self {
            total_items,
            items_per_page,
            current_page,
            last_page,
            next_page,
            current_page_first_item_offset,
        }
    }

    /// Select a page. Fails when `page` is not a positive integer or lies
    /// beyond the current `last_page`.
    pub fn set_current_page(&mut self, page: impl PageValue) -> PaginationResult<()> {
        *self = self.with_current_page(page)?;
        Ok(())
    }

    /// Returns a copy with `page` selected, leaving `self` as it was.
    pub fn with_current_page(self, page: impl PageValue) -> PaginationResult<Self> {
        let page = require_positive(page, Subject::CurrentPage)
            .inspect_err(|err| debug!(%err, "Rejected current page"))?;

        if page > self.last_page {
            debug!(page, last_page = self.last_page, "Rejected out-of-range current page");
            return Err(PaginationError::PageOutOfRange {
                page,
                last_page: self.last_page,
            });
        }

        Ok(Self::rebuild(self.total_items, self.items_per_page, page))
    }

    /// Change the page size.
    ///
    /// If the current page no longer exists afterwards, the last page is
    /// selected instead.
    pub fn set_items_per_page(&mut self, per_page: impl PageValue) -> ValidationResult<()> {
        *self = self.with_items_per_page(per_page)?;
        Ok(())
    }

    /// Returns a copy with the new page size, leaving `self` as it was.
    pub fn with_items_per_page(self, per_page: impl PageValue) -> ValidationResult<Self> {
        let per_page = require_positive(per_page, Subject::ItemsPerPage)
            .inspect_err(|err| debug!(%err, "Rejected items per page"))?;

        let last_page = calc::last_page(self.total_items, per_page);
        let current_page = if self.current_page > last_page {
            debug!(
                current_page = self.current_page,
                last_page,
                "Clamped current page to the new last page"
            );
            last_page
        } else {
            self.current_page
        };

        Ok(Self::rebuild(self.total_items, per_page, current_page))
    }

    pub fn total_items(&self) -> u64 {
        self.total_items
    }

    pub fn items_per_page(&self) -> u64 {
        self.items_per_page
    }

    pub fn current_page(&self) -> u64 {
        self.current_page
    }

    pub fn last_page(&self) -> u64 {
        self.last_page
    }

    /// `None` when the current page is the last one.
    pub fn next_page(&self) -> Option<u64> {
        self.next_page
    }

    /// 1-based position of the current page's first item among all items.
    pub fn current_page_first_item_offset(&self) -> u64 {
        self.current_page_first_item_offset
    }

    /// `None` on the first page.
    pub fn previous_page(&self) -> Option<u64> {
        calc::previous_page(self.current_page)
    }

    pub fn has_next_page(&self) -> bool {
        self.next_page.is_some()
    }

    pub fn is_first_page(&self) -> bool {
        self.current_page == 1
    }

    pub fn is_last_page(&self) -> bool {
        self.current_page == self.last_page
    }

    /// 1-based position of the current page's last item among all items.
    pub fn current_page_last_item_offset(&self) -> u64 {
        calc::last_item_offset(self.current_page, self.items_per_page, self.total_items)
    }

    /// Number of items on the current page; only the last page can be short.
    pub fn items_on_current_page(&self) -> u64 {
        self.current_page_last_item_offset() - self.current_page_first_item_offset + 1
    }

    /// The current page as a 0-based limit/offset window.
    pub fn page_request(&self) -> PageRequest {
        PageRequest::from(self)
    }
}
