use paginator_api::DEFAULT_ITEMS_PER_PAGE;

use super::state::PaginationState;

/// 0-based limit/offset window over the items of one page, for offset-based queries
///
/// Built from a validated [`PaginationState`], so `limit` is never 0 and
/// `offset` always starts a page.
///
/// # Example
/// ```
/// use paginator_core::{PageRequest, PaginationState};
///
/// let mut state = PaginationState::new(25).unwrap();
/// state.set_current_page(2).unwrap();
///
/// let request = PageRequest::from(&state);
/// assert_eq!(request.limit(), 10);
/// assert_eq!(request.offset(), 10); // skips page 1
/// assert_eq!(request.page_number(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    limit: u64,
    offset: u64,
}

impl PageRequest {
    /// Maximum number of items to return
    pub fn limit(&self) -> u64 {
        self.limit
    }

    /// Number of items to skip
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// The 1-based page this window covers
    pub fn page_number(&self) -> u64 {
        self.offset / self.limit + 1
    }
}

impl From<&PaginationState> for PageRequest {
    fn from(state: &PaginationState) -> Self {
        Self {
            limit: state.items_per_page(),
            offset: state.current_page_first_item_offset() - 1,
        }
    }
}

/// First page at the default page size.
impl Default for PageRequest {
    fn default() -> Self {
        Self {
            limit: DEFAULT_ITEMS_PER_PAGE,
            offset: 0,
        }
    }
}
