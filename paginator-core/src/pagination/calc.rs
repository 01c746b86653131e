//! Pure page arithmetic.
//!
//! `PaginationState` rebuilds all of its derived fields from these functions,
//! so they carry no validation of their own. Callers guarantee
//! `total_items > 0`, `items_per_page > 0` and `1 <= current_page <= last_page`.

/// Highest valid page number.
///
/// An exact multiple of `items_per_page` does not produce a trailing empty page.
#[inline]
pub fn last_page(total_items: u64, items_per_page: u64) -> u64 {
    if total_items <= items_per_page {
        return 1;
    }
    total_items.div_ceil(items_per_page)
}

/// 1-based index of the first item on `current_page`.
#[inline]
pub fn first_item_offset(current_page: u64, items_per_page: u64) -> u64 {
    (current_page - 1) * items_per_page + 1
}

/// 1-based index of the last item on `current_page`.
#[inline]
pub fn last_item_offset(current_page: u64, items_per_page: u64, total_items: u64) -> u64 {
    current_page.saturating_mul(items_per_page).min(total_items)
}

/// The page after `current_page`, or `None` when it is the last one.
#[inline]
pub fn next_page(current_page: u64, last_page: u64) -> Option<u64> {
    (current_page < last_page).then(|| current_page + 1)
}

/// The page before `current_page`, or `None` on the first page.
#[inline]
pub fn previous_page(current_page: u64) -> Option<u64> {
    (current_page > 1).then(|| current_page - 1)
}
