pub mod pagination;

// Re-exports
pub use pagination::*;
pub use paginator_api::{
    PageValue, PaginationError, PaginationResult, PaginatorConfig, Subject, ValidationError,
    ValidationResult, DEFAULT_ITEMS_PER_PAGE,
};
