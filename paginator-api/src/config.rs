use serde::Deserialize;
use validator::Validate;

/// Page size applied when a caller does not choose one.
pub const DEFAULT_ITEMS_PER_PAGE: u64 = 10;

/// Paginator settings supplied by the host application
///
/// # Example
/// ```
/// use paginator_api::PaginatorConfig;
/// use validator::Validate;
///
/// let config = PaginatorConfig::new(25);
/// assert!(config.validate().is_ok());
/// assert!(PaginatorConfig::new(0).validate().is_err());
/// ```
#[derive(Debug, Clone, Deserialize, Validate, PartialEq, Eq)]
#[serde(default)]
pub struct PaginatorConfig {
    /// Page size for newly constructed pagination states
    #[validate(range(min = 1))]
    default_items_per_page: u64,
}

impl PaginatorConfig {
    pub fn new(default_items_per_page: u64) -> Self {
        Self { default_items_per_page }
    }

    pub fn default_items_per_page(&self) -> u64 {
        self.default_items_per_page
    }
}

impl Default for PaginatorConfig {
    fn default() -> Self {
        Self {
            default_items_per_page: DEFAULT_ITEMS_PER_PAGE,
        }
    }
}
