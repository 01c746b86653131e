use std::fmt;

use thiserror::Error;

/// The input a validation failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subject {
    /// The `total_items` constructor argument
    TotalItems,
    /// A page handed to the current page setter
    CurrentPage,
    /// A page size handed to the items per page setter
    ItemsPerPage,
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Subject::TotalItems => f.write_str("total_items argument value"),
            Subject::CurrentPage | Subject::ItemsPerPage => f.write_str("value"),
        }
    }
}

/// Rejection of a raw input before it reaches the pagination state.
///
/// The integer check always runs before the range check, so a value that is
/// neither an integer nor positive reports `NotAnInteger`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{subject} must be an integer")]
    NotAnInteger { subject: Subject },

    #[error("{subject} must be an integer greater than 0")]
    NotPositive { subject: Subject, value: i64 },
}

impl ValidationError {
    pub fn subject(&self) -> Subject {
        match self {
            ValidationError::NotAnInteger { subject } => *subject,
            ValidationError::NotPositive { subject, .. } => *subject,
        }
    }
}

#[derive(Error, Debug)]
pub enum PaginationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Invalid page number {page}. There are maximum {last_page} pages available.")]
    PageOutOfRange { page: u64, last_page: u64 },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] validator::ValidationErrors),
}

pub type ValidationResult<T> = Result<T, ValidationError>;

pub type PaginationResult<T> = Result<T, PaginationError>;
