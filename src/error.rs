//! Error types for the post index and the paginator

use thiserror::Error;

/// Errors raised while turning raw post records into summaries
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndexError {
    /// The post's date could not be parsed into a point in time
    #[error("invalid date {value:?} in {source_path}")]
    InvalidDate { source_path: String, value: String },
}

/// Errors raised by the paginator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PaginationError {
    /// Requested page is outside `1..=total`
    #[error("page {requested} is out of range (total pages: {total})")]
    PageOutOfRange { requested: usize, total: usize },

    #[error("page size must be greater than zero")]
    ZeroPageSize,
}
