//! Data models for the library server

pub mod book;
pub mod borrower;
pub mod borrowing_record;

// Re-export commonly used types
pub use book::{Book, CreateBook};
pub use borrower::{Borrower, CreateBorrower};
pub use borrowing_record::{BorrowingRecord, NewBorrowingRecord};

use validator::ValidationError;

/// Rejects empty and whitespace-only strings
pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}
