//! Borrowing record (loan) model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Borrowing record from storage. `return_date == None` marks an open loan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct BorrowingRecord {
    pub id: i64,
    pub borrower_id: i64,
    pub book_id: i64,
    pub borrow_date: NaiveDate,
    pub return_date: Option<NaiveDate>,
}

/// Data for a record being opened
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBorrowingRecord {
    pub borrower_id: i64,
    pub book_id: i64,
    pub borrow_date: NaiveDate,
}

impl BorrowingRecord {
    pub fn is_open(&self) -> bool {
        self.return_date.is_none()
    }
}
