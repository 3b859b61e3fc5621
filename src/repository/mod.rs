//! Repository layer: transactional access to books, borrowers and loans
//!
//! Services never talk to a database directly. They open a
//! [`StoreTransaction`] through a [`LibraryStore`], perform their reads and
//! writes on it, then commit or roll back. Dropping a transaction without
//! committing discards its writes.

pub mod books;
pub mod borrowers;
pub mod memory;
pub mod postgres;
pub mod records;

use async_trait::async_trait;

use crate::{
    error::AppResult,
    models::{Book, Borrower, BorrowingRecord, CreateBook, CreateBorrower, NewBorrowingRecord},
};

pub use memory::MemoryRepository;
pub use postgres::PgRepository;

/// Entry point of a storage backend
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LibraryStore: Send + Sync {
    /// Open a new transaction
    async fn begin(&self) -> AppResult<Box<dyn StoreTransaction>>;

    /// Check that the backend is reachable
    async fn ping(&self) -> AppResult<()>;
}

/// Unit of work over the three record types.
///
/// `books_find_by_id` locks the returned row until the transaction ends, so
/// two transactions reading the same book run one after the other.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StoreTransaction: Send {
    async fn books_find_by_id(&mut self, id: i64) -> AppResult<Option<Book>>;

    /// All books in id order
    async fn books_find_all(&mut self) -> AppResult<Vec<Book>>;

    async fn books_insert(&mut self, data: &CreateBook) -> AppResult<Book>;

    /// Overwrite an existing book; `NotFound` if its id is unknown
    async fn books_save(&mut self, book: &Book) -> AppResult<Book>;

    async fn borrowers_find_by_id(&mut self, id: i64) -> AppResult<Option<Borrower>>;

    async fn borrowers_insert(&mut self, data: &CreateBorrower) -> AppResult<Borrower>;

    /// All borrowing records in id order
    async fn records_find_all(&mut self) -> AppResult<Vec<BorrowingRecord>>;

    async fn records_insert(&mut self, data: &NewBorrowingRecord) -> AppResult<BorrowingRecord>;

    /// Overwrite an existing record; `NotFound` if its id is unknown
    async fn records_save(&mut self, record: &BorrowingRecord) -> AppResult<BorrowingRecord>;

    async fn commit(self: Box<Self>) -> AppResult<()>;

    async fn rollback(self: Box<Self>) -> AppResult<()>;
}
