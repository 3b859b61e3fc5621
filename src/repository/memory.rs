//! In-memory backend
//!
//! A transaction holds the store's lock for its whole lifetime and works on a
//! private copy of the data. Commit publishes the copy; rollback or drop
//! throws it away.

use std::{collections::BTreeMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::{Mutex, OwnedMutexGuard};

use super::{LibraryStore, StoreTransaction};
use crate::{
    error::{AppError, AppResult},
    models::{Book, Borrower, BorrowingRecord, CreateBook, CreateBorrower, NewBorrowingRecord},
};

#[derive(Debug, Clone, Default)]
struct MemoryState {
    books: BTreeMap<i64, Book>,
    borrowers: BTreeMap<i64, Borrower>,
    records: BTreeMap<i64, BorrowingRecord>,
    last_book_id: i64,
    last_borrower_id: i64,
    last_record_id: i64,
}

#[derive(Clone, Default)]
pub struct MemoryRepository {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LibraryStore for MemoryRepository {
    async fn begin(&self) -> AppResult<Box<dyn StoreTransaction>> {
        let guard = self.state.clone().lock_owned().await;
        let working = guard.clone();
        Ok(Box::new(MemoryTransaction { guard, working }))
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}

pub struct MemoryTransaction {
    guard: OwnedMutexGuard<MemoryState>,
    working: MemoryState,
}

#[async_trait]
impl StoreTransaction for MemoryTransaction {
    async fn books_find_by_id(&mut self, id: i64) -> AppResult<Option<Book>> {
        Ok(self.working.books.get(&id).cloned())
    }

    async fn books_find_all(&mut self) -> AppResult<Vec<Book>> {
        Ok(self.working.books.values().cloned().collect())
    }

    async fn books_insert(&mut self, data: &CreateBook) -> AppResult<Book> {
        self.working.last_book_id += 1;
        let book = Book {
            id: self.working.last_book_id,
            isbn: data.isbn.clone(),
            title: data.title.clone(),
            author: data.author.clone(),
            borrowed: false,
        };
        self.working.books.insert(book.id, book.clone());
        Ok(book)
    }

    async fn books_save(&mut self, book: &Book) -> AppResult<Book> {
        let slot = self
            .working
            .books
            .get_mut(&book.id)
            .ok_or_else(|| AppError::NotFound(format!("Book not found with ID: {}", book.id)))?;
        *slot = book.clone();
        Ok(book.clone())
    }

    async fn borrowers_find_by_id(&mut self, id: i64) -> AppResult<Option<Borrower>> {
        Ok(self.working.borrowers.get(&id).cloned())
    }

    async fn borrowers_insert(&mut self, data: &CreateBorrower) -> AppResult<Borrower> {
        self.working.last_borrower_id += 1;
        let borrower = Borrower {
            id: self.working.last_borrower_id,
            name: data.name.clone(),
        };
        self.working.borrowers.insert(borrower.id, borrower.clone());
        Ok(borrower)
    }

    async fn records_find_all(&mut self) -> AppResult<Vec<BorrowingRecord>> {
        Ok(self.working.records.values().cloned().collect())
    }

    async fn records_insert(&mut self, data: &NewBorrowingRecord) -> AppResult<BorrowingRecord> {
        // Same guarantee as the partial unique index on the SQL schema
        if self
            .working
            .records
            .values()
            .any(|r| r.book_id == data.book_id && r.is_open())
        {
            return Err(AppError::Internal(format!(
                "Book {} already has an open borrowing record",
                data.book_id
            )));
        }

        self.working.last_record_id += 1;
        let record = BorrowingRecord {
            id: self.working.last_record_id,
            borrower_id: data.borrower_id,
            book_id: data.book_id,
            borrow_date: data.borrow_date,
            return_date: None,
        };
        self.working.records.insert(record.id, record.clone());
        Ok(record)
    }

    async fn records_save(&mut self, record: &BorrowingRecord) -> AppResult<BorrowingRecord> {
        let slot = self
            .working
            .records
            .get_mut(&record.id)
            .ok_or_else(|| AppError::NotFound(format!("Borrowing record {} not found", record.id)))?;
        *slot = record.clone();
        Ok(record.clone())
    }

    async fn commit(self: Box<Self>) -> AppResult<()> {
        let MemoryTransaction { mut guard, working } = *self;
        *guard = working;
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> AppResult<()> {
        Ok(())
    }
}
