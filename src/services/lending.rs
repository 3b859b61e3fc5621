//! Lending workflow: borrowing and returning books
//!
//! A book is either available or borrowed. Each call runs in one store
//! transaction, so the book flag and its borrowing record always change
//! together.

use std::sync::Arc;

use chrono::{Local, NaiveDate};

use super::finish;
use crate::{
    error::{AppError, AppResult},
    models::{BorrowingRecord, NewBorrowingRecord},
    repository::{LibraryStore, StoreTransaction},
};

pub const BORROWED_MESSAGE: &str = "Book borrowed successfully.";
pub const RETURNED_MESSAGE: &str = "Book returned successfully.";

#[derive(Clone)]
pub struct LendingService {
    store: Arc<dyn LibraryStore>,
}

impl LendingService {
    pub fn new(store: Arc<dyn LibraryStore>) -> Self {
        Self { store }
    }

    /// Lend a book to a borrower
    pub async fn borrow(&self, borrower_id: i64, book_id: i64) -> AppResult<&'static str> {
        let mut tx = self.store.begin().await?;
        let result = borrow_in(&mut *tx, borrower_id, book_id, today()).await;
        if let Err(ref e) = result {
            tracing::warn!("Borrow rejected: borrower={} book={}: {}", borrower_id, book_id, e);
        }
        let record = finish(tx, result).await?;

        tracing::info!(
            "Book {} borrowed by borrower {} (record id={})",
            record.book_id, record.borrower_id, record.id
        );
        Ok(BORROWED_MESSAGE)
    }

    /// Take a borrowed book back.
    ///
    /// `borrower_id` is not checked against the borrower of the open record.
    pub async fn return_book(&self, borrower_id: i64, book_id: i64) -> AppResult<&'static str> {
        let mut tx = self.store.begin().await?;
        let result = return_in(&mut *tx, book_id, today()).await;
        if let Err(ref e) = result {
            tracing::warn!("Return rejected: borrower={} book={}: {}", borrower_id, book_id, e);
        }
        let record = finish(tx, result).await?;

        tracing::info!(
            "Book {} returned (record id={}, borrowed by {}, returned via borrower {})",
            record.book_id, record.id, record.borrower_id, borrower_id
        );
        Ok(RETURNED_MESSAGE)
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

async fn borrow_in(
    tx: &mut dyn StoreTransaction,
    borrower_id: i64,
    book_id: i64,
    today: NaiveDate,
) -> AppResult<BorrowingRecord> {
    let borrower = tx
        .borrowers_find_by_id(borrower_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Borrower not found with ID: {}", borrower_id)))?;

    let mut book = tx
        .books_find_by_id(book_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Book not found with ID: {}", book_id)))?;

    if book.borrowed {
        return Err(AppError::AlreadyBorrowed(format!(
            "Book with ID {} is already borrowed.",
            book_id
        )));
    }

    book.borrowed = true;
    tx.books_save(&book).await?;

    tx.records_insert(&NewBorrowingRecord {
        borrower_id: borrower.id,
        book_id: book.id,
        borrow_date: today,
    })
    .await
}

async fn return_in(
    tx: &mut dyn StoreTransaction,
    book_id: i64,
    today: NaiveDate,
) -> AppResult<BorrowingRecord> {
    let mut book = tx
        .books_find_by_id(book_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Book not found with ID: {}", book_id)))?;

    if !book.borrowed {
        return Err(AppError::InvalidState(format!(
            "Book with ID {} is not currently borrowed.",
            book_id
        )));
    }

    book.borrowed = false;
    tx.books_save(&book).await?;

    let mut record = tx
        .records_find_all()
        .await?
        .into_iter()
        .find(|r| r.book_id == book_id && r.is_open())
        .ok_or_else(|| {
            AppError::InvalidState(format!(
                "No active borrowing record found for book ID: {}",
                book_id
            ))
        })?;

    record.return_date = Some(today);
    tx.records_save(&record).await
}
