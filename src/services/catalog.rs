//! Catalog management service

use std::sync::Arc;

use validator::Validate;

use super::finish;
use crate::{
    error::AppResult,
    models::{Book, Borrower, CreateBook, CreateBorrower},
    repository::{LibraryStore, StoreTransaction},
};

#[derive(Clone)]
pub struct CatalogService {
    store: Arc<dyn LibraryStore>,
}

impl CatalogService {
    pub fn new(store: Arc<dyn LibraryStore>) -> Self {
        Self { store }
    }

    /// Register a new book. New books are always available.
    pub async fn register_book(&self, data: &CreateBook) -> AppResult<Book> {
        data.validate()?;

        let mut tx = self.store.begin().await?;
        let result = tx.books_insert(data).await;
        let book = finish(tx, result).await?;

        tracing::info!("Registered book id={} isbn={}", book.id, book.isbn);
        Ok(book)
    }

    /// List all books in registration order
    pub async fn list_books(&self) -> AppResult<Vec<Book>> {
        let mut tx = self.store.begin().await?;
        let result = tx.books_find_all().await;
        finish(tx, result).await
    }

    /// Register a new borrower
    pub async fn register_borrower(&self, data: &CreateBorrower) -> AppResult<Borrower> {
        data.validate()?;

        let mut tx = self.store.begin().await?;
        let result = tx.borrowers_insert(data).await;
        let borrower = finish(tx, result).await?;

        tracing::info!("Registered borrower id={}", borrower.id);
        Ok(borrower)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::AppError, repository::MemoryRepository};

    fn service() -> CatalogService {
        CatalogService::new(Arc::new(MemoryRepository::new()))
    }

    fn book(isbn: &str, title: &str, author: &str) -> CreateBook {
        CreateBook {
            isbn: isbn.to_string(),
            title: title.to_string(),
            author: author.to_string(),
        }
    }

    fn same_catalog_data(book: &Book, data: &CreateBook) -> bool {
        book.isbn == data.isbn && book.title == data.title && book.author == data.author
    }

    #[tokio::test]
    async fn test_register_book_assigns_id_and_starts_available() {
        let catalog = service();
        let saved = catalog
            .register_book(&book("111", "Clean Code", "R. Martin"))
            .await
            .unwrap();

        assert_eq!(saved.id, 1);
        assert_eq!(saved.title, "Clean Code");
        assert!(!saved.borrowed);
    }

    #[tokio::test]
    async fn test_list_books_contains_registered_books_in_order() {
        let catalog = service();
        let first = book("111", "Clean Code", "R. Martin");
        let second = book("222", "Refactoring", "M. Fowler");
        catalog.register_book(&first).await.unwrap();
        catalog.register_book(&second).await.unwrap();

        let books = catalog.list_books().await.unwrap();
        assert_eq!(books.len(), 2);
        assert!(same_catalog_data(&books[0], &first));
        assert!(same_catalog_data(&books[1], &second));
    }

    #[tokio::test]
    async fn test_list_books_empty() {
        assert!(service().list_books().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_blank_fields_are_rejected() {
        let catalog = service();

        let result = catalog.register_book(&book("111", "   ", "R. Martin")).await;
        assert!(matches!(result, Err(AppError::Validation(_))));

        let result = catalog
            .register_borrower(&CreateBorrower { name: String::new() })
            .await;
        assert!(matches!(result, Err(AppError::Validation(_))));

        assert!(catalog.list_books().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_register_borrower() {
        let borrower = service()
            .register_borrower(&CreateBorrower { name: "John".to_string() })
            .await
            .unwrap();
        assert_eq!(borrower.id, 1);
        assert_eq!(borrower.name, "John");
    }
}
