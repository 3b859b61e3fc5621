//! PostgreSQL backend

use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, Pool, Postgres, Transaction};

use super::{books, borrowers, records, LibraryStore, StoreTransaction};
use crate::{
    config::DatabaseConfig,
    error::AppResult,
    models::{Book, Borrower, BorrowingRecord, CreateBook, CreateBorrower, NewBorrowingRecord},
};

/// Repository holding the database connection pool
#[derive(Clone)]
pub struct PgRepository {
    pool: Pool<Postgres>,
}

impl PgRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Create the connection pool described by `config`
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect(&config.url)
            .await?;
        Ok(Self::new(pool))
    }

    /// Apply the embedded schema migrations
    pub async fn run_migrations(&self) -> AppResult<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl LibraryStore for PgRepository {
    async fn begin(&self) -> AppResult<Box<dyn StoreTransaction>> {
        let tx = self.pool.begin().await?;
        Ok(Box::new(PgTransaction { tx }))
    }

    async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

/// Open database transaction. Rolled back by sqlx when dropped uncommitted.
pub struct PgTransaction {
    tx: Transaction<'static, Postgres>,
}

#[async_trait]
impl StoreTransaction for PgTransaction {
    async fn books_find_by_id(&mut self, id: i64) -> AppResult<Option<Book>> {
        books::find_by_id_for_update(&mut self.tx, id).await
    }

    async fn books_find_all(&mut self) -> AppResult<Vec<Book>> {
        books::find_all(&mut self.tx).await
    }

    async fn books_insert(&mut self, data: &CreateBook) -> AppResult<Book> {
        books::insert(&mut self.tx, data).await
    }

    async fn books_save(&mut self, book: &Book) -> AppResult<Book> {
        books::save(&mut self.tx, book).await
    }

    async fn borrowers_find_by_id(&mut self, id: i64) -> AppResult<Option<Borrower>> {
        borrowers::find_by_id(&mut self.tx, id).await
    }

    async fn borrowers_insert(&mut self, data: &CreateBorrower) -> AppResult<Borrower> {
        borrowers::insert(&mut self.tx, data).await
    }

    async fn records_find_all(&mut self) -> AppResult<Vec<BorrowingRecord>> {
        records::find_all(&mut self.tx).await
    }

    async fn records_insert(&mut self, data: &NewBorrowingRecord) -> AppResult<BorrowingRecord> {
        records::insert(&mut self.tx, data).await
    }

    async fn records_save(&mut self, record: &BorrowingRecord) -> AppResult<BorrowingRecord> {
        records::save(&mut self.tx, record).await
    }

    async fn commit(self: Box<Self>) -> AppResult<()> {
        self.tx.commit().await?;
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> AppResult<()> {
        self.tx.rollback().await?;
        Ok(())
    }
}
