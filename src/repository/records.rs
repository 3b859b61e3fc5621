//! Borrowing record queries

use sqlx::PgConnection;

use crate::{
    error::{AppError, AppResult},
    models::{BorrowingRecord, NewBorrowingRecord},
};

pub async fn find_all(conn: &mut PgConnection) -> AppResult<Vec<BorrowingRecord>> {
    let rows = sqlx::query_as::<_, BorrowingRecord>(
        r#"
        SELECT id, borrower_id, book_id, borrow_date, return_date
        FROM borrowing_records
        ORDER BY id
        "#,
    )
    .fetch_all(&mut *conn)
    .await?;
    Ok(rows)
}

pub async fn insert(conn: &mut PgConnection, data: &NewBorrowingRecord) -> AppResult<BorrowingRecord> {
    let row = sqlx::query_as::<_, BorrowingRecord>(
        r#"
        INSERT INTO borrowing_records (borrower_id, book_id, borrow_date, return_date)
        VALUES ($1, $2, $3, NULL)
        RETURNING id, borrower_id, book_id, borrow_date, return_date
        "#,
    )
    .bind(data.borrower_id)
    .bind(data.book_id)
    .bind(data.borrow_date)
    .fetch_one(&mut *conn)
    .await?;
    Ok(row)
}

pub async fn save(conn: &mut PgConnection, record: &BorrowingRecord) -> AppResult<BorrowingRecord> {
    sqlx::query_as::<_, BorrowingRecord>(
        r#"
        UPDATE borrowing_records
        SET borrower_id = $1, book_id = $2, borrow_date = $3, return_date = $4
        WHERE id = $5
        RETURNING id, borrower_id, book_id, borrow_date, return_date
        "#,
    )
    .bind(record.borrower_id)
    .bind(record.book_id)
    .bind(record.borrow_date)
    .bind(record.return_date)
    .bind(record.id)
    .fetch_optional(&mut *conn)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Borrowing record {} not found", record.id)))
}
