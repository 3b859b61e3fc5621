//! Book queries

use sqlx::PgConnection;

use crate::{
    error::{AppError, AppResult},
    models::{Book, CreateBook},
};

/// Fetch a book and lock its row for the rest of the transaction
pub async fn find_by_id_for_update(conn: &mut PgConnection, id: i64) -> AppResult<Option<Book>> {
    let book = sqlx::query_as::<_, Book>(
        "SELECT id, isbn, title, author, borrowed FROM books WHERE id = $1 FOR UPDATE",
    )
    .bind(id)
    .fetch_optional(&mut *conn)
    .await?;
    Ok(book)
}

pub async fn find_all(conn: &mut PgConnection) -> AppResult<Vec<Book>> {
    let rows = sqlx::query_as::<_, Book>(
        "SELECT id, isbn, title, author, borrowed FROM books ORDER BY id",
    )
    .fetch_all(&mut *conn)
    .await?;
    Ok(rows)
}

pub async fn insert(conn: &mut PgConnection, data: &CreateBook) -> AppResult<Book> {
    let row = sqlx::query_as::<_, Book>(
        r#"
        INSERT INTO books (isbn, title, author, borrowed)
        VALUES ($1, $2, $3, FALSE)
        RETURNING id, isbn, title, author, borrowed
        "#,
    )
    .bind(&data.isbn)
    .bind(&data.title)
    .bind(&data.author)
    .fetch_one(&mut *conn)
    .await?;
    Ok(row)
}

pub async fn save(conn: &mut PgConnection, book: &Book) -> AppResult<Book> {
    sqlx::query_as::<_, Book>(
        r#"
        UPDATE books SET isbn = $1, title = $2, author = $3, borrowed = $4
        WHERE id = $5
        RETURNING id, isbn, title, author, borrowed
        "#,
    )
    .bind(&book.isbn)
    .bind(&book.title)
    .bind(&book.author)
    .bind(book.borrowed)
    .bind(book.id)
    .fetch_optional(&mut *conn)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Book not found with ID: {}", book.id)))
}
