//! Borrower queries

use sqlx::PgConnection;

use crate::{
    error::AppResult,
    models::{Borrower, CreateBorrower},
};

pub async fn find_by_id(conn: &mut PgConnection, id: i64) -> AppResult<Option<Borrower>> {
    let borrower = sqlx::query_as::<_, Borrower>("SELECT id, name FROM borrowers WHERE id = $1")
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;
    Ok(borrower)
}

pub async fn insert(conn: &mut PgConnection, data: &CreateBorrower) -> AppResult<Borrower> {
    let row = sqlx::query_as::<_, Borrower>(
        "INSERT INTO borrowers (name) VALUES ($1) RETURNING id, name",
    )
    .bind(&data.name)
    .fetch_one(&mut *conn)
    .await?;
    Ok(row)
}
