//! Book catalog endpoints

use axum::{extract::State, Json};

use crate::{
    error::AppResult,
    models::book::{Book, CreateBook},
};

use super::ApiJson;

/// Register a new book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = CreateBook,
    responses(
        (status = 200, description = "Book registered", body = Book),
        (status = 400, description = "Missing or blank field", body = crate::error::ErrorResponse)
    )
)]
pub async fn register_book(
    State(state): State<crate::AppState>,
    ApiJson(data): ApiJson<CreateBook>,
) -> AppResult<Json<Book>> {
    let book = state.services.catalog.register_book(&data).await?;
    Ok(Json(book))
}

/// List all books
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "All books", body = Vec<Book>)
    )
)]
pub async fn list_books(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.catalog.list_books().await?;
    Ok(Json(books))
}
