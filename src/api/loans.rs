//! Borrow and return endpoints

use axum::extract::State;

use crate::error::AppResult;

use super::ApiPath;

/// Borrow a book
#[utoipa::path(
    post,
    path = "/borrowers/{borrower_id}/books/{book_id}/borrow",
    tag = "loans",
    params(
        ("borrower_id" = i64, Path, description = "Borrower ID"),
        ("book_id" = i64, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book borrowed", body = String, content_type = "text/plain"),
        (status = 404, description = "Borrower or book not found", body = crate::error::ErrorResponse),
        (status = 409, description = "Book already borrowed", body = crate::error::ErrorResponse)
    )
)]
pub async fn borrow_book(
    State(state): State<crate::AppState>,
    ApiPath((borrower_id, book_id)): ApiPath<(i64, i64)>,
) -> AppResult<&'static str> {
    state.services.lending.borrow(borrower_id, book_id).await
}

/// Return a borrowed book
#[utoipa::path(
    post,
    path = "/borrowers/{borrower_id}/books/{book_id}/return",
    tag = "loans",
    params(
        ("borrower_id" = i64, Path, description = "Borrower ID"),
        ("book_id" = i64, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book returned", body = String, content_type = "text/plain"),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse),
        (status = 409, description = "Book not currently borrowed", body = crate::error::ErrorResponse)
    )
)]
pub async fn return_book(
    State(state): State<crate::AppState>,
    ApiPath((borrower_id, book_id)): ApiPath<(i64, i64)>,
) -> AppResult<&'static str> {
    state.services.lending.return_book(borrower_id, book_id).await
}
