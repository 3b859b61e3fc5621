//! Borrower endpoints

use axum::{extract::State, Json};

use crate::{
    error::AppResult,
    models::borrower::{Borrower, CreateBorrower},
};

use super::ApiJson;

/// Register a new borrower
#[utoipa::path(
    post,
    path = "/borrowers",
    tag = "borrowers",
    request_body = CreateBorrower,
    responses(
        (status = 200, description = "Borrower registered", body = Borrower),
        (status = 400, description = "Missing or blank name", body = crate::error::ErrorResponse)
    )
)]
pub async fn register_borrower(
    State(state): State<crate::AppState>,
    ApiJson(data): ApiJson<CreateBorrower>,
) -> AppResult<Json<Borrower>> {
    let borrower = state.services.catalog.register_borrower(&data).await?;
    Ok(Json(borrower))
}
