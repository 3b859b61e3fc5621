//! API handlers for the library REST endpoints

pub mod books;
pub mod borrowers;
pub mod health;
pub mod loans;
pub mod openapi;

use axum::{
    async_trait,
    extract::{
        rejection::{JsonRejection, PathRejection},
        FromRequest, FromRequestParts, Path, Request,
    },
    http::request::Parts,
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{error::AppError, AppState};

/// JSON body extractor whose rejections use the standard error body (400)
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| AppError::BadRequest(rejection.body_text()))?;
        Ok(ApiJson(value))
    }
}

/// Path extractor whose rejections use the standard error body (400)
pub struct ApiPath<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for ApiPath<T>
where
    Path<T>: FromRequestParts<S, Rejection = PathRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection: PathRejection| AppError::BadRequest(rejection.body_text()))?;
        Ok(ApiPath(value))
    }
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Catalog
        .route("/books", get(books::list_books).post(books::register_book))
        .route("/borrowers", post(borrowers::register_borrower))
        // Lending
        .route(
            "/borrowers/:borrower_id/books/:book_id/borrow",
            post(loans::borrow_book),
        )
        .route(
            "/borrowers/:borrower_id/books/:book_id/return",
            post(loans::return_book),
        )
        .with_state(state);

    Router::new()
        .nest("/api", api)
        .merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
