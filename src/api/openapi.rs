//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{books, borrowers, health, loans};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Library API",
        version = "0.1.0",
        description = "Book lending REST API"
    ),
    servers(
        (url = "/api", description = "Library API")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Catalog
        books::register_book,
        books::list_books,
        borrowers::register_borrower,
        // Loans
        loans::borrow_book,
        loans::return_book,
    ),
    components(
        schemas(
            crate::models::book::Book,
            crate::models::book::CreateBook,
            crate::models::borrower::Borrower,
            crate::models::borrower::CreateBorrower,
            health::HealthResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "books", description = "Book catalog"),
        (name = "borrowers", description = "Borrower registration"),
        (name = "loans", description = "Borrowing and returning books")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
