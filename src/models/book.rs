//! Book model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::not_blank;

/// Book record. One record is one physical copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub id: i64,
    pub isbn: String,
    pub title: String,
    pub author: String,
    /// True while an open borrowing record exists for this book
    pub borrowed: bool,
}

/// Register book request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateBook {
    #[validate(custom(function = "not_blank", message = "isbn must not be blank"))]
    pub isbn: String,
    #[validate(custom(function = "not_blank", message = "title must not be blank"))]
    pub title: String,
    #[validate(custom(function = "not_blank", message = "author must not be blank"))]
    pub author: String,
}
