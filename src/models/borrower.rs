//! Borrower model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::not_blank;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Borrower {
    pub id: i64,
    pub name: String,
}

/// Register borrower request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateBorrower {
    #[validate(custom(function = "not_blank", message = "name must not be blank"))]
    pub name: String,
}
