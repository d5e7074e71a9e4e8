mod account;
mod customer;
mod health_check;
mod order;
mod product;

pub use account::*;
pub use customer::*;
pub use health_check::*;
pub use order::*;
pub use product::*;

use actix_web::{http::StatusCode, HttpResponse, ResponseError};

use crate::db_interaction::StoreError;

impl ResponseError for StoreError {
    fn status_code(&self) -> StatusCode {
        match self {
            StoreError::NotFound{ .. } => StatusCode::NOT_FOUND,
            StoreError::ConstraintViolation(_) => StatusCode::CONFLICT,
            _ => StatusCode::INTERNAL_SERVER_ERROR
        }
    }

    fn error_response(&self) -> HttpResponse<actix_web::body::BoxBody> {
        HttpResponse::build(self.status_code())
            .json(serde_json::json!({ "error": self.to_string() }))
    }
}
