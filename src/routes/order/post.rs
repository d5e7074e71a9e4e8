use actix_web::{http::StatusCode, web, HttpResponse, ResponseError};
use serde::Deserialize;

use crate::{db_interaction::{place_order, PlaceOrderError}, models::OrderLine, utils::{get_pooled_connection, DbPool}};

#[derive(Deserialize, Debug)]
pub struct PlaceOrderJson{
    pub customer_id: i32,
    pub items: Vec<OrderLine>
}

impl ResponseError for PlaceOrderError {
    fn status_code(&self) -> StatusCode {
        match self {
            PlaceOrderError::InsufficientStock(_) | PlaceOrderError::InvalidQuantity{ .. } => StatusCode::BAD_REQUEST,
            PlaceOrderError::CustomerNotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR
        }
    }

    fn error_response(&self) -> HttpResponse<actix_web::body::BoxBody> {
        HttpResponse::build(self.status_code())
            .json(serde_json::json!({ "error": self.to_string() }))
    }
}

#[tracing::instrument(
    "Posting order",
    skip(pool, json),
    fields(customer_id = json.customer_id)
)]
pub async fn post_order(
    pool: web::Data<DbPool>,
    json: web::Json<PlaceOrderJson>
) -> Result<HttpResponse, PlaceOrderError> {
    let PlaceOrderJson{ customer_id, items } = json.into_inner();

    let conn = get_pooled_connection(&pool).await?;

    let order = place_order(conn, customer_id, items).await?;

    Ok(HttpResponse::Created().json(order))
}
