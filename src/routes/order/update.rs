use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::{db_interaction::{update_order_status, StoreError}, utils::{get_pooled_connection, DbPool}};

#[derive(Deserialize, Debug)]
pub struct UpdateOrderStatusJson{
    pub status: String
}

#[tracing::instrument(
    "Updating order status",
    skip(pool)
)]
pub async fn edit_order_status(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
    json: web::Json<UpdateOrderStatusJson>
) -> Result<HttpResponse, StoreError>{
    let conn = get_pooled_connection(&pool).await?;

    let order = update_order_status(conn, path.into_inner(), json.into_inner().status).await?;

    Ok(HttpResponse::Ok().json(order))
}
