use actix_web::{web, HttpResponse};

use crate::{db_interaction::{get_order, get_order_items, StoreError}, utils::{get_pooled_connection, DbPool}};

#[tracing::instrument(
    "Getting order by id",
    skip(pool)
)]
pub async fn read_order(
    pool: web::Data<DbPool>,
    path: web::Path<i32>
) -> Result<HttpResponse, StoreError> {
    let conn = get_pooled_connection(&pool).await?;

    let order = get_order(conn, path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(order))
}

#[tracing::instrument(
    "Getting items of order",
    skip(pool)
)]
pub async fn read_order_items(
    pool: web::Data<DbPool>,
    path: web::Path<i32>
) -> Result<HttpResponse, StoreError> {
    let conn = get_pooled_connection(&pool).await?;

    let items = get_order_items(conn, path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(items))
}
