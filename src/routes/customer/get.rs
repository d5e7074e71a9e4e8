use actix_web::{web, HttpResponse};

use crate::{db_interaction::{get_customer, get_customer_orders, StoreError}, utils::{get_pooled_connection, DbPool}};

#[tracing::instrument(
    "Getting customer by id",
    skip(pool)
)]
pub async fn read_customer(
    pool: web::Data<DbPool>,
    path: web::Path<i32>
) -> Result<HttpResponse, StoreError>{
    let conn = get_pooled_connection(&pool).await?;

    let customer = get_customer(conn, path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(customer))
}

#[tracing::instrument(
    "Getting orders of customer",
    skip(pool)
)]
pub async fn read_customer_orders(
    pool: web::Data<DbPool>,
    path: web::Path<i32>
) -> Result<HttpResponse, StoreError>{
    let conn = get_pooled_connection(&pool).await?;

    let orders = get_customer_orders(conn, path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(orders))
}
