use actix_web::{web, HttpResponse};

use crate::{db_interaction::{get_product, list_products, StoreError}, utils::{get_pooled_connection, DbPool}};

#[tracing::instrument(
    "Getting product by id",
    skip(pool)
)]
pub async fn read_product(
    pool: web::Data<DbPool>,
    path: web::Path<i32>
) -> Result<HttpResponse, StoreError>{
    let conn = get_pooled_connection(&pool).await?;

    let product = get_product(conn, path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(product))
}

#[tracing::instrument(
    "Get all products",
    skip(pool)
)]
pub async fn list_all_products(
    pool: web::Data<DbPool>
) -> Result<HttpResponse, StoreError>{
    let conn = get_pooled_connection(&pool).await?;

    let products = list_products(conn).await?;

    Ok(HttpResponse::Ok().json(products))
}
