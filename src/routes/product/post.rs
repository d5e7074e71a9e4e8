use actix_web::{web, HttpResponse};

use crate::{db_interaction::{insert_product, StoreError}, models::NewProduct, utils::{get_pooled_connection, DbPool}};

#[tracing::instrument(
    "Creating product",
    skip(pool)
)]
pub async fn create_product(
    pool: web::Data<DbPool>,
    json: web::Json<NewProduct>
) -> Result<HttpResponse, StoreError>{
    let conn = get_pooled_connection(&pool).await?;

    let product = insert_product(conn, json.into_inner()).await?;

    Ok(HttpResponse::Created().json(product))
}
