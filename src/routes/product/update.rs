use actix_web::{web, HttpResponse};

use crate::{db_interaction::{update_product, StoreError}, models::ProductChangeset, utils::{get_pooled_connection, DbPool}};

#[tracing::instrument(
    "Updating product",
    skip(pool)
)]
pub async fn edit_product(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
    json: web::Json<ProductChangeset>
) -> Result<HttpResponse, StoreError>{
    let conn = get_pooled_connection(&pool).await?;

    let product = update_product(conn, path.into_inner(), json.into_inner()).await?;

    Ok(HttpResponse::Ok().json(product))
}
