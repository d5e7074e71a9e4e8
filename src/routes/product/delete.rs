use actix_web::{web, HttpResponse};

use crate::{db_interaction::{delete_product, StoreError}, utils::{get_pooled_connection, DbPool}};

#[tracing::instrument(
    "Deleting product by id",
    skip(pool)
)]
pub async fn remove_product(
    pool: web::Data<DbPool>,
    path: web::Path<i32>
) -> Result<HttpResponse, StoreError>{
    let conn = get_pooled_connection(&pool).await?;

    delete_product(conn, path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "message": "Product deleted" })))
}
