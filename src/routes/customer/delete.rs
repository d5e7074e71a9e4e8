use actix_web::{web, HttpResponse};

use crate::{db_interaction::{delete_customer, StoreError}, utils::{get_pooled_connection, DbPool}};

#[tracing::instrument(
    "Deleting customer by id",
    skip(pool)
)]
pub async fn remove_customer(
    pool: web::Data<DbPool>,
    path: web::Path<i32>
) -> Result<HttpResponse, StoreError>{
    let conn = get_pooled_connection(&pool).await?;

    delete_customer(conn, path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "message": "Customer deleted" })))
}
