use actix_web::{web, HttpResponse};

use crate::{db_interaction::{get_customer_account, StoreError}, utils::{get_pooled_connection, DbPool}};

#[tracing::instrument(
    "Getting account of customer",
    skip(pool)
)]
pub async fn read_account(
    pool: web::Data<DbPool>,
    path: web::Path<i32>
) -> Result<HttpResponse, StoreError>{
    let conn = get_pooled_connection(&pool).await?;

    let account = get_customer_account(conn, path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(account))
}
