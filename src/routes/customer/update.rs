use actix_web::{web, HttpResponse};

use crate::{db_interaction::{update_customer, StoreError}, models::CustomerChangeset, utils::{get_pooled_connection, DbPool}};

#[tracing::instrument(
    "Updating customer",
    skip(pool, json)
)]
pub async fn edit_customer(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
    json: web::Json<CustomerChangeset>
) -> Result<HttpResponse, StoreError>{
    let conn = get_pooled_connection(&pool).await?;

    let customer = update_customer(conn, path.into_inner(), json.into_inner()).await?;

    Ok(HttpResponse::Ok().json(customer))
}
