use actix_web::{web, HttpResponse};

use crate::{db_interaction::{insert_customer, StoreError}, models::NewCustomer, utils::{get_pooled_connection, DbPool}};

#[tracing::instrument(
    "Creating customer",
    skip(pool, json),
    fields(customer_email = %json.email)
)]
pub async fn create_customer(
    pool: web::Data<DbPool>,
    json: web::Json<NewCustomer>
) -> Result<HttpResponse, StoreError>{
    let conn = get_pooled_connection(&pool).await?;

    let customer = insert_customer(conn, json.into_inner()).await?;

    Ok(HttpResponse::Created().json(customer))
}
