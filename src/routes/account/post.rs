use actix_web::{web, HttpResponse};
use secrecy::SecretString;
use serde::Deserialize;

use crate::{db_interaction::{insert_customer_account, StoreError}, utils::{get_pooled_connection, DbPool}};

#[derive(Deserialize, Debug)]
pub struct AccountJson{
    pub username: String,
    pub password: SecretString
}

#[tracing::instrument(
    "Creating account for customer",
    skip(pool, json),
    fields(username = %json.username)
)]
pub async fn create_account(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
    json: web::Json<AccountJson>
) -> Result<HttpResponse, StoreError>{
    let AccountJson{ username, password } = json.into_inner();

    let conn = get_pooled_connection(&pool).await?;

    let account = insert_customer_account(conn, path.into_inner(), username, password).await?;

    Ok(HttpResponse::Created().json(account))
}
