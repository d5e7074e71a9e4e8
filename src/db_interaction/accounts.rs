use anyhow::Context;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel::{ExpressionMethods, OptionalExtension, QueryDsl, RunQueryDsl, SelectableHelper};
use secrecy::{ExposeSecret, SecretString};

use crate::{models::{CustomerAccount, NewCustomerAccount}, password::compute_password_hash, schema::customer_accounts, telemetry::spawn_blocking_with_tracing, utils::DbConnection};

use super::StoreError;

#[tracing::instrument(
    "Inserting customer account into the database",
    skip(conn, password)
)]
pub async fn insert_customer_account(
    mut conn: DbConnection,
    customer_id: i32,
    username: String,
    password: SecretString
) -> Result<CustomerAccount, StoreError> {

    let password_hash = spawn_blocking_with_tracing(move || {
        compute_password_hash(password)
    })
    .await
    .context("Failed due to threadpool error")??;

    let account = NewCustomerAccount{
        customer_id,
        username,
        password: password_hash.expose_secret().to_string()
    };

    let res = spawn_blocking_with_tracing(move || {
        diesel::insert_into(customer_accounts::table)
            .values(&account)
            .returning(CustomerAccount::as_returning())
            .get_result(&mut conn)
            .map_err(|e| {
                match e {
                    DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => {
                        StoreError::not_found("Customer", customer_id)
                    },
                    _ => e.into()
                }
            })
    })
    .await??;

    Ok(res)
}

#[tracing::instrument(
    "Getting account of customer",
    skip(conn)
)]
pub async fn get_customer_account(
    mut conn: DbConnection,
    customer_id: i32
) -> Result<CustomerAccount, StoreError> {

    spawn_blocking_with_tracing(move || {
        customer_accounts::table
            .filter(customer_accounts::customer_id.eq(customer_id))
            .select(CustomerAccount::as_select())
            .first(&mut conn)
            .optional()
    })
    .await??
    .ok_or(StoreError::not_found("CustomerAccount for customer", customer_id))
}
