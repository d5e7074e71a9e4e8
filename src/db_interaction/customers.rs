use diesel::{ExpressionMethods, OptionalExtension, QueryDsl, RunQueryDsl, SelectableHelper};

use crate::{models::{Customer, CustomerChangeset, NewCustomer, Order}, schema::{customers, orders}, telemetry::spawn_blocking_with_tracing, utils::DbConnection};

use super::StoreError;

const ENTITY: &str = "Customer";

#[tracing::instrument(
    "Inserting customer into the database",
    skip(conn)
)]
pub async fn insert_customer(
    mut conn: DbConnection,
    new_customer: NewCustomer
) -> Result<Customer, StoreError> {

    let customer = spawn_blocking_with_tracing(move || {
        diesel::insert_into(customers::table)
            .values(&new_customer)
            .returning(Customer::as_returning())
            .get_result(&mut conn)
    })
    .await??;

    Ok(customer)
}

#[tracing::instrument(
    "Getting customer from the database",
    skip(conn)
)]
pub async fn get_customer(
    mut conn: DbConnection,
    customer_id: i32
) -> Result<Customer, StoreError> {

    spawn_blocking_with_tracing(move || {
        customers::table
            .find(customer_id)
            .select(Customer::as_select())
            .first(&mut conn)
            .optional()
    })
    .await??
    .ok_or(StoreError::not_found(ENTITY, customer_id))
}

#[tracing::instrument(
    "Updating customer in the database",
    skip(conn)
)]
pub async fn update_customer(
    mut conn: DbConnection,
    customer_id: i32,
    changeset: CustomerChangeset
) -> Result<Customer, StoreError> {

    spawn_blocking_with_tracing(move || {
        // diesel refuses an UPDATE with nothing to SET
        if changeset.is_empty(){
            return customers::table
                .find(customer_id)
                .select(Customer::as_select())
                .first(&mut conn)
                .optional();
        }

        diesel::update(customers::table.find(customer_id))
            .set(&changeset)
            .returning(Customer::as_returning())
            .get_result(&mut conn)
            .optional()
    })
    .await??
    .ok_or(StoreError::not_found(ENTITY, customer_id))
}

#[tracing::instrument(
    "Deleting customer from the database",
    skip(conn)
)]
pub async fn delete_customer(
    mut conn: DbConnection,
    customer_id: i32
) -> Result<(), StoreError> {

    let affected_rows = spawn_blocking_with_tracing(move || {
        diesel::delete(customers::table.find(customer_id))
            .execute(&mut conn)
    })
    .await??;

    if affected_rows == 0 {
        return Err(StoreError::not_found(ENTITY, customer_id))
    }

    Ok(())
}

#[tracing::instrument(
    "Getting orders placed by customer",
    skip(conn)
)]
pub async fn get_customer_orders(
    mut conn: DbConnection,
    customer_id: i32
) -> Result<Vec<Order>, StoreError> {

    let res = spawn_blocking_with_tracing(move || -> Result<Option<Vec<Order>>, diesel::result::Error> {
        let exists = customers::table
            .find(customer_id)
            .select(customers::id)
            .first::<i32>(&mut conn)
            .optional()?
            .is_some();

        if !exists {
            return Ok(None);
        }

        orders::table
            .filter(orders::customer_id.eq(customer_id))
            .order(orders::id.asc())
            .select(Order::as_select())
            .load(&mut conn)
            .map(Some)
    })
    .await??;

    res.ok_or(StoreError::not_found(ENTITY, customer_id))
}
