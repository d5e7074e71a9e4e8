use std::{error::Error, fmt::Debug};

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel::{Connection, ExpressionMethods, OptionalExtension, QueryDsl, RunQueryDsl, SelectableHelper};
use thiserror::Error;

use crate::{models::{NewOrder, NewOrderItem, Order, OrderItem, OrderLine}, schema::{order_items, orders, products}, telemetry::spawn_blocking_with_tracing, utils::{error_fmt_chain, DbConnection, PoolGetError}};

use super::StoreError;

const ENTITY: &str = "Order";

// Error associated with placing an order and decrementing product stock
#[derive(Error)]
pub enum PlaceOrderError{
    #[error("insufficient stock for product ID {0}")]
    InsufficientStock(i32),
    #[error("invalid quantity {quantity} for product ID {product_id}")]
    InvalidQuantity{ product_id: i32, quantity: i32 },
    #[error("Customer with id {0} not found")]
    CustomerNotFound(i32),
    #[error("Failed to get connection from pool")]
    PoolError(#[from] PoolGetError),
    #[error("Tokio threadpool error occured")]
    ThreadpoolError(#[from] tokio::task::JoinError),
    #[error("Failed to run query")]
    RunQueryError(#[from] DieselError)
}

impl Debug for PlaceOrderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)?;
        error_fmt_chain(f, &self.source())
    }
}

// Rejects lines that would not decrement stock, first offending line wins
pub fn validate_order_lines(lines: &[OrderLine]) -> Result<(), PlaceOrderError>{
    match lines.iter().find(|line| line.quantity <= 0) {
        Some(line) => Err(PlaceOrderError::InvalidQuantity{
            product_id: line.product_id,
            quantity: line.quantity
        }),
        None => Ok(())
    }
}

#[tracing::instrument(
    "Placing order and decrementing product stock",
    skip(conn, lines),
    fields(line_count = lines.len())
)]
pub async fn place_order(
    mut conn: DbConnection,
    customer_id: i32,
    lines: Vec<OrderLine>
) -> Result<Order, PlaceOrderError> {
    validate_order_lines(&lines)?;

    let order = spawn_blocking_with_tracing(move || {
        // Any error below rolls back the header and every earlier decrement
        conn.transaction::<Order, PlaceOrderError, _>(|conn| {
            let order = diesel::insert_into(orders::table)
                .values(&NewOrder::pending(customer_id))
                .returning(Order::as_returning())
                .get_result(conn)
                .map_err(|e| {
                    match e {
                        DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => {
                            PlaceOrderError::CustomerNotFound(customer_id)
                        },
                        _ => e.into()
                    }
                })?;

            for line in lines.iter() {
                // Check and decrement in one statement so concurrent orders cannot oversell
                let unit_price: Option<f64> = diesel::update(products::table.find(line.product_id))
                    .set(products::stock_level.eq(products::stock_level - line.quantity))
                    .filter(products::stock_level.ge(line.quantity))
                    .returning(products::price)
                    .get_result(conn)
                    .optional()?;

                let Some(unit_price) = unit_price else {
                    tracing::info!(product_id = line.product_id, "Order line has insufficient stock");
                    return Err(PlaceOrderError::InsufficientStock(line.product_id))
                };

                diesel::insert_into(order_items::table)
                    .values(NewOrderItem::priced(order.id, line, unit_price))
                    .execute(conn)?;
            }

            Ok(order)
        })
    })
    .await??;

    Ok(order)
}

#[tracing::instrument(
    "Getting order from the database",
    skip(conn)
)]
pub async fn get_order(
    mut conn: DbConnection,
    order_id: i32
) -> Result<Order, StoreError> {

    spawn_blocking_with_tracing(move || {
        orders::table
            .find(order_id)
            .select(Order::as_select())
            .first(&mut conn)
            .optional()
    })
    .await??
    .ok_or(StoreError::not_found(ENTITY, order_id))
}

#[tracing::instrument(
    "Getting items of order",
    skip(conn)
)]
pub async fn get_order_items(
    mut conn: DbConnection,
    order_id: i32
) -> Result<Vec<OrderItem>, StoreError> {

    let res = spawn_blocking_with_tracing(move || -> Result<Option<Vec<OrderItem>>, DieselError> {
        let exists = orders::table
            .find(order_id)
            .select(orders::id)
            .first::<i32>(&mut conn)
            .optional()?
            .is_some();

        if !exists {
            return Ok(None);
        }

        order_items::table
            .filter(order_items::order_id.eq(order_id))
            .order(order_items::id.asc())
            .select(OrderItem::as_select())
            .load(&mut conn)
            .map(Some)
    })
    .await??;

    res.ok_or(StoreError::not_found(ENTITY, order_id))
}

// Status is free text, no transition rules are enforced
#[tracing::instrument(
    "Updating order status",
    skip(conn)
)]
pub async fn update_order_status(
    mut conn: DbConnection,
    order_id: i32,
    status: String
) -> Result<Order, StoreError> {

    spawn_blocking_with_tracing(move || {
        diesel::update(orders::table.find(order_id))
            .set(orders::status.eq(status))
            .returning(Order::as_returning())
            .get_result(&mut conn)
            .optional()
    })
    .await??
    .ok_or(StoreError::not_found(ENTITY, order_id))
}
