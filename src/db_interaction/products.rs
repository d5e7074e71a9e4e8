use diesel::{ExpressionMethods, OptionalExtension, QueryDsl, RunQueryDsl, SelectableHelper};

use crate::{models::{NewProduct, Product, ProductChangeset}, schema::products, telemetry::spawn_blocking_with_tracing, utils::DbConnection};

use super::StoreError;

const ENTITY: &str = "Product";

#[tracing::instrument(
    "Inserting product into the database",
    skip(conn)
)]
pub async fn insert_product(
    mut conn: DbConnection,
    new_product: NewProduct
) -> Result<Product, StoreError> {

    let product = spawn_blocking_with_tracing(move || {
        diesel::insert_into(products::table)
            .values(&new_product)
            .returning(Product::as_returning())
            .get_result(&mut conn)
    })
    .await??;

    Ok(product)
}

#[tracing::instrument(
    "Getting product from the database",
    skip(conn)
)]
pub async fn get_product(
    mut conn: DbConnection,
    product_id: i32
) -> Result<Product, StoreError> {

    spawn_blocking_with_tracing(move || {
        products::table
            .find(product_id)
            .select(Product::as_select())
            .first(&mut conn)
            .optional()
    })
    .await??
    .ok_or(StoreError::not_found(ENTITY, product_id))
}

#[tracing::instrument(
    "Getting all products from the database",
    skip_all
)]
pub async fn list_products(
    mut conn: DbConnection
) -> Result<Vec<Product>, StoreError> {

    let res = spawn_blocking_with_tracing(move || {
        products::table
            .order(products::id.asc())
            .select(Product::as_select())
            .load(&mut conn)
    })
    .await??;

    Ok(res)
}

#[tracing::instrument(
    "Updating product in the database",
    skip(conn)
)]
pub async fn update_product(
    mut conn: DbConnection,
    product_id: i32,
    changeset: ProductChangeset
) -> Result<Product, StoreError> {

    spawn_blocking_with_tracing(move || {
        if changeset.is_empty(){
            return products::table
                .find(product_id)
                .select(Product::as_select())
                .first(&mut conn)
                .optional();
        }

        diesel::update(products::table.find(product_id))
            .set(&changeset)
            .returning(Product::as_returning())
            .get_result(&mut conn)
            .optional()
    })
    .await??
    .ok_or(StoreError::not_found(ENTITY, product_id))
}

#[tracing::instrument(
    "Deleting product from the database",
    skip(conn)
)]
pub async fn delete_product(
    mut conn: DbConnection,
    product_id: i32
) -> Result<(), StoreError> {

    let affected_rows = spawn_blocking_with_tracing(move || {
        diesel::delete(products::table.find(product_id))
            .execute(&mut conn)
    })
    .await??;

    if affected_rows == 0 {
        return Err(StoreError::not_found(ENTITY, product_id))
    }

    Ok(())
}
