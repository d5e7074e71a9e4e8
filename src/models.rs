use chrono::{DateTime, Utc};
use diesel::prelude::{AsChangeset, Identifiable, Insertable, Queryable, Selectable};
use serde::{Deserialize, Deserializer};
use serde::Serialize;

use crate::schema::{customer_accounts, customers, order_items, orders, products};

pub const DEFAULT_ORDER_STATUS: &str = "Pending";

#[derive(Queryable, Selectable, Identifiable, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[diesel(table_name = customers)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Customer{
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone_number: Option<String>
}

#[derive(Insertable, Deserialize, Debug)]
#[diesel(table_name = customers)]
pub struct NewCustomer{
    pub name: String,
    pub email: String,
    pub phone_number: Option<String>
}

// Fields left as None keep their stored value; phone_number Some(None) clears it
#[derive(AsChangeset, Deserialize, Debug, Default)]
#[diesel(table_name = customers)]
pub struct CustomerChangeset{
    pub name: Option<String>,
    pub email: Option<String>,
    #[serde(default, deserialize_with = "present_field")]
    pub phone_number: Option<Option<String>>
}

// Tells a key sent as null (Some(None)) apart from an absent key (None via serde default)
fn present_field<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl CustomerChangeset {
    pub fn is_empty(&self) -> bool{
        self.name.is_none() && self.email.is_none() && self.phone_number.is_none()
    }
}

// Password holds the argon2 hash and is never sent back to clients
#[derive(Queryable, Selectable, Identifiable, Serialize, Debug, Clone)]
#[diesel(table_name = customer_accounts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CustomerAccount{
    pub id: i32,
    pub customer_id: i32,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String
}

#[derive(Insertable)]
#[diesel(table_name = customer_accounts)]
pub struct NewCustomerAccount{
    pub customer_id: i32,
    pub username: String,
    pub password: String
}

#[derive(Queryable, Selectable, Identifiable, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[diesel(table_name = products)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Product{
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub stock_level: i32
}

#[derive(Insertable, Deserialize, Debug)]
#[diesel(table_name = products)]
pub struct NewProduct{
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub stock_level: i32
}

#[derive(AsChangeset, Deserialize, Debug, Default)]
#[diesel(table_name = products)]
pub struct ProductChangeset{
    pub name: Option<String>,
    pub price: Option<f64>,
    pub stock_level: Option<i32>
}

impl ProductChangeset {
    pub fn is_empty(&self) -> bool{
        self.name.is_none() && self.price.is_none() && self.stock_level.is_none()
    }
}

#[derive(Queryable, Selectable, Identifiable, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[diesel(table_name = orders)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Order{
    pub id: i32,
    pub customer_id: i32,
    pub order_date: DateTime<Utc>,
    pub status: String
}

#[derive(Insertable, Debug)]
#[diesel(table_name = orders)]
pub struct NewOrder{
    pub customer_id: i32,
    pub order_date: DateTime<Utc>,
    pub status: String
}

impl NewOrder {
    // Order header as it is first written, before any line is processed
    pub fn pending(customer_id: i32) -> Self{
        NewOrder{
            customer_id,
            order_date: Utc::now(),
            status: DEFAULT_ORDER_STATUS.to_string()
        }
    }
}

#[derive(Queryable, Selectable, Identifiable, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[diesel(table_name = order_items)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OrderItem{
    pub id: i32,
    pub order_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub price: f64
}

#[derive(Insertable, Debug, PartialEq)]
#[diesel(table_name = order_items)]
pub struct NewOrderItem{
    pub order_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub price: f64
}

impl NewOrderItem {
    // price stores the line total at the unit price read during the stock decrement
    pub fn priced(order_id: i32, line: &OrderLine, unit_price: f64) -> Self{
        NewOrderItem{
            order_id,
            product_id: line.product_id,
            quantity: line.quantity,
            price: unit_price * f64::from(line.quantity)
        }
    }
}

// One requested product + quantity within an order request
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
pub struct OrderLine{
    pub product_id: i32,
    pub quantity: i32
}
