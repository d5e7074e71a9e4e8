mod accounts;
mod customers;
mod orders;
mod products;

pub use accounts::*;
pub use customers::*;
pub use orders::*;
pub use products::*;

use std::{error::Error, fmt::Debug};

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use thiserror::Error;

use crate::utils::{error_fmt_chain, PoolGetError};

// Error shared by the single-entity store operations
#[derive(Error)]
pub enum StoreError{
    #[error("{entity} with id {id} not found")]
    NotFound{ entity: &'static str, id: i32 },
    #[error("{0}")]
    ConstraintViolation(String),
    #[error("Failed to get connection from pool")]
    PoolError(#[from] PoolGetError),
    #[error("Failed due to threadpool error")]
    ThreadpoolError(#[from] tokio::task::JoinError),
    #[error("Unexpected error occured")]
    UnexpectedError(#[from] anyhow::Error),
    #[error("Failed to run query")]
    QueryError(#[source] DieselError)
}

impl StoreError {
    pub fn not_found(entity: &'static str, id: i32) -> Self{
        StoreError::NotFound{ entity, id }
    }
}

// Constraint violations carry the database's message so callers see which key clashed
impl From<DieselError> for StoreError {
    fn from(e: DieselError) -> Self {
        match e {
            DieselError::DatabaseError(
                DatabaseErrorKind::UniqueViolation
                | DatabaseErrorKind::ForeignKeyViolation
                | DatabaseErrorKind::CheckViolation,
                ref info
            ) => StoreError::ConstraintViolation(info.message().to_string()),
            _ => StoreError::QueryError(e)
        }
    }
}

impl Debug for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)?;
        error_fmt_chain(f, &self.source())
    }
}
