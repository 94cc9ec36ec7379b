//! Persistence traits for customers and their Diesel-backed implementation.

use crate::{
    db::{DbConnection, DbPool, get_connection},
    domain::{
        customer::{Customer, NewCustomer, UpdateCustomer},
        types::EntityId,
    },
    repository::errors::RepositoryResult,
};

pub mod customer;
pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

/// Read side of the customer store.
pub trait CustomerReader {
    fn get_customer_by_id(&self, id: EntityId) -> RepositoryResult<Option<Customer>>;
    fn customer_exists(&self, id: EntityId) -> RepositoryResult<bool>;
    /// All customers ordered by creation time.
    fn list_customers(&self) -> RepositoryResult<Vec<Customer>>;
    /// Customers whose name contains `fragment`, using the store's `LIKE` semantics.
    fn search_customers_by_name(&self, fragment: &str) -> RepositoryResult<Vec<Customer>>;
}

/// Write side of the customer store.
pub trait CustomerWriter {
    /// Inserts a new record. Identity, version and timestamps are assigned here.
    fn create_customer(&self, new_customer: &NewCustomer) -> RepositoryResult<Customer>;
    /// Overwrites an existing record and bumps its version.
    /// Returns [`errors::RepositoryError::NotFound`] when no row matches.
    fn update_customer(&self, id: EntityId, updates: &UpdateCustomer)
    -> RepositoryResult<Customer>;
    /// Removes the record. Deleting a missing id is a no-op.
    fn delete_customer(&self, id: EntityId) -> RepositoryResult<()>;
}

/// Diesel implementation of the customer store backed by a shared pool.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(get_connection(&self.pool)?)
    }
}
