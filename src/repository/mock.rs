//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::customer::{Customer, NewCustomer, UpdateCustomer};
use crate::domain::types::EntityId;
use crate::repository::errors::RepositoryResult;
use crate::repository::{CustomerReader, CustomerWriter};

mock! {
    pub Repository {}

    impl CustomerReader for Repository {
        fn get_customer_by_id(&self, id: EntityId) -> RepositoryResult<Option<Customer>>;
        fn customer_exists(&self, id: EntityId) -> RepositoryResult<bool>;
        fn list_customers(&self) -> RepositoryResult<Vec<Customer>>;
        fn search_customers_by_name(&self, fragment: &str) -> RepositoryResult<Vec<Customer>>;
    }

    impl CustomerWriter for Repository {
        fn create_customer(&self, new_customer: &NewCustomer) -> RepositoryResult<Customer>;
        fn update_customer(
            &self,
            id: EntityId,
            updates: &UpdateCustomer,
        ) -> RepositoryResult<Customer>;
        fn delete_customer(&self, id: EntityId) -> RepositoryResult<()>;
    }
}
