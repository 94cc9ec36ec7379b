//! Repository implementation for customers.

use chrono::Utc;
use diesel::prelude::*;

use crate::{
    domain::{
        customer::{Customer, NewCustomer, UpdateCustomer},
        types::EntityId,
    },
    models::customer::{
        Customer as DbCustomer, NewCustomer as DbNewCustomer, UpdateCustomer as DbUpdateCustomer,
    },
    repository::{
        CustomerReader, CustomerWriter, DieselRepository,
        errors::{RepositoryError, RepositoryResult},
    },
};

fn into_domain(rows: Vec<DbCustomer>) -> RepositoryResult<Vec<Customer>> {
    rows.into_iter()
        .map(|row| Customer::try_from(row).map_err(RepositoryError::from))
        .collect()
}

impl CustomerReader for DieselRepository {
    fn get_customer_by_id(&self, id: EntityId) -> RepositoryResult<Option<Customer>> {
        use crate::schema::customers;

        let mut conn = self.conn()?;
        let customer = customers::table
            .filter(customers::id.eq(id.as_bytes().to_vec()))
            .select(DbCustomer::as_select())
            .first::<DbCustomer>(&mut conn)
            .optional()?;

        customer
            .map(|c| Customer::try_from(c).map_err(RepositoryError::from))
            .transpose()
    }

    fn customer_exists(&self, id: EntityId) -> RepositoryResult<bool> {
        use crate::schema::customers;
        use diesel::dsl::exists;

        let mut conn = self.conn()?;
        let found = diesel::select(exists(
            customers::table.filter(customers::id.eq(id.as_bytes().to_vec())),
        ))
        .get_result::<bool>(&mut conn)?;

        Ok(found)
    }

    fn list_customers(&self) -> RepositoryResult<Vec<Customer>> {
        use crate::schema::customers;

        let mut conn = self.conn()?;
        let rows = customers::table
            .order((customers::created_at.asc(), customers::id.asc()))
            .select(DbCustomer::as_select())
            .load::<DbCustomer>(&mut conn)?;

        into_domain(rows)
    }

    fn search_customers_by_name(&self, fragment: &str) -> RepositoryResult<Vec<Customer>> {
        use crate::schema::customers;

        let mut conn = self.conn()?;
        let pattern = format!("%{fragment}%");

        let rows = customers::table
            .filter(customers::customer_name.like(&pattern))
            .order((customers::created_at.asc(), customers::id.asc()))
            .select(DbCustomer::as_select())
            .load::<DbCustomer>(&mut conn)?;

        into_domain(rows)
    }
}

impl CustomerWriter for DieselRepository {
    fn create_customer(&self, new_customer: &NewCustomer) -> RepositoryResult<Customer> {
        use crate::schema::customers;

        let mut conn = self.conn()?;
        let id = EntityId::new();
        let now = Utc::now().naive_utc();
        let insertable = DbNewCustomer::from_domain(&id, new_customer, now);

        let created = diesel::insert_into(customers::table)
            .values(&insertable)
            .returning(DbCustomer::as_returning())
            .get_result::<DbCustomer>(&mut conn)?;

        Ok(Customer::try_from(created)?)
    }

    fn update_customer(
        &self,
        id: EntityId,
        updates: &UpdateCustomer,
    ) -> RepositoryResult<Customer> {
        use crate::schema::customers;

        let mut conn = self.conn()?;
        let changes = DbUpdateCustomer::from_domain(updates, Utc::now().naive_utc());

        let target = customers::table.filter(customers::id.eq(id.as_bytes().to_vec()));

        let updated = diesel::update(target)
            .set((&changes, customers::version.eq(customers::version + 1)))
            .returning(DbCustomer::as_returning())
            .get_result::<DbCustomer>(&mut conn)?;

        Ok(Customer::try_from(updated)?)
    }

    fn delete_customer(&self, id: EntityId) -> RepositoryResult<()> {
        use crate::schema::customers;

        let mut conn = self.conn()?;

        diesel::delete(customers::table.filter(customers::id.eq(id.as_bytes().to_vec())))
            .execute(&mut conn)?;
        Ok(())
    }
}
