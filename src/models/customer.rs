use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::customer::{
    AuditFields, Customer as DomainCustomer, NewCustomer as DomainNewCustomer,
    UpdateCustomer as DomainUpdateCustomer,
};
use crate::domain::types::{CustomerName, EntityId, TableNumber, TypeConstraintError};

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = crate::schema::customers)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
/// Diesel model for [`crate::domain::customer::Customer`].
pub struct Customer {
    pub id: Vec<u8>,
    pub version: i32,
    pub customer_name: String,
    pub table_number: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::customers)]
/// Insertable form of [`Customer`].
pub struct NewCustomer<'a> {
    pub id: &'a [u8],
    pub version: i32,
    pub customer_name: &'a str,
    pub table_number: &'a str,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl<'a> NewCustomer<'a> {
    /// Pairs the domain payload with the store-assigned identity and timestamps.
    pub fn from_domain(
        id: &'a EntityId,
        customer: &'a DomainNewCustomer,
        now: NaiveDateTime,
    ) -> Self {
        Self {
            id: id.as_bytes(),
            version: 0,
            customer_name: customer.name.as_str(),
            table_number: customer.table_number.as_str(),
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::customers)]
/// Data used when updating a [`Customer`] record. The version bump is applied
/// in SQL by the repository.
pub struct UpdateCustomer<'a> {
    pub customer_name: &'a str,
    pub table_number: &'a str,
    pub updated_at: NaiveDateTime,
}

impl<'a> UpdateCustomer<'a> {
    pub fn from_domain(updates: &'a DomainUpdateCustomer, now: NaiveDateTime) -> Self {
        Self {
            customer_name: updates.name.as_str(),
            table_number: updates.table_number.as_str(),
            updated_at: now,
        }
    }
}

impl TryFrom<Customer> for DomainCustomer {
    type Error = TypeConstraintError;

    fn try_from(customer: Customer) -> Result<Self, Self::Error> {
        Ok(Self {
            audit: AuditFields {
                id: EntityId::from_bytes(&customer.id)?,
                version: customer.version,
                created_at: customer.created_at,
                updated_at: customer.updated_at,
            },
            name: CustomerName::new(customer.customer_name)?,
            table_number: TableNumber::new(customer.table_number)?,
        })
    }
}
