use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{CustomerName, EntityId, TableNumber, TypeConstraintError};

/// Identity, optimistic-concurrency counter and audit timestamps owned by the
/// store. Embedded into every persisted entity.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct AuditFields {
    pub id: EntityId,
    /// Incremented by the store on every update. Not used for conflict checks.
    pub version: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Customer {
    pub audit: AuditFields,
    pub name: CustomerName,
    pub table_number: TableNumber,
}

impl Customer {
    pub fn id(&self) -> EntityId {
        self.audit.id
    }
}

/// Data required to persist a new customer. Identity and audit fields are
/// assigned by the store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewCustomer {
    pub name: CustomerName,
    pub table_number: TableNumber,
}

impl NewCustomer {
    #[must_use]
    pub fn new(name: CustomerName, table_number: TableNumber) -> Self {
        Self { name, table_number }
    }

    /// Builds a new customer from raw strings, enforcing domain constraints.
    pub fn try_new(
        name: impl Into<String>,
        table_number: impl Into<String>,
    ) -> Result<Self, TypeConstraintError> {
        Ok(Self {
            name: CustomerName::new(name)?,
            table_number: TableNumber::new(table_number)?,
        })
    }
}

/// Replacement values written by an update.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpdateCustomer {
    pub name: CustomerName,
    pub table_number: TableNumber,
}

impl UpdateCustomer {
    #[must_use]
    pub fn new(name: CustomerName, table_number: TableNumber) -> Self {
        Self { name, table_number }
    }

    pub fn try_new(
        name: impl Into<String>,
        table_number: impl Into<String>,
    ) -> Result<Self, TypeConstraintError> {
        Ok(Self {
            name: CustomerName::new(name)?,
            table_number: TableNumber::new(table_number)?,
        })
    }
}
