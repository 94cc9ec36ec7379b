//! Wire representation of a customer and its boundary validation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::domain::customer::{Customer, NewCustomer, UpdateCustomer};
use crate::domain::types::{EntityId, TypeConstraintError};

#[derive(Debug, Error)]
/// Errors that can occur when checking a [`CustomerDto`] at the boundary.
pub enum CustomerDtoError {
    #[error("{0}")]
    Validation(#[from] ValidationErrors),

    #[error("field `{0}` is assigned by the server and must not be provided")]
    ServerOwnedField(&'static str),

    #[error("field `id` is required")]
    MissingId,
}

/// JSON shape accepted and returned by `/api/customer`.
#[derive(
    Clone, Debug, Default, Serialize, Deserialize, Validate, ToSchema, PartialEq, Eq, Hash,
)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDto {
    #[schema(value_type = Option<String>, format = Uuid)]
    pub id: Option<EntityId>,
    pub version: Option<i32>,
    pub created_date: Option<DateTime<Utc>>,
    pub last_modified_date: Option<DateTime<Utc>>,
    #[serde(default)]
    #[schema(min_length = 10, max_length = 100)]
    #[validate(custom(function = "non_blank"), length(min = 10, max = 100))]
    pub customer_name: String,
    #[serde(default)]
    #[schema(min_length = 1, max_length = 2)]
    #[validate(custom(function = "non_blank"), length(min = 1, max = 2))]
    pub table_number: String,
}

fn non_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("must not be blank".into());
        return Err(err);
    }
    Ok(())
}

impl CustomerDto {
    pub fn new(customer_name: impl Into<String>, table_number: impl Into<String>) -> Self {
        Self {
            customer_name: customer_name.into(),
            table_number: table_number.into(),
            ..Self::default()
        }
    }

    /// Checks a payload submitted for creation: field rules hold and no
    /// store-owned field is present.
    pub fn validate_for_create(&self) -> Result<(), CustomerDtoError> {
        self.validate()?;
        if self.id.is_some() {
            return Err(CustomerDtoError::ServerOwnedField("id"));
        }
        self.ensure_audit_fields_absent()
    }

    /// Checks a payload submitted for update: field rules hold, `id` is present
    /// and the remaining store-owned fields are absent.
    pub fn validate_for_update(&self) -> Result<(), CustomerDtoError> {
        self.validate()?;
        if self.id.is_none() {
            return Err(CustomerDtoError::MissingId);
        }
        self.ensure_audit_fields_absent()
    }

    fn ensure_audit_fields_absent(&self) -> Result<(), CustomerDtoError> {
        if self.version.is_some() {
            return Err(CustomerDtoError::ServerOwnedField("version"));
        }
        if self.created_date.is_some() {
            return Err(CustomerDtoError::ServerOwnedField("createdDate"));
        }
        if self.last_modified_date.is_some() {
            return Err(CustomerDtoError::ServerOwnedField("lastModifiedDate"));
        }
        Ok(())
    }

    pub fn to_new_customer(&self) -> Result<NewCustomer, TypeConstraintError> {
        NewCustomer::try_new(self.customer_name.as_str(), self.table_number.as_str())
    }

    pub fn to_update_customer(&self) -> Result<UpdateCustomer, TypeConstraintError> {
        UpdateCustomer::try_new(self.customer_name.as_str(), self.table_number.as_str())
    }
}

impl From<&Customer> for CustomerDto {
    fn from(customer: &Customer) -> Self {
        Self {
            id: Some(customer.audit.id),
            version: Some(customer.audit.version),
            created_date: Some(customer.audit.created_at.and_utc()),
            last_modified_date: Some(customer.audit.updated_at.and_utc()),
            customer_name: customer.name.as_str().to_string(),
            table_number: customer.table_number.as_str().to_string(),
        }
    }
}

impl From<Customer> for CustomerDto {
    fn from(customer: Customer) -> Self {
        Self::from(&customer)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::domain::customer::AuditFields;
    use crate::domain::types::{CustomerName, TableNumber};

    #[test]
    fn valid_create_payload_passes() {
        let dto = CustomerDto::new("James Bond", "10");
        assert!(dto.validate_for_create().is_ok());
    }

    #[test]
    fn blank_and_short_fields_are_rejected() {
        let blank = CustomerDto::new("            ", "1");
        assert!(matches!(
            blank.validate_for_create(),
            Err(CustomerDtoError::Validation(_))
        ));

        let short = CustomerDto::new("James", "1");
        let err = short.validate_for_create().unwrap_err();
        match err {
            CustomerDtoError::Validation(errors) => {
                assert!(errors.field_errors().contains_key("customer_name"));
            }
            other => panic!("unexpected error: {other:?}"),
        }

        let long_table = CustomerDto::new("James Bond", "123");
        assert!(long_table.validate_for_create().is_err());

        let empty = CustomerDto::default();
        assert!(empty.validate_for_create().is_err());
    }

    #[test]
    fn padded_values_are_converted_unchanged() {
        let dto = CustomerDto::new("  Anna Lee ", "7 ");
        assert!(dto.validate_for_create().is_ok());

        let new = dto.to_new_customer().unwrap();
        assert_eq!(new.name.as_str(), "  Anna Lee ");
        assert_eq!(new.table_number.as_str(), "7 ");
    }

    #[test]
    fn create_rejects_server_owned_fields() {
        let with_id = CustomerDto {
            id: Some(EntityId::new()),
            ..CustomerDto::new("James Bond", "10")
        };
        assert!(matches!(
            with_id.validate_for_create(),
            Err(CustomerDtoError::ServerOwnedField("id"))
        ));

        let with_version = CustomerDto {
            version: Some(1),
            ..CustomerDto::new("James Bond", "10")
        };
        assert!(matches!(
            with_version.validate_for_create(),
            Err(CustomerDtoError::ServerOwnedField("version"))
        ));

        let with_created = CustomerDto {
            created_date: Some(Utc::now()),
            ..CustomerDto::new("James Bond", "10")
        };
        assert!(matches!(
            with_created.validate_for_create(),
            Err(CustomerDtoError::ServerOwnedField("createdDate"))
        ));
    }

    #[test]
    fn update_requires_id_only() {
        let without_id = CustomerDto::new("James Bond", "8");
        assert!(matches!(
            without_id.validate_for_update(),
            Err(CustomerDtoError::MissingId)
        ));

        let with_id = CustomerDto {
            id: Some(EntityId::new()),
            ..CustomerDto::new("James Bond", "8")
        };
        assert!(with_id.validate_for_update().is_ok());

        let with_version = CustomerDto {
            version: Some(4),
            ..with_id.clone()
        };
        assert!(matches!(
            with_version.validate_for_update(),
            Err(CustomerDtoError::ServerOwnedField("version"))
        ));

        let with_created = CustomerDto {
            created_date: Some(Utc::now()),
            ..with_id.clone()
        };
        assert!(matches!(
            with_created.validate_for_update(),
            Err(CustomerDtoError::ServerOwnedField("createdDate"))
        ));

        let with_modified = CustomerDto {
            last_modified_date: Some(Utc::now()),
            ..with_id
        };
        assert!(matches!(
            with_modified.validate_for_update(),
            Err(CustomerDtoError::ServerOwnedField("lastModifiedDate"))
        ));
    }

    #[test]
    fn deserializes_camel_case_and_defaults_missing_strings() {
        let dto: CustomerDto =
            serde_json::from_str(r#"{"customerName":"James Bond","tableNumber":"10"}"#).unwrap();
        assert_eq!(dto, CustomerDto::new("James Bond", "10"));

        let empty: CustomerDto = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.customer_name, "");
        assert!(empty.id.is_none());
    }

    #[test]
    fn customer_maps_to_dto() {
        let now = Utc::now().naive_utc();
        let customer = Customer {
            audit: AuditFields {
                id: EntityId::new(),
                version: 2,
                created_at: now,
                updated_at: now,
            },
            name: CustomerName::new("Marc Lee Senior").unwrap(),
            table_number: TableNumber::new("2").unwrap(),
        };

        let dto = CustomerDto::from(&customer);

        assert_eq!(dto.id, Some(customer.audit.id));
        assert_eq!(dto.version, Some(2));
        assert_eq!(dto.created_date, Some(now.and_utc()));
        assert_eq!(dto.customer_name, "Marc Lee Senior");
        assert_eq!(dto.table_number, "2");

        let json = serde_json::to_value(&dto).unwrap();
        assert!(json.get("lastModifiedDate").is_some());
        assert_eq!(json["tableNumber"], "2");
    }
}
