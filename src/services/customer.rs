//! Customer use cases: one function per operation exposed by the API.
//!
//! Absent arguments are modelled as `None` and rejected with
//! [`ServiceError::InvalidInput`]. Unknown identifiers yield
//! [`ServiceError::NotFound`].

use std::collections::HashSet;

use crate::domain::types::EntityId;
use crate::dto::customer::CustomerDto;
use crate::repository::{CustomerReader, CustomerWriter};
use crate::services::{ServiceError, ServiceResult};

fn parse_id(id: Option<&str>) -> ServiceResult<EntityId> {
    let raw =
        id.ok_or_else(|| ServiceError::InvalidInput("Customer id was not provided".into()))?;
    raw.parse()
        .map_err(|_| ServiceError::InvalidInput(format!("Customer id `{raw}` is not valid")))
}

fn unknown_id(id: EntityId) -> ServiceError {
    ServiceError::NotFound(format!("Customer id `{id}` is unknown"))
}

/// Persists a new customer and returns it with the store-assigned fields.
pub fn add_customer<R>(repo: &R, payload: Option<CustomerDto>) -> ServiceResult<CustomerDto>
where
    R: CustomerWriter + ?Sized,
{
    let dto = payload.ok_or_else(|| {
        ServiceError::InvalidInput("Customer details were not provided".to_string())
    })?;

    let new_customer = dto.to_new_customer()?;
    let created = repo
        .create_customer(&new_customer)
        .map_err(ServiceError::from)?;

    log::info!("Created customer {}", created.id());
    Ok(created.into())
}

/// Fetches a single customer by its identifier.
pub fn find_customer_by_id<R>(repo: &R, id: Option<&str>) -> ServiceResult<CustomerDto>
where
    R: CustomerReader + ?Sized,
{
    let id = parse_id(id)?;

    match repo.get_customer_by_id(id).map_err(ServiceError::from)? {
        Some(customer) => Ok(customer.into()),
        None => Err(unknown_id(id)),
    }
}

/// Overwrites the name and table number of an existing customer.
///
/// The payload must carry the `id` of a stored record; updating an unknown id
/// fails with [`ServiceError::NotFound`] instead of creating a new record.
pub fn update_customer<R>(repo: &R, payload: Option<CustomerDto>) -> ServiceResult<CustomerDto>
where
    R: CustomerReader + CustomerWriter + ?Sized,
{
    let dto = payload.ok_or_else(|| {
        ServiceError::InvalidInput("Customer details were not provided".to_string())
    })?;
    let id = dto
        .id
        .ok_or_else(|| ServiceError::InvalidInput("Customer id was not provided".to_string()))?;

    let updates = dto.to_update_customer()?;

    if !repo.customer_exists(id).map_err(ServiceError::from)? {
        return Err(unknown_id(id));
    }

    let updated = repo
        .update_customer(id, &updates)
        .map_err(ServiceError::from)?;

    log::info!(
        "Updated customer {} to version {}",
        updated.id(),
        updated.audit.version
    );
    Ok(updated.into())
}

/// Removes a customer. The record must exist.
pub fn delete_customer<R>(repo: &R, id: Option<&str>) -> ServiceResult<()>
where
    R: CustomerReader + CustomerWriter + ?Sized,
{
    let id = parse_id(id)?;

    if !repo.customer_exists(id).map_err(ServiceError::from)? {
        return Err(unknown_id(id));
    }

    repo.delete_customer(id).map_err(ServiceError::from)?;

    log::info!("Deleted customer {id}");
    Ok(())
}

/// Lists customers whose name contains `pattern`, in store order.
pub fn find_customers_by_name<R>(
    repo: &R,
    pattern: Option<&str>,
) -> ServiceResult<Vec<CustomerDto>>
where
    R: CustomerReader + ?Sized,
{
    let pattern = pattern.ok_or_else(|| {
        ServiceError::InvalidInput("Customer name pattern was not provided".to_string())
    })?;

    let customers = repo
        .search_customers_by_name(pattern)
        .map_err(ServiceError::from)?;

    Ok(customers.into_iter().map(CustomerDto::from).collect())
}

/// Returns every stored customer. Equal records collapse into one entry.
pub fn find_all_customers<R>(repo: &R) -> ServiceResult<HashSet<CustomerDto>>
where
    R: CustomerReader + ?Sized,
{
    let customers = repo.list_customers().map_err(ServiceError::from)?;

    Ok(customers.into_iter().map(CustomerDto::from).collect())
}
