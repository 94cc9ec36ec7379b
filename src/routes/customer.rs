//! Routes exposing the customer use cases under `/api/customer`.

use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::dto::customer::CustomerDto;
use crate::repository::DieselRepository;
use crate::routes::{ErrorBody, error_response};
use crate::services::{ServiceError, customer as customer_service};

/// Create a customer. Server-owned fields must be absent from the body.
#[utoipa::path(
    post,
    path = "/api/customer/add",
    tag = "customer",
    request_body = CustomerDto,
    responses(
        (status = 201, description = "Customer created", body = CustomerDto),
        (status = 400, description = "Invalid customer", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody)
    )
)]
#[post("/add")]
pub async fn add_customer(
    repo: web::Data<DieselRepository>,
    payload: web::Json<Option<CustomerDto>>,
) -> impl Responder {
    let payload = payload.into_inner();

    if let Some(dto) = &payload {
        if let Err(err) = dto.validate_for_create() {
            return error_response(&ServiceError::from(err));
        }
    }

    match customer_service::add_customer(repo.get_ref(), payload) {
        Ok(created) => HttpResponse::Created().json(created),
        Err(err) => error_response(&err),
    }
}

#[utoipa::path(
    get,
    path = "/api/customer/get/{id}",
    tag = "customer",
    params(("id" = String, Path, description = "Customer identifier")),
    responses(
        (status = 200, description = "Customer found", body = CustomerDto),
        (status = 400, description = "Malformed or unknown id", body = ErrorBody)
    )
)]
#[get("/get/{id}")]
pub async fn find_customer(
    repo: web::Data<DieselRepository>,
    id: web::Path<String>,
) -> impl Responder {
    match customer_service::find_customer_by_id(repo.get_ref(), Some(id.as_str())) {
        Ok(customer) => HttpResponse::Ok().json(customer),
        Err(err) => error_response(&err),
    }
}

/// Overwrite an existing customer identified by the `id` in the body.
#[utoipa::path(
    put,
    path = "/api/customer/update",
    tag = "customer",
    request_body = CustomerDto,
    responses(
        (status = 200, description = "Customer updated", body = CustomerDto),
        (status = 400, description = "Invalid customer or unknown id", body = ErrorBody)
    )
)]
#[put("/update")]
pub async fn update_customer(
    repo: web::Data<DieselRepository>,
    payload: web::Json<Option<CustomerDto>>,
) -> impl Responder {
    let payload = payload.into_inner();

    if let Some(dto) = &payload {
        if let Err(err) = dto.validate_for_update() {
            return error_response(&ServiceError::from(err));
        }
    }

    match customer_service::update_customer(repo.get_ref(), payload) {
        Ok(updated) => HttpResponse::Ok().json(updated),
        Err(err) => error_response(&err),
    }
}

#[utoipa::path(
    delete,
    path = "/api/customer/delete/{id}",
    tag = "customer",
    params(("id" = String, Path, description = "Customer identifier")),
    responses(
        (status = 204, description = "Customer deleted"),
        (status = 400, description = "Malformed or unknown id", body = ErrorBody)
    )
)]
#[delete("/delete/{id}")]
pub async fn delete_customer(
    repo: web::Data<DieselRepository>,
    id: web::Path<String>,
) -> impl Responder {
    match customer_service::delete_customer(repo.get_ref(), Some(id.as_str())) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(&err),
    }
}

#[utoipa::path(
    get,
    path = "/api/customer/all/{name_pattern}",
    tag = "customer",
    params(("name_pattern" = String, Path, description = "Substring of the customer name")),
    responses(
        (status = 200, description = "Matching customers", body = Vec<CustomerDto>)
    )
)]
#[get("/all/{name_pattern}")]
pub async fn find_customers_by_name(
    repo: web::Data<DieselRepository>,
    name_pattern: web::Path<String>,
) -> impl Responder {
    match customer_service::find_customers_by_name(repo.get_ref(), Some(name_pattern.as_str())) {
        Ok(customers) => HttpResponse::Ok().json(customers),
        Err(err) => error_response(&err),
    }
}

#[utoipa::path(
    get,
    path = "/api/customer/all",
    tag = "customer",
    responses(
        (status = 200, description = "Every customer", body = Vec<CustomerDto>)
    )
)]
#[get("/all")]
pub async fn find_all_customers(repo: web::Data<DieselRepository>) -> impl Responder {
    match customer_service::find_all_customers(repo.get_ref()) {
        Ok(customers) => HttpResponse::Ok().json(customers),
        Err(err) => error_response(&err),
    }
}
