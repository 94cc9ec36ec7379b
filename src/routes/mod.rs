//! HTTP routes and the glue that turns service results into responses.

use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::{HttpRequest, HttpResponse, Scope, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::services::ServiceError;

pub mod customer;
pub mod openapi;

/// Body of every non-2xx response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    fn new(message: impl ToString) -> Self {
        Self {
            error: message.to_string(),
        }
    }
}

/// Convert a service failure into a JSON error response.
///
/// Every client-caused failure, including unknown identifiers, is reported as
/// `400 Bad Request`; only store failures produce `500`.
pub fn error_response(err: &ServiceError) -> HttpResponse {
    let body = ErrorBody::new(err);
    match err {
        ServiceError::InvalidInput(_)
        | ServiceError::NotFound(_)
        | ServiceError::Validation(_)
        | ServiceError::TypeConstraint(_) => {
            log::warn!("Rejected request: {err}");
            HttpResponse::BadRequest().json(body)
        }
        ServiceError::Internal => HttpResponse::InternalServerError().json(body),
    }
}

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    log::warn!("Malformed JSON payload: {err}");
    let response = HttpResponse::BadRequest().json(ErrorBody::new(&err));
    InternalError::from_response(err, response).into()
}

/// JSON extractor settings applied to every request body.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(json_error_handler)
}

/// All customer endpoints mounted under `/api/customer`.
pub fn customer_scope() -> Scope {
    web::scope("/api/customer")
        .service(customer::add_customer)
        .service(customer::find_customer)
        .service(customer::update_customer)
        .service(customer::delete_customer)
        .service(customer::find_customers_by_name)
        .service(customer::find_all_customers)
}
