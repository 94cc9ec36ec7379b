//! OpenAPI document for the customer API and the Swagger UI serving it.

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::dto::customer::CustomerDto;
use crate::routes::{ErrorBody, customer};

/// Location of the generated OpenAPI document.
pub const OPENAPI_JSON: &str = "/api-docs/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "customer-registry",
        description = "Customer controller: create, read, update, delete and search customers"
    ),
    paths(
        customer::add_customer,
        customer::find_customer,
        customer::update_customer,
        customer::delete_customer,
        customer::find_customers_by_name,
        customer::find_all_customers,
    ),
    components(schemas(CustomerDto, ErrorBody)),
    tags((name = "customer", description = "Customer records"))
)]
pub struct ApiDoc;

/// Swagger UI at `/swagger-ui/` backed by the document at [`OPENAPI_JSON`].
pub fn api_docs() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui/{_:.*}").url(OPENAPI_JSON, ApiDoc::openapi())
}
