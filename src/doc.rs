//! OpenAPI document for the HTTP API.
//!
//! Paths come from the `#[utoipa::path]` annotations on each handler. The
//! document is served as JSON at [`OPENAPI_PATH`] and rendered by Swagger UI
//! at [`SWAGGER_UI_PATH`].

use utoipa::openapi::server::Server;
use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::models::{
    Agent, Company, CustomerSummary, CustomerUpdate, CustomerWriteResponse, MessageResponse,
    NewCustomer,
};
use crate::routes::health::HealthResponse;

pub const SWAGGER_UI_PATH: &str = "/api-docs";
pub const OPENAPI_PATH: &str = "/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Customer API",
        version = "1.0.0",
        description = "REST API for managing customers (with MariaDB)"
    ),
    paths(
        crate::routes::agents::get_agents,
        crate::routes::companies::get_companies,
        crate::routes::customers::get_customers,
        crate::routes::customers::create_customer,
        crate::routes::customers::delete_customer,
        crate::routes::customers::update_customer,
        crate::routes::say::say,
        crate::routes::health::health_check,
    ),
    components(schemas(
        Agent,
        Company,
        CustomerSummary,
        NewCustomer,
        CustomerUpdate,
        CustomerWriteResponse,
        MessageResponse,
        ErrorResponse,
        HealthResponse,
    )),
    tags(
        (name = "agents", description = "Read-only agent listing"),
        (name = "companies", description = "Read-only company listing"),
        (name = "customers", description = "Customer create, read, update and delete"),
        (name = "misc", description = "Echo and health endpoints")
    )
)]
pub struct ApiDoc;

/// Builds the document, advertising `public_url` as the server when given.
pub fn openapi(public_url: Option<&str>) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    if let Some(url) = public_url {
        doc.servers = Some(vec![Server::new(url)]);
    }
    doc
}
