use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header::CONTENT_TYPE, HeaderMap, StatusCode},
    response::Json,
};
use serde::de::DeserializeOwned;
use sqlx::mysql::MySqlPool;
use crate::db;
use crate::error::{ApiError, ErrorResponse};
use crate::models::{CustomerSummary, CustomerUpdate, CustomerWriteResponse, NewCustomer};

const CUSTOMER_NOT_FOUND: &str = "Customer not found";

/// Reads a JSON body, falling back to an empty object when the request has
/// no JSON content type or no body, so missing fields get the route's own 400.
/// A JSON body that fails to parse is still rejected.
fn json_body_or_default<T>(headers: &HeaderMap, body: &Bytes) -> Result<T, ApiError>
where
    T: DeserializeOwned + Default,
{
    let is_json = headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(|mime| mime.trim().to_ascii_lowercase())
        .is_some_and(|mime| mime == "application/json" || mime.ends_with("+json"));

    if !is_json || body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }

    let Json(value) = Json::<T>::from_bytes(body)?;
    Ok(value)
}

// GET /customers - List all customers (five-column projection)
#[utoipa::path(
    get,
    path = "/customers",
    summary = "Get all customers",
    description = "Returns a list of all customers with basic details.",
    responses(
        (status = 200, description = "A list of customers", body = [CustomerSummary]),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "customers"
)]
pub async fn get_customers(
    State(pool): State<MySqlPool>,
) -> Result<Json<Vec<CustomerSummary>>, ApiError> {
    let customers = db::list_customers(&pool).await?;

    Ok(Json(customers))
}

// POST /customers - Create a customer
#[utoipa::path(
    post,
    path = "/customers",
    summary = "Create a new customer",
    description = "Adds a new customer to the database.",
    request_body = NewCustomer,
    responses(
        (status = 201, description = "Customer created successfully", body = CustomerWriteResponse),
        (status = 400, description = "Missing required fields", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "customers"
)]
pub async fn create_customer(
    State(pool): State<MySqlPool>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<CustomerWriteResponse>), ApiError> {
    let customer = json_body_or_default::<NewCustomer>(&headers, &body)?.validate()?;

    db::insert_customer(&pool, &customer).await?;
    tracing::info!(cust_code = %customer.cust_code, "customer created");

    Ok((
        StatusCode::CREATED,
        Json(CustomerWriteResponse::new("Customer created", customer.cust_code)),
    ))
}

// DELETE /customers/:code - Delete a customer by code
#[utoipa::path(
    delete,
    path = "/customers/{code}",
    summary = "Delete a customer",
    description = "Removes a customer from the database by CUST_CODE.",
    params(
        ("code" = String, Path, description = "Customer code to delete", example = "C10001")
    ),
    responses(
        (status = 200, description = "Customer deleted successfully", body = CustomerWriteResponse),
        (status = 404, description = "Customer not found", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "customers"
)]
pub async fn delete_customer(
    State(pool): State<MySqlPool>,
    Path(code): Path<String>,
) -> Result<Json<CustomerWriteResponse>, ApiError> {
    let deleted = db::delete_customer(&pool, &code).await?;

    if deleted == 0 {
        return Err(ApiError::NotFound(CUSTOMER_NOT_FOUND));
    }

    tracing::info!(cust_code = %code, "customer deleted");
    Ok(Json(CustomerWriteResponse::new("Customer deleted", code)))
}

// PUT /customers/:code - Update name, city, area and country
#[utoipa::path(
    put,
    path = "/customers/{code}",
    summary = "Update an existing customer",
    description = "Update the details of a customer by their CUST_CODE. \
        CUST_CITY, WORKING_AREA and CUST_COUNTRY are cleared when omitted.",
    params(
        ("code" = String, Path, description = "The customer code (CUST_CODE)", example = "C10001")
    ),
    request_body = CustomerUpdate,
    responses(
        (status = 200, description = "Customer updated successfully", body = CustomerWriteResponse),
        (status = 400, description = "Bad request (missing data)", body = ErrorResponse),
        (status = 404, description = "Customer not found", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "customers"
)]
pub async fn update_customer(
    State(pool): State<MySqlPool>,
    Path(code): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<CustomerWriteResponse>, ApiError> {
    let update = json_body_or_default::<CustomerUpdate>(&headers, &body)?.validate()?;

    let updated = db::update_customer(&pool, &code, &update).await?;

    if updated == 0 {
        return Err(ApiError::NotFound(CUSTOMER_NOT_FOUND));
    }

    tracing::info!(cust_code = %code, "customer updated");
    Ok(Json(CustomerWriteResponse::new("Customer updated successfully", code)))
}
