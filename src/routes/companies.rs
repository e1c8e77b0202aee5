use axum::{extract::State, response::Json};
use sqlx::mysql::MySqlPool;
use crate::db;
use crate::error::{ApiError, ErrorResponse};
use crate::models::Company;

/// GET /companies - List all companies
#[utoipa::path(
    get,
    path = "/companies",
    summary = "Get all companies",
    description = "Returns a list of all companies with their ID, name, and city.",
    responses(
        (status = 200, description = "A list of companies", body = [Company]),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "companies"
)]
pub async fn get_companies(
    State(pool): State<MySqlPool>,
) -> Result<Json<Vec<Company>>, ApiError> {
    let companies = db::list_companies(&pool).await?;

    Ok(Json(companies))
}
