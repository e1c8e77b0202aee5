use axum::{extract::State, response::Json};
use sqlx::mysql::MySqlPool;
use crate::db;
use crate::error::{ApiError, ErrorResponse};
use crate::models::Agent;

/// GET /agents - List all agents
#[utoipa::path(
    get,
    path = "/agents",
    summary = "Get all agents",
    description = "Returns a list of all agents with their code, name, working area, and commission.",
    responses(
        (status = 200, description = "A list of agents", body = [Agent]),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "agents"
)]
pub async fn get_agents(
    State(pool): State<MySqlPool>,
) -> Result<Json<Vec<Agent>>, ApiError> {
    let agents = db::list_agents(&pool).await?;

    Ok(Json(agents))
}
