use axum::{extract::Query, response::Json};
use serde::Deserialize;
use utoipa::IntoParams;
use crate::models::MessageResponse;

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SayQuery {
    /// Word to echo back
    keyword: Option<String>,
}

// GET /say?keyword=hello - Echo a keyword, no validation
#[utoipa::path(
    get,
    path = "/say",
    summary = "Echo a keyword",
    params(SayQuery),
    responses(
        (status = 200, description = "The echoed message", body = MessageResponse)
    ),
    tag = "misc"
)]
pub async fn say(Query(params): Query<SayQuery>) -> Json<MessageResponse> {
    let keyword = params.keyword.as_deref().unwrap_or("undefined");

    Json(MessageResponse {
        message: format!("Jake-Pinos says {keyword}"),
    })
}
