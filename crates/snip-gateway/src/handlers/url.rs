use crate::error::{AppError, Result};
use crate::model::{CreateUrlRequest, CreateUrlResponse, GetUrlParams, GetUrlResponse};
use crate::state::AppState;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::Json;

pub async fn create_url_handler(
    State(state): State<AppState>,
    request: std::result::Result<Json<CreateUrlRequest>, JsonRejection>,
) -> Result<Json<CreateUrlResponse>> {
    let Json(request) = request
        .map_err(|e| AppError::BadRequest(format!("failed to decode request body: {e}")))?;

    if request.url.trim().is_empty() {
        return Err(AppError::BadRequest("url must not be empty".to_string()));
    }

    let code = state.shortener().create_or_get(&request.url).await?;

    Ok(Json(CreateUrlResponse {
        short_url: state.base_url().map(|base| code.to_url(base)),
        shorten_url: code.to_string(),
    }))
}

pub async fn get_url_handler(
    State(state): State<AppState>,
    params: std::result::Result<Query<GetUrlParams>, QueryRejection>,
) -> Result<Json<GetUrlResponse>> {
    let Query(params) =
        params.map_err(|e| AppError::BadRequest(format!("failed to decode query: {e}")))?;

    let url = state.shortener().get_full_url(&params.shorten_url).await?;

    Ok(Json(GetUrlResponse { url }))
}
