//! Axum Handlers for the REST API
//!
//! This module contains the quiz generation endpoint. It uses `utoipa` doc
//! comments to generate OpenAPI documentation.

use axum::{
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::Value;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::{
    models::{ErrorResponse, Quiz, TopicRequest},
    state::AppState,
};

pub enum ApiError {
    /// The request body could not be extracted. Carries the rejection status.
    Validation(StatusCode, String),
    InternalServerError(anyhow::Error),
}

impl ApiError {
    fn from_rejection(rejection: JsonRejection) -> Self {
        Self::Validation(rejection.status(), rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(status, detail) => {
                warn!(%status, %detail, "Rejected request body");
                (status, Json(ErrorResponse { detail })).into_response()
            }
            ApiError::InternalServerError(err) => {
                error!("Error generating quiz: {:?}", err);
                let detail = format!("{:#}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse { detail }),
                )
                    .into_response()
            }
        }
    }
}

impl<E> From<E> for ApiError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self::InternalServerError(err.into())
    }
}

/// Generate a quiz on the given topic.
///
/// The body of a successful response is the model's JSON output, unmodified.
#[utoipa::path(
    post,
    path = "/openai",
    request_body = TopicRequest,
    responses(
        (status = 200, description = "Quiz generated", body = Quiz),
        (status = 400, description = "Request body is not valid JSON", body = ErrorResponse),
        (status = 415, description = "Request is missing the `application/json` content type", body = ErrorResponse),
        (status = 422, description = "Request body is missing `topic` or has the wrong type", body = ErrorResponse),
        (status = 500, description = "Generation or parsing failed", body = ErrorResponse)
    )
)]
pub async fn create_quiz(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<TopicRequest>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(request) = payload.map_err(ApiError::from_rejection)?;
    info!(topic = %request.topic, "Received request");

    let quiz = state.quiz_generator.generate_quiz(&request.topic).await?;

    info!(topic = %request.topic, "Quiz generated successfully");
    Ok(Json(quiz))
}
