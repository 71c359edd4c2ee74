//! Axum Router Configuration
//!
//! This module defines the HTTP routing for the application: the quiz
//! endpoint plus the OpenAPI document and Swagger UI.

use crate::{
    handlers,
    models::{ErrorResponse, Question, Quiz, QuizContent, TopicRequest},
    state::AppState,
};

use axum::{Router, routing::post};
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(handlers::create_quiz),
    components(schemas(TopicRequest, ErrorResponse, Quiz, Question, QuizContent)),
    tags(
        (name = "Quiz Generator", description = "LLM-backed quiz generation")
    )
)]
pub struct ApiDoc;

/// Creates the main Axum router for the application.
pub fn create_router(app_state: Arc<AppState>) -> Router {
    let api_router = Router::new()
        .route("/openai", post(handlers::create_quiz))
        .with_state(app_state);

    Router::new()
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        .merge(api_router)
}
