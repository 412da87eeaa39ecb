use axum::extract::State;
use healthco_core::domain::advice::ports::AdviceService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    question::validators::AskQuestionRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct Answer {
    pub answer: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct AskQuestionResponse {
    pub data: Answer,
}

#[utoipa::path(
    post,
    path = "",
    tag = "question",
    summary = "Ask a nutrition question",
    description = "Forwards a free-form question to the language model and returns its answer.",
    responses(
        (status = 200, body = AskQuestionResponse),
        (status = 400, body = ApiErrorResponse),
        (status = 502, body = ApiErrorResponse)
    ),
    request_body = AskQuestionRequest
)]
pub async fn ask_question(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<AskQuestionRequest>,
) -> Result<Response<AskQuestionResponse>, ApiError> {
    let answer = state
        .service
        .ask_question(payload.question)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(AskQuestionResponse {
        data: Answer { answer },
    }))
}
