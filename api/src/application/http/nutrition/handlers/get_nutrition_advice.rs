use axum::extract::State;
use healthco_core::domain::nutrition::{ports::NutritionService, value_objects::NutritionAssessment};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    nutrition::validators::NutritionRequestValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetNutritionAdviceResponse {
    pub data: NutritionAssessment,
}

#[utoipa::path(
    post,
    path = "/advice",
    tag = "nutrition",
    summary = "Get personalised nutrition advice",
    description = "Classifies the user's nutrition problem and asks the language model for advice tailored to it.",
    responses(
        (status = 200, body = GetNutritionAdviceResponse),
        (status = 400, body = ApiErrorResponse),
        (status = 502, body = ApiErrorResponse)
    ),
    request_body = NutritionRequestValidator
)]
pub async fn get_nutrition_advice(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<NutritionRequestValidator>,
) -> Result<Response<GetNutritionAdviceResponse>, ApiError> {
    let assessment = state
        .service
        .assess_nutrition(payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetNutritionAdviceResponse { data: assessment }))
}
