use axum::extract::State;
use healthco_core::domain::nutrition::{
    ports::NutritionService, value_objects::NutritionClassification,
};
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
pub struct ClassifyNutritionResponse {
    pub data: NutritionClassification,
}

#[utoipa::path(
    post,
    path = "/classification",
    tag = "nutrition",
    summary = "Classify nutrition",
    description = "Computes BMI and the weight, diet and overall nutrition categories without requesting advice.",
    responses(
        (status = 200, body = ClassifyNutritionResponse),
        (status = 400, body = ApiErrorResponse)
    ),
    request_body = NutritionRequestValidator
)]
pub async fn classify_nutrition(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<NutritionRequestValidator>,
) -> Result<Response<ClassifyNutritionResponse>, ApiError> {
    let classification = state
        .service
        .classify_nutrition(payload.into())
        .map_err(ApiError::from)?;

    Ok(Response::OK(ClassifyNutritionResponse {
        data: classification,
    }))
}
