use super::handlers::{
    classify_nutrition::{__path_classify_nutrition, classify_nutrition},
    get_nutrition_advice::{__path_get_nutrition_advice, get_nutrition_advice},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(classify_nutrition, get_nutrition_advice))]
pub struct NutritionApiDoc;

pub fn nutrition_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/nutrition/classification", state.args.server.root_path),
            post(classify_nutrition),
        )
        .route(
            &format!("{}/nutrition/advice", state.args.server.root_path),
            post(get_nutrition_advice),
        )
}
