use crate::application::http::{
    nutrition::router::NutritionApiDoc, question::router::QuestionApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Health & Co API",
        description = "Nutrition classification and AI-generated nutrition advice"
    ),
    nest(
        (path = "/nutrition", api = NutritionApiDoc),
        (path = "/questions", api = QuestionApiDoc),
    )
)]
pub struct ApiDoc;
