use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    nutrition::value_objects::{AssessNutritionInput, NutritionAssessment, NutritionClassification},
};

/// Service trait for the end-to-end nutrition flow
#[cfg_attr(test, mockall::automock)]
pub trait NutritionService: Send + Sync {
    /// Compute BMI and categories without contacting the text-generation service.
    fn classify_nutrition(
        &self,
        input: AssessNutritionInput,
    ) -> Result<NutritionClassification, CoreError>;

    /// Classify, then request personalised advice for the overall category.
    fn assess_nutrition(
        &self,
        input: AssessNutritionInput,
    ) -> impl Future<Output = Result<NutritionAssessment, CoreError>> + Send;
}
