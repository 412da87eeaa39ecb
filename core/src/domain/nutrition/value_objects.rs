use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::nutrition::entities::{Bmi, CategoryView, DietaryHabits, UserProfile};

#[derive(Debug, Clone)]
pub struct AssessNutritionInput {
    pub profile: UserProfile,
    pub habits: DietaryHabits,
}

/// BMI and categories for one evaluation, without advice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NutritionClassification {
    pub bmi: Bmi,
    pub weight_category: CategoryView,
    pub diet_category: CategoryView,
    pub category: CategoryView,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NutritionAssessment {
    #[serde(flatten)]
    pub classification: NutritionClassification,
    pub advice: String,
}
