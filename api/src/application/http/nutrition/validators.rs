use healthco_core::domain::nutrition::{
    entities::{DietaryHabits, Gender, UserProfile},
    value_objects::AssessNutritionInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

fn none() -> String {
    "None".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DietaryHabitsPayload {
    #[schema(example = 3)]
    pub fruits: u32,
    #[schema(example = 3)]
    pub vegetables: u32,
    #[schema(example = 2)]
    pub protein_sources: u32,
    #[schema(example = 2)]
    pub whole_grains: u32,
    /// Known deficiency such as "iron", or "None".
    #[serde(default = "none")]
    #[schema(example = "None")]
    pub micronutrient_deficiency: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct NutritionRequestValidator {
    #[validate(range(min = 1, max = 120, message = "age must be between 1 and 120"))]
    #[schema(example = 25)]
    pub age: u32,

    pub gender: Gender,

    #[validate(range(exclusive_min = 0.0, message = "weight_kg must be greater than 0"))]
    #[schema(example = 70.0)]
    pub weight_kg: f64,

    #[validate(range(min = 0.0, message = "height_feet must not be negative"))]
    #[schema(example = 5.5)]
    pub height_feet: f64,

    /// Health conditions such as diabetes or hypertension, or "None".
    #[serde(default = "none")]
    pub health_issues: String,

    pub dietary_habits: DietaryHabitsPayload,
}

impl From<NutritionRequestValidator> for AssessNutritionInput {
    fn from(payload: NutritionRequestValidator) -> Self {
        let habits = payload.dietary_habits;

        Self {
            profile: UserProfile {
                age: payload.age,
                gender: payload.gender,
                weight_kg: payload.weight_kg,
                height_feet: payload.height_feet,
                health_issues: payload.health_issues,
            },
            habits: DietaryHabits {
                fruits: habits.fruits,
                vegetables: habits.vegetables,
                protein_sources: habits.protein_sources,
                whole_grains: habits.whole_grains,
                micronutrient_deficiency: habits.micronutrient_deficiency,
            },
        }
    }
}
