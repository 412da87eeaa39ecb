use crate::domain::nutrition::entities::{Bmi, DietaryHabits, NutritionCategory, UserProfile};

#[derive(Debug, Clone)]
pub struct RequestAdviceInput {
    pub category: NutritionCategory,
    pub profile: UserProfile,
    pub bmi: Bmi,
    pub habits: DietaryHabits,
}
