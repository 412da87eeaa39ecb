use crate::domain::{
    advice::{
        ports::{AdviceService, LLMClient},
        value_objects::RequestAdviceInput,
    },
    common::{entities::app_errors::CoreError, services::Service},
    nutrition::{
        entities::{Bmi, CategoryView, DietaryHabits, Gender, NutritionCategory},
        ports::NutritionService,
        value_objects::{AssessNutritionInput, NutritionAssessment, NutritionClassification},
    },
};

pub const METERS_PER_FOOT: f64 = 0.3048;

pub const UNDERWEIGHT_BELOW: f64 = 18.5;
pub const HEALTHY_BELOW: f64 = 24.9;
pub const OVERWEIGHT_FROM: f64 = 25.0;
pub const OVERWEIGHT_BELOW: f64 = 29.9;
pub const OBESITY_FROM: f64 = 30.0;
pub const ELDERLY_AGE: u32 = 65;

pub const MIN_WEEKLY_FRUITS: u32 = 3;
pub const MIN_WEEKLY_VEGETABLES: u32 = 3;
pub const MIN_WEEKLY_PROTEIN_SOURCES: u32 = 2;
pub const MIN_WEEKLY_WHOLE_GRAINS: u32 = 2;

/// Computes BMI from a weight in kilograms and a height in feet.
///
/// Returns [`CoreError::InvalidHeight`] when the squared height in meters is
/// zero or so small that the quotient is not finite. Sign and range checks on
/// the inputs belong to the caller.
pub fn compute_bmi(weight_kg: f64, height_feet: f64) -> Result<Bmi, CoreError> {
    let height_m = height_feet * METERS_PER_FOOT;
    let height_m_squared = height_m * height_m;

    if height_m_squared == 0.0 {
        return Err(CoreError::InvalidHeight);
    }

    let bmi = weight_kg / height_m_squared;
    if !bmi.is_finite() {
        return Err(CoreError::InvalidHeight);
    }

    Ok(Bmi::from_raw(bmi))
}

/// Maps a BMI and age to a weight-based category. The first matching band wins.
///
/// The bands leave [24.9, 25) and [29.9, 30) uncovered; values there fall
/// through to the age check.
pub fn classify_weight(bmi: f64, age: u32, _gender: Gender) -> NutritionCategory {
    if bmi < UNDERWEIGHT_BELOW {
        return NutritionCategory::MalnutritionUnderweight;
    }
    if (UNDERWEIGHT_BELOW..HEALTHY_BELOW).contains(&bmi) {
        return NutritionCategory::HealthyWeight;
    }
    if (OVERWEIGHT_FROM..OVERWEIGHT_BELOW).contains(&bmi) {
        return NutritionCategory::Overweight;
    }
    if bmi >= OBESITY_FROM {
        return NutritionCategory::Obesity;
    }

    if age >= ELDERLY_AGE {
        NutritionCategory::PotentialAgeRelatedMalnutrition
    } else {
        NutritionCategory::Undetermined
    }
}

pub fn classify_diet(habits: &DietaryHabits) -> NutritionCategory {
    if habits.fruits < MIN_WEEKLY_FRUITS
        || habits.vegetables < MIN_WEEKLY_VEGETABLES
        || habits.protein_sources < MIN_WEEKLY_PROTEIN_SOURCES
        || habits.whole_grains < MIN_WEEKLY_WHOLE_GRAINS
    {
        return NutritionCategory::PoorDietaryDiversity;
    }

    if habits.has_deficiency() {
        return NutritionCategory::PossibleMicronutrientDeficiency {
            deficiency: habits.micronutrient_deficiency.clone(),
        };
    }

    NutritionCategory::BalancedDiet
}

/// A weight problem always wins; dietary habits only surface at a healthy weight.
pub fn overall_category(
    weight_category: NutritionCategory,
    diet_category: NutritionCategory,
) -> NutritionCategory {
    if weight_category != NutritionCategory::HealthyWeight {
        weight_category
    } else {
        diet_category
    }
}

struct Evaluation {
    bmi: Bmi,
    weight_category: NutritionCategory,
    diet_category: NutritionCategory,
    category: NutritionCategory,
}

impl Evaluation {
    fn run(input: &AssessNutritionInput) -> Result<Self, CoreError> {
        let profile = &input.profile;
        let bmi = compute_bmi(profile.weight_kg, profile.height_feet)?;

        let weight_category = classify_weight(bmi.value(), profile.age, profile.gender);
        let diet_category = classify_diet(&input.habits);
        let category = overall_category(weight_category.clone(), diet_category.clone());

        Ok(Self {
            bmi,
            weight_category,
            diet_category,
            category,
        })
    }

    fn classification(&self) -> NutritionClassification {
        NutritionClassification {
            bmi: self.bmi,
            weight_category: CategoryView::from(&self.weight_category),
            diet_category: CategoryView::from(&self.diet_category),
            category: CategoryView::from(&self.category),
        }
    }
}

impl<LLM> NutritionService for Service<LLM>
where
    LLM: LLMClient,
{
    fn classify_nutrition(
        &self,
        input: AssessNutritionInput,
    ) -> Result<NutritionClassification, CoreError> {
        Evaluation::run(&input).map(|evaluation| evaluation.classification())
    }

    async fn assess_nutrition(
        &self,
        input: AssessNutritionInput,
    ) -> Result<NutritionAssessment, CoreError> {
        let evaluation = Evaluation::run(&input)?;

        tracing::info!(
            bmi = evaluation.bmi.value(),
            category = %evaluation.category,
            "nutrition classified"
        );

        let classification = evaluation.classification();
        let advice = self
            .request_advice(RequestAdviceInput {
                category: evaluation.category,
                profile: input.profile,
                bmi: evaluation.bmi,
                habits: input.habits,
            })
            .await?;

        Ok(NutritionAssessment {
            classification,
            advice,
        })
    }
}
