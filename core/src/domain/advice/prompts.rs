use crate::domain::{
    advice::value_objects::RequestAdviceInput, nutrition::entities::CategoryKind,
};

/// Instruction that opens the advice prompt for each category.
pub fn advice_template(kind: CategoryKind) -> &'static str {
    match kind {
        CategoryKind::MalnutritionUnderweight => {
            "Explain how to prevent and treat malnutrition, including essential nutrients and diet recommendations."
        }
        CategoryKind::HealthyWeight => {
            "Provide general health and nutrition advice for maintaining a healthy weight."
        }
        CategoryKind::Overweight => {
            "Provide expert advice on managing overweight, including diet, exercise, and healthy lifestyle changes."
        }
        CategoryKind::Obesity => {
            "Give expert advice on managing obesity, including diet, exercise, and healthy lifestyle changes."
        }
        CategoryKind::PotentialAgeRelatedMalnutrition => {
            "Provide nutrition advice for elderly individuals, focusing on preventing age-related malnutrition."
        }
        CategoryKind::PoorDietaryDiversity => {
            "Provide advice on how to improve dietary diversity, including incorporating more food groups."
        }
        CategoryKind::PossibleMicronutrientDeficiency => {
            "Provide advice on addressing micronutrient deficiencies, including food sources and supplementation recommendations."
        }
        CategoryKind::BalancedDiet => {
            "Give general advice on maintaining a balanced and healthy diet."
        }
        CategoryKind::Undetermined => {
            "Provide general nutrition advice and explain which additional measurements would help identify a specific nutrition problem."
        }
    }
}

pub fn build_advice_prompt(input: &RequestAdviceInput) -> String {
    let profile = &input.profile;

    format!(
        "{} Consider a {}, {} years old, with a weight of {} kg, height of {} feet (BMI: {}). \
         The individual has the following health concerns: {}. Dietary habits: {}. \
         Make the advice specific to this individual's needs.",
        advice_template(input.category.kind()),
        profile.gender,
        profile.age,
        // Debug keeps the decimal point on whole numbers (70.0, not 70).
        format!("{:?}", profile.weight_kg),
        format!("{:?}", profile.height_feet),
        input.bmi,
        profile.health_issues,
        input.habits,
    )
}

pub fn build_question_prompt(question: &str) -> String {
    format!("Answer the following question: {question}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::nutrition::entities::{
        Bmi, DietaryHabits, Gender, NutritionCategory, UserProfile,
    };

    fn advice_input(category: NutritionCategory) -> RequestAdviceInput {
        RequestAdviceInput {
            category,
            profile: UserProfile {
                age: 42,
                gender: Gender::Male,
                weight_kg: 70.5,
                height_feet: 5.5,
                health_issues: "hypertension".to_string(),
            },
            bmi: Bmi::from_raw(25.08),
            habits: DietaryHabits {
                fruits: 3,
                vegetables: 4,
                protein_sources: 2,
                whole_grains: 2,
                micronutrient_deficiency: "Iron".to_string(),
            },
        }
    }

    #[test]
    fn test_deficiency_template_keys_on_base_kind() {
        let prompt = build_advice_prompt(&advice_input(
            NutritionCategory::PossibleMicronutrientDeficiency {
                deficiency: "Iron".to_string(),
            },
        ));

        assert!(prompt.starts_with(
            "Provide advice on addressing micronutrient deficiencies, including food sources"
        ));
    }

    #[test]
    fn test_advice_prompt_interpolates_profile() {
        let prompt = build_advice_prompt(&advice_input(NutritionCategory::Overweight));

        assert!(prompt.starts_with("Provide expert advice on managing overweight"));
        assert!(prompt.contains(
            "Consider a Male, 42 years old, with a weight of 70.5 kg, height of 5.5 feet (BMI: 25.08)."
        ));
        assert!(prompt.contains("following health concerns: hypertension."));
        assert!(prompt.contains("vegetables 4 times per week"));
        assert!(prompt.contains("micronutrient deficiency: Iron"));
        assert!(prompt.ends_with("Make the advice specific to this individual's needs."));
    }

    #[test]
    fn test_advice_prompt_keeps_decimal_point_on_whole_numbers() {
        let mut input = advice_input(NutritionCategory::HealthyWeight);
        input.profile.weight_kg = 70.0;
        input.profile.height_feet = 6.0;
        input.bmi = Bmi::from_raw(22.0);

        let prompt = build_advice_prompt(&input);

        assert!(prompt.contains("with a weight of 70.0 kg, height of 6.0 feet (BMI: 22.0)."));
    }

    #[test]
    fn test_question_prompt() {
        assert_eq!(
            build_question_prompt("Is oat milk healthy?"),
            "Answer the following question: Is oat milk healthy?"
        );
    }
}
