use crate::domain::{
    advice::{
        ports::{AdviceService, LLMClient},
        prompts::{build_advice_prompt, build_question_prompt},
        value_objects::RequestAdviceInput,
    },
    common::{entities::app_errors::CoreError, services::Service},
};

impl<LLM> AdviceService for Service<LLM>
where
    LLM: LLMClient,
{
    async fn request_advice(&self, input: RequestAdviceInput) -> Result<String, CoreError> {
        let prompt = build_advice_prompt(&input);
        tracing::debug!(category = %input.category, "requesting nutrition advice");

        self.llm_client.generate_text(prompt).await
    }

    async fn ask_question(&self, question: String) -> Result<String, CoreError> {
        let prompt = build_question_prompt(&question);
        tracing::debug!("forwarding free-form question");

        self.llm_client.generate_text(prompt).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        advice::ports::MockLLMClient,
        nutrition::entities::{Bmi, DietaryHabits, Gender, NutritionCategory, UserProfile},
    };

    fn advice_input() -> RequestAdviceInput {
        RequestAdviceInput {
            category: NutritionCategory::PotentialAgeRelatedMalnutrition,
            profile: UserProfile {
                age: 70,
                gender: Gender::Female,
                weight_kg: 70.0,
                height_feet: 5.5,
                health_issues: "None".to_string(),
            },
            bmi: Bmi::from_raw(24.91),
            habits: DietaryHabits {
                fruits: 3,
                vegetables: 3,
                protein_sources: 2,
                whole_grains: 2,
                micronutrient_deficiency: "None".to_string(),
            },
        }
    }

    #[tokio::test]
    async fn test_request_advice_returns_text_verbatim() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_text()
            .withf(|prompt| prompt.starts_with("Provide nutrition advice for elderly individuals"))
            .times(1)
            .returning(|_| Box::pin(async { Ok("  Drink water.\n".to_string()) }));
        let service = Service::new(llm);

        let advice = service.request_advice(advice_input()).await.unwrap();

        assert_eq!(advice, "  Drink water.\n");
    }

    #[tokio::test]
    async fn test_request_advice_failure_is_error_text() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_text().returning(|_| {
            Box::pin(async {
                Err(CoreError::ExternalServiceError(
                    "Failed to parse LLM response: missing field `candidates`".to_string(),
                ))
            })
        });
        let service = Service::new(llm);

        let err = service.request_advice(advice_input()).await.unwrap_err();

        assert_eq!(
            err.to_string(),
            "Error: Failed to parse LLM response: missing field `candidates`"
        );
    }

    #[tokio::test]
    async fn test_ask_question_wraps_prompt() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_text()
            .withf(|prompt| prompt == "Answer the following question: What is fibre?")
            .times(1)
            .returning(|_| Box::pin(async { Ok("Fibre is...".to_string()) }));
        let service = Service::new(llm);

        let answer = service
            .ask_question("What is fibre?".to_string())
            .await
            .unwrap();

        assert_eq!(answer, "Fibre is...");
    }
}
