use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

const EMPTY_QUESTION_MESSAGE: &str = "Please type a question to ask the AI.";

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct AskQuestionRequest {
    /// Forwarded as typed; only whitespace-only input is rejected.
    #[validate(custom(function = validate_not_blank))]
    #[schema(example = "What are the benefits of a Mediterranean diet?")]
    pub question: String,
}

fn validate_not_blank(question: &str) -> Result<(), ValidationError> {
    if question.trim().is_empty() {
        return Err(
            ValidationError::new("blank").with_message(Cow::Borrowed(EMPTY_QUESTION_MESSAGE)),
        );
    }
    Ok(())
}
