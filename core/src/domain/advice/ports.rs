use std::future::Future;

use crate::domain::{
    advice::value_objects::RequestAdviceInput, common::entities::app_errors::CoreError,
};

/// LLM Client trait for calling a text-generation model
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    /// Send `prompt` as a single-turn request and return the first candidate's text.
    fn generate_text(
        &self,
        prompt: String,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for advice and free-form questions
///
/// Failures come back as [`CoreError::ExternalServiceError`], whose display
/// text is what callers show in place of the answer.
pub trait AdviceService: Send + Sync {
    fn request_advice(
        &self,
        input: RequestAdviceInput,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    fn ask_question(
        &self,
        question: String,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}
