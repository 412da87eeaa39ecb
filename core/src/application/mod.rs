use crate::{
    domain::common::{HealthCoConfig, entities::app_errors::CoreError, services::Service},
    infrastructure::llm::GeminiLLMClient,
};

pub type HealthCoService = Service<GeminiLLMClient>;

/// Builds the service backed by the Gemini adapter.
///
/// A blank API key is rejected here so the process never serves requests
/// without credentials.
pub fn create_service(config: HealthCoConfig) -> Result<HealthCoService, CoreError> {
    if config.llm.gemini_api_key.trim().is_empty() {
        return Err(CoreError::Configuration(
            "GEMINI_API_KEY must not be empty".to_string(),
        ));
    }
    if config.llm.gemini_model.trim().is_empty() {
        return Err(CoreError::Configuration(
            "GEMINI_MODEL must not be empty".to_string(),
        ));
    }

    tracing::info!(model = %config.llm.gemini_model, "gemini client configured");

    Ok(Service::new(GeminiLLMClient::new(config.llm)))
}
