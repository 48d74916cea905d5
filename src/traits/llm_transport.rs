use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use crate::enums::ai_provider_error::AiProviderError;

/// One opaque remote completion: a prompt in, raw response text out.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait LlmTransport: Send + Sync {
    async fn generate(&self, credential: &str, prompt: &str) -> Result<String, AiProviderError>;
}
