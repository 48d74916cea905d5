use std::sync::Arc;
use serde_json::{Map, Value};
use crate::config::credentials::CredentialStore;
use crate::enums::ai_provider_error::AiProviderError;
use crate::enums::analysis_kind::AnalysisKind;
use crate::enums::failure_tag::FailureTag;
use crate::helpers::json_extractor::extract_json_object;
use crate::services::fallback_table::FallbackTable;
use crate::services::retry_policy::RetryPolicy;
use crate::structs::analysis_result::AnalysisResult;
use crate::traits::llm_transport::LlmTransport;

/// Runs one analysis kind against the LLM with bounded retries. Every path,
/// including misconfiguration and provider failures, resolves to an
/// [`AnalysisResult`]; nothing is raised to the caller.
pub struct RemoteAnalysisClient {
    transport: Arc<dyn LlmTransport>,
    credentials: Arc<CredentialStore>,
    retry_policy: RetryPolicy,
}

impl RemoteAnalysisClient {
    pub fn new(transport: Arc<dyn LlmTransport>, credentials: Arc<CredentialStore>, retry_policy: RetryPolicy) -> Self {
        Self {
            transport,
            credentials,
            retry_policy,
        }
    }

    pub fn credentials(&self) -> &CredentialStore {
        &self.credentials
    }

    pub async fn analyze(&self, kind: AnalysisKind, prompt: &str) -> AnalysisResult {
        let Some(credential) = self.credentials.credential_for(kind) else {
            log::error!("❌ No API key found for {} analysis", kind);
            return FallbackTable::result_for(kind, FailureTag::NoCredential, "");
        };

        let mut last_error: Option<AiProviderError> = None;

        for attempt in 1..=self.retry_policy.max_attempts {
            log::info!("Attempting {} analysis (attempt {})", kind, attempt);

            match self.attempt(credential, prompt).await {
                Ok(payload) => {
                    log::info!("✅ {} analysis completed successfully", kind);
                    return AnalysisResult::Success(payload);
                }
                Err(error) => {
                    if !self.retry_policy.is_retryable(&error) {
                        log::error!("❌ {} analysis failed due to quota limits - skipping retries", kind);
                        return FallbackTable::result_for(kind, FailureTag::QuotaExceeded, &error.to_string());
                    }

                    log::warn!("⚠️ {} analysis failed (attempt {}): {}", kind, attempt, error);
                    last_error = Some(error);
                }
            }

            if self.retry_policy.has_attempts_after(attempt) {
                tokio::time::sleep(self.retry_policy.delay_after(attempt)).await;
            }
        }

        let detail = last_error.map(|e| e.to_string()).unwrap_or_default();
        log::error!("❌ {} analysis gave up after {} attempt(s)", kind, self.retry_policy.max_attempts);
        FallbackTable::result_for(kind, FailureTag::ApiFailed, &detail)
    }

    async fn attempt(&self, credential: &str, prompt: &str) -> Result<Map<String, Value>, AiProviderError> {
        let raw = self.transport.generate(credential, prompt).await?;
        let mut payload = extract_json_object(&raw)?;

        if let Some(error) = payload.remove("error") {
            let message = match error {
                Value::String(message) => message,
                other => other.to_string(),
            };
            return Err(AiProviderError::ApiError { status: None, message });
        }

        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use mockall::predicate::eq;
    use crate::traits::llm_transport::MockLlmTransport;

    fn fast_policy(max_attempts: u32) -> RetryPolicy {
        RetryPolicy::default()
            .with_max_attempts(max_attempts)
            .with_base_delay(Duration::from_millis(1))
    }

    fn client(transport: MockLlmTransport, credentials: CredentialStore, max_attempts: u32) -> RemoteAnalysisClient {
        RemoteAnalysisClient::new(Arc::new(transport), Arc::new(credentials), fast_policy(max_attempts))
    }

    #[tokio::test]
    async fn missing_credential_makes_no_call() {
        let mut transport = MockLlmTransport::new();
        transport.expect_generate().times(0);

        let result = client(transport, CredentialStore::new(), 2)
            .analyze(AnalysisKind::Security, "prompt")
            .await;

        assert_eq!(result.failure_tag(), Some(FailureTag::NoCredential));
        assert!(result.payload().contains_key("security_overview"));
    }

    #[tokio::test]
    async fn success_returns_parsed_payload() {
        let mut transport = MockLlmTransport::new();
        transport.expect_generate()
            .with(eq("arch-key"), eq("prompt"))
            .times(1)
            .returning(|_, _| Ok("```json\n{\"architecture_summary\": \"layered\"}\n```".to_string()));

        let credentials = CredentialStore::new().with_credential(AnalysisKind::Architecture, "arch-key");
        let result = client(transport, credentials, 2)
            .analyze(AnalysisKind::Architecture, "prompt")
            .await;

        assert!(result.is_success());
        assert_eq!(result.payload()["architecture_summary"], "layered");
    }

    #[tokio::test]
    async fn quota_error_stops_after_one_call() {
        let mut transport = MockLlmTransport::new();
        transport.expect_generate()
            .times(1)
            .returning(|_, _| Err(AiProviderError::api(429, "Rate limit exceeded")));

        let result = client(transport, CredentialStore::new().with_default("key"), 3)
            .analyze(AnalysisKind::Performance, "prompt")
            .await;

        assert_eq!(result.failure_tag(), Some(FailureTag::QuotaExceeded));
    }

    #[tokio::test]
    async fn persistent_failure_uses_every_attempt() {
        let mut transport = MockLlmTransport::new();
        transport.expect_generate()
            .times(3)
            .returning(|_, _| Err(AiProviderError::NetworkError("connection reset".to_string())));

        let result = client(transport, CredentialStore::new().with_default("key"), 3)
            .analyze(AnalysisKind::CodeQuality, "prompt")
            .await;

        assert_eq!(result.failure_tag(), Some(FailureTag::ApiFailed));
        match result {
            AnalysisResult::Failure(failure) => assert!(failure.analysis_error.message.contains("connection reset")),
            AnalysisResult::Success(_) => panic!("expected a failure"),
        }
    }

    #[tokio::test]
    async fn malformed_response_is_retried_then_recovers() {
        let mut transport = MockLlmTransport::new();
        let mut sequence = mockall::Sequence::new();
        transport.expect_generate()
            .times(1)
            .in_sequence(&mut sequence)
            .returning(|_, _| Ok("Sorry, I cannot help with that.".to_string()));
        transport.expect_generate()
            .times(1)
            .in_sequence(&mut sequence)
            .returning(|_, _| Ok("{\"mind_map_overview\": \"tree\"}".to_string()));

        let result = client(transport, CredentialStore::new().with_default("key"), 2)
            .analyze(AnalysisKind::MindMap, "prompt")
            .await;

        assert!(result.is_success());
    }

    #[tokio::test]
    async fn error_field_in_payload_counts_as_failure() {
        let mut transport = MockLlmTransport::new();
        transport.expect_generate()
            .times(1)
            .returning(|_, _| Ok("{\"error\": \"You exceeded your current quota\"}".to_string()));

        let result = client(transport, CredentialStore::new().with_default("key"), 2)
            .analyze(AnalysisKind::Security, "prompt")
            .await;

        assert_eq!(result.failure_tag(), Some(FailureTag::QuotaExceeded));
    }

    #[tokio::test]
    async fn zero_attempts_still_yields_a_result() {
        let mut transport = MockLlmTransport::new();
        transport.expect_generate().times(0);

        let result = client(transport, CredentialStore::new().with_default("key"), 0)
            .analyze(AnalysisKind::Architecture, "prompt")
            .await;

        assert_eq!(result.failure_tag(), Some(FailureTag::ApiFailed));
    }
}
