use async_trait::async_trait;
use reqwest::Client;
use crate::config::constants::timeout_duration_secs;
use crate::enums::ai_provider_error::AiProviderError;
use crate::errors::{RepoAnalyzerError, RepoAnalyzerResult};
use crate::structs::ai::gemini::gemini_content::GeminiContent;
use crate::structs::ai::gemini::gemini_generation_config::GeminiGenerationConfig;
use crate::structs::ai::gemini::gemini_part::GeminiPart;
use crate::structs::ai::gemini::gemini_request::GeminiRequest;
use crate::structs::config::analysis_config::AnalysisConfig;
use crate::traits::llm_transport::LlmTransport;

#[derive(Clone)]
pub struct GeminiProvider {
    base_url: String,
    client: Client,
    model: String,
    temperature: f64,
    max_output_tokens: u32,
}

impl GeminiProvider {
    pub fn new(config: &AnalysisConfig) -> RepoAnalyzerResult<Self> {
        let client = Client::builder()
            .timeout(timeout_duration_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| RepoAnalyzerError::system_error("building HTTP client", &e.to_string()))?;

        Ok(Self {
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            client,
            model: config.model.clone(),
            temperature: config.temperature,
            max_output_tokens: config.max_output_tokens,
        })
    }

    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    fn get_request(&self, prompt: &str) -> GeminiRequest {
        GeminiRequest {
            contents: vec![GeminiContent {
                role: "user".to_string(),
                parts: vec![GeminiPart {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: Some(GeminiGenerationConfig {
                temperature: Some(self.temperature),
                max_output_tokens: Some(self.max_output_tokens),
                candidate_count: Some(1),
                response_mime_type: Some("application/json".to_string()),
            }),
        }
    }

    async fn make_request(&self, url: &str, credential: &str, request_body: &GeminiRequest) -> Result<reqwest::Response, AiProviderError> {
        log::debug!("📦 Request model: {}", self.model);

        self.client
            .post(url)
            .header("Content-Type", "application/json")
            .header("x-goog-api-key", credential)
            .json(request_body)
            .send()
            .await
            .map_err(|e| AiProviderError::NetworkError(e.to_string()))
    }
}

#[async_trait]
impl LlmTransport for GeminiProvider {
    async fn generate(&self, credential: &str, prompt: &str) -> Result<String, AiProviderError> {
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);
        let request_body = self.get_request(prompt);

        let response = self.make_request(&url, credential, &request_body).await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            return Err(match status.as_u16() {
                400 => AiProviderError::api(400, &format!("Bad request: {}", error_text)),
                401 => AiProviderError::AuthenticationError(error_text),
                403 => AiProviderError::api(403, &format!("Forbidden: {}", error_text)),
                429 => AiProviderError::api(429, &format!("Rate limit exceeded: {}", error_text)),
                code => AiProviderError::api(code, &error_text),
            });
        }

        let json: serde_json::Value = response.json().await
            .map_err(|e| AiProviderError::SerializationError(e.to_string()))?;

        if let Some(error) = json.get("error") {
            let error_message = error.get("message")
                .and_then(|m| m.as_str())
                .unwrap_or("Unknown error");
            let error_code = error.get("code")
                .and_then(|c| c.as_u64())
                .and_then(|c| u16::try_from(c).ok())
                .unwrap_or(500);
            return Err(AiProviderError::api(error_code, error_message));
        }

        let text: String = json
            .get("candidates")
            .and_then(|candidates| candidates.as_array())
            .and_then(|candidates| candidates.first())
            .and_then(|candidate| candidate.get("content"))
            .and_then(|content| content.get("parts"))
            .and_then(|parts| parts.as_array())
            .map(|parts| {
                parts.iter()
                    .filter_map(|part| part.get("text").and_then(|text| text.as_str()))
                    .collect()
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err(AiProviderError::SerializationError("No content in response".to_string()));
        }

        Ok(text)
    }
}
