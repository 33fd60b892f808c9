use crate::config::types::AgentConfig;
use crate::llm::provider::{LLMError, LLMProvider, LLMRequest, LLMResponse, Usage};
use crate::llm::retry::{RequestPolicy, run_with_policy};
use async_trait::async_trait;
use reqwest::{Client as HttpClient, StatusCode};
use serde_json::{Value, json};

pub struct OpenAIProvider {
    api_key: String,
    http_client: HttpClient,
    base_url: String,
    policy: RequestPolicy,
}

impl OpenAIProvider {
    pub fn new(api_key: String, base_url: String, policy: RequestPolicy) -> Self {
        Self {
            api_key,
            http_client: HttpClient::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            policy,
        }
    }

    pub fn from_config(config: &AgentConfig) -> Self {
        Self::new(
            config.api_key.clone(),
            config.base_url.clone(),
            config.policy,
        )
    }

    pub fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    async fn send_once(&self, body: &Value) -> Result<LLMResponse, LLMError> {
        let response = self
            .http_client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| LLMError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(classify_status(status, &error_text));
        }

        let response_json: Value = response
            .json()
            .await
            .map_err(|e| LLMError::Provider(format!("Failed to parse response: {e}")))?;

        parse_openai_response(&response_json)
    }
}

#[async_trait]
impl LLMProvider for OpenAIProvider {
    fn name(&self) -> &str {
        "openai"
    }

    async fn generate(&self, request: LLMRequest) -> Result<LLMResponse, LLMError> {
        validate_request(&request)?;
        let body = convert_to_openai_format(&request);

        tracing::debug!(
            endpoint = %self.endpoint(),
            model = %request.model,
            messages = request.messages.len(),
            "sending chat completion request"
        );

        run_with_policy(&self.policy, || self.send_once(&body)).await
    }
}

fn validate_request(request: &LLMRequest) -> Result<(), LLMError> {
    if request.messages.is_empty() {
        return Err(LLMError::InvalidRequest(
            "Messages cannot be empty".to_string(),
        ));
    }

    if request.model.trim().is_empty() {
        return Err(LLMError::InvalidRequest(
            "Model cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Build the `chat/completions` body. Only model and messages are sent.
pub(crate) fn convert_to_openai_format(request: &LLMRequest) -> Value {
    let messages: Vec<Value> = request
        .messages
        .iter()
        .map(|msg| {
            json!({
                "role": msg.role.as_str(),
                "content": msg.content
            })
        })
        .collect();

    json!({
        "model": request.model,
        "messages": messages
    })
}

pub(crate) fn classify_status(status: StatusCode, error_text: &str) -> LLMError {
    let detail = extract_error_message(error_text).unwrap_or_else(|| error_text.to_string());
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            LLMError::Authentication(format!("HTTP {status}: {detail}"))
        }
        StatusCode::TOO_MANY_REQUESTS => LLMError::RateLimit,
        _ => LLMError::Provider(format!("HTTP {status}: {detail}")),
    }
}

fn extract_error_message(error_text: &str) -> Option<String> {
    let parsed: Value = serde_json::from_str(error_text).ok()?;
    parsed
        .get("error")?
        .get("message")?
        .as_str()
        .map(str::to_string)
}

pub(crate) fn parse_openai_response(response_json: &Value) -> Result<LLMResponse, LLMError> {
    let choices = response_json
        .get("choices")
        .and_then(|c| c.as_array())
        .ok_or_else(|| LLMError::Provider("Invalid response format: missing choices".to_string()))?;

    let choice = choices
        .first()
        .ok_or_else(|| LLMError::Provider("No choices in response".to_string()))?;

    let message = choice.get("message").ok_or_else(|| {
        LLMError::Provider("Invalid response format: missing message".to_string())
    })?;

    let content = message
        .get("content")
        .and_then(|c| c.as_str())
        .ok_or_else(|| {
            LLMError::Provider("Invalid response format: missing message content".to_string())
        })?
        .to_string();

    let usage = response_json.get("usage").map(|u| {
        let field = |name: &str| {
            u.get(name)
                .and_then(|v| v.as_u64())
                .map_or(0, |v| u32::try_from(v).unwrap_or(u32::MAX))
        };
        Usage {
            prompt_tokens: field("prompt_tokens"),
            completion_tokens: field("completion_tokens"),
            total_tokens: field("total_tokens"),
        }
    });

    Ok(LLMResponse { content, usage })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::provider::Message;

    #[test]
    fn test_request_body_contains_only_model_and_messages() {
        let request = LLMRequest::new(
            "gpt-4",
            vec![Message::system("be brief"), Message::user("hello")],
        );
        let body = convert_to_openai_format(&request);

        assert_eq!(
            body,
            json!({
                "model": "gpt-4",
                "messages": [
                    {"role": "system", "content": "be brief"},
                    {"role": "user", "content": "hello"}
                ]
            })
        );
        assert!(body.get("max_tokens").is_none());
    }

    #[test]
    fn test_parse_response_content_and_usage() {
        let payload = json!({
            "choices": [{"message": {"role": "assistant", "content": "hi there"}}],
            "usage": {"prompt_tokens": 12, "completion_tokens": 3, "total_tokens": 15}
        });
        let response = parse_openai_response(&payload).unwrap();
        assert_eq!(response.content, "hi there");
        assert_eq!(response.usage.unwrap().total_tokens, 15);
    }

    #[test]
    fn test_oversized_usage_counts_saturate() {
        let payload = json!({
            "choices": [{"message": {"content": "ok"}}],
            "usage": {"prompt_tokens": 4_294_967_296u64, "completion_tokens": 1}
        });
        let usage = parse_openai_response(&payload).unwrap().usage.unwrap();
        assert_eq!(usage.prompt_tokens, u32::MAX);
        assert_eq!(usage.completion_tokens, 1);
        assert_eq!(usage.total_tokens, 0);
    }

    #[test]
    fn test_parse_response_without_choices() {
        let err = parse_openai_response(&json!({"id": "x"})).unwrap_err();
        assert!(matches!(err, LLMError::Provider(msg) if msg.contains("missing choices")));

        let err = parse_openai_response(&json!({"choices": []})).unwrap_err();
        assert_eq!(err, LLMError::Provider("No choices in response".to_string()));
    }

    #[test]
    fn test_parse_response_null_content() {
        let payload = json!({"choices": [{"message": {"content": null}}]});
        assert!(parse_openai_response(&payload).is_err());
    }

    #[test]
    fn test_classify_status() {
        let body = r#"{"error": {"message": "Incorrect API key provided"}}"#;
        let err = classify_status(StatusCode::UNAUTHORIZED, body);
        assert_eq!(
            err,
            LLMError::Authentication(
                "HTTP 401 Unauthorized: Incorrect API key provided".to_string()
            )
        );

        assert_eq!(
            classify_status(StatusCode::TOO_MANY_REQUESTS, ""),
            LLMError::RateLimit
        );

        let err = classify_status(StatusCode::BAD_GATEWAY, "upstream");
        assert!(err.is_transient());
    }

    #[test]
    fn test_endpoint_strips_trailing_slash() {
        let provider = OpenAIProvider::new(
            "k1".to_string(),
            "http://localhost:1234/v1/".to_string(),
            RequestPolicy::default(),
        );
        assert_eq!(provider.endpoint(), "http://localhost:1234/v1/chat/completions");
    }

    #[tokio::test]
    async fn test_empty_request_is_rejected_before_sending() {
        let provider = OpenAIProvider::new(
            "k1".to_string(),
            "http://127.0.0.1:9".to_string(),
            RequestPolicy::default(),
        );
        let err = provider
            .generate(LLMRequest::new("gpt-4", Vec::new()))
            .await
            .unwrap_err();
        assert!(matches!(err, LLMError::InvalidRequest(_)));
    }
}
