use crate::adapters::http::{build_client, map_request_error, truncate_body};
use crate::config::HuggingFaceConfig;
use crate::core::{Answer, QuestionAnswerer};
use crate::utils::error::{MaritimeError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};

const SERVICE: &str = "HuggingFace";

#[derive(Debug, Clone)]
pub struct HuggingFaceClient {
    client: Client,
    config: HuggingFaceConfig,
    api_key: String,
}

impl HuggingFaceClient {
    pub fn new(config: HuggingFaceConfig) -> Result<Self> {
        let api_key = config.api_key()?.to_string();
        let client = build_client(config.timeout())?;
        Ok(Self {
            client,
            config,
            api_key,
        })
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }
}

fn is_empty_payload(data: &Value) -> bool {
    match data {
        Value::Null => true,
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Pulls the generated text out of an inference response. Shapes the API is
/// not known to produce are returned verbatim as JSON text.
pub(crate) fn extract_generated_text(data: &Value) -> Result<String> {
    if is_empty_payload(data) {
        return Err(MaritimeError::EmptyResponse {
            service: SERVICE.to_string(),
        });
    }

    if let Some(text) = data
        .as_array()
        .and_then(|items| items.first())
        .and_then(|first| first.get("generated_text"))
        .and_then(Value::as_str)
    {
        return Ok(text.to_string());
    }

    if let Some(text) = data.get("generated_text").and_then(Value::as_str) {
        return Ok(text.to_string());
    }

    if let Some(error) = data.get("error") {
        let message = error
            .as_str()
            .map(str::to_string)
            .unwrap_or_else(|| error.to_string());
        return Err(MaritimeError::ServiceError {
            service: SERVICE.to_string(),
            message,
        });
    }

    Ok(data.to_string())
}

#[async_trait]
impl QuestionAnswerer for HuggingFaceClient {
    async fn answer(&self, question: &str) -> Result<Answer> {
        let url = self.endpoint();
        tracing::debug!("POST {} ({} chars)", url, question.len());

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&json!({ "inputs": question }))
            .send()
            .await
            .map_err(|e| map_request_error(e, "question answering", self.config.timeout()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| map_request_error(e, "question answering", self.config.timeout()))?;

        if status.as_u16() != 200 {
            tracing::warn!("{} returned {}: {}", SERVICE, status, truncate_body(&body));
            return Err(MaritimeError::ApiStatus {
                service: SERVICE.to_string(),
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        let data: Value = serde_json::from_str(&body).map_err(|e| {
            tracing::warn!("{} returned non-JSON body: {}", SERVICE, e);
            MaritimeError::ResponseFormat {
                service: SERVICE.to_string(),
                message: e.to_string(),
            }
        })?;

        let text = extract_generated_text(&data)?;
        Ok(Answer {
            text,
            model: self.config.model.clone(),
        })
    }
}
