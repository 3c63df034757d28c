//! Gemini Client - 调用 Google Gemini 文本生成服务
//!
//! 实现 StoryGeneratorPort trait，通过 REST 调用 generateContent 接口
//!
//! 外部 API:
//! POST {base_url}/models/{model}:generateContent?key={api_key}
//! Request: {"contents": [{"parts": [{"text": "..."}]}]}  (JSON)
//! Response: {"candidates": [{"content": {"parts": [{"text": "..."}]}}]}

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::application::ports::{GenerationError, StoryGeneratorPort};

/// generateContent 请求体 (JSON)
///
/// 不携带生成参数（temperature、maxOutputTokens 等），全部使用服务默认值
#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

/// generateContent 响应体（只解析用到的字段）
#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

/// Gemini 客户端配置
#[derive(Debug, Clone)]
pub struct GeminiClientConfig {
    /// API 基础 URL
    pub base_url: String,
    /// 模型标识（固定单模型）
    pub model: String,
    /// API 密钥
    pub api_key: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl Default for GeminiClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            model: "gemini-2.5-flash-lite".to_string(),
            api_key: String::new(),
            timeout_secs: 120,
        }
    }
}

impl GeminiClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Gemini 客户端
///
/// 通过 HTTP 调用 Gemini generateContent 服务
pub struct GeminiClient {
    client: Client,
    config: GeminiClientConfig,
}

impl GeminiClient {
    /// 创建新的 Gemini 客户端
    pub fn new(config: GeminiClientConfig) -> Result<Self, GenerationError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| GenerationError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// 获取 generateContent URL
    ///
    /// 密钥以查询参数携带，日志中不得输出该 URL
    fn generate_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.config.base_url,
            urlencoding::encode(&self.config.model),
            self.config.api_key
        )
    }

    /// 从响应体提取首个候选的全部文本
    fn extract_text(body: GenerateContentResponse) -> String {
        body.candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .map(|p| p.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default()
    }
}

#[async_trait]
impl StoryGeneratorPort for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let http_request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        tracing::debug!(
            model = %self.config.model,
            prompt_len = prompt.len(),
            "Sending generateContent request"
        );

        let response = self
            .client
            .post(self.generate_url())
            .json(&http_request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GenerationError::Timeout
                } else if e.is_connect() {
                    GenerationError::NetworkError(format!(
                        "Cannot connect to generation service: {}",
                        e
                    ))
                } else {
                    GenerationError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(GenerationError::ServiceError(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let body: GenerateContentResponse = response.json().await.map_err(|e| {
            GenerationError::InvalidResponse(format!("Failed to parse response: {}", e))
        })?;

        let text = Self::extract_text(body);
        if text.is_empty() {
            return Err(GenerationError::InvalidResponse(
                "Empty candidate text".to_string(),
            ));
        }

        tracing::info!(
            model = %self.config.model,
            text_len = text.len(),
            "Story generation completed"
        );

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = GeminiClientConfig::default();
        assert_eq!(
            config.base_url,
            "https://generativelanguage.googleapis.com/v1beta"
        );
        assert_eq!(config.model, "gemini-2.5-flash-lite");
        assert_eq!(config.timeout_secs, 120);
    }

    #[test]
    fn test_config_builder() {
        let config = GeminiClientConfig::new("secret")
            .with_model("gemini-2.0-flash")
            .with_timeout(30);
        assert_eq!(config.api_key, "secret");
        assert_eq!(config.model, "gemini-2.0-flash");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_generate_url_shape() {
        let client = GeminiClient::new(GeminiClientConfig::new("k123")).unwrap();
        assert_eq!(
            client.generate_url(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash-lite:generateContent?key=k123"
        );
    }

    #[test]
    fn test_extract_text_joins_candidate_parts() {
        let body: GenerateContentResponse = serde_json::from_str(
            r#"{
                "candidates": [
                    {"content": {"parts": [{"text": "Once upon"}, {"text": " a time."}]}},
                    {"content": {"parts": [{"text": "ignored second candidate"}]}}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(GeminiClient::extract_text(body), "Once upon a time.");
    }

    #[test]
    fn test_extract_text_empty_for_missing_candidates() {
        let body: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(GeminiClient::extract_text(body), "");
    }
}
