//! Translate TTS Client - 调用 Google Translate 语音合成接口
//!
//! 实现 SpeechSynthesizerPort trait。接口对单次请求文本长度有上限，
//! 长文本先经 text_chunker 切块，再把各块返回的 MP3 流按顺序拼接
//! （MP3 帧流可以直接拼接成一个有效文件）
//!
//! 外部 API:
//! GET {base_url}/translate_tts?ie=UTF-8&q=...&tl=en&client=tw-ob&total=N&idx=I&textlen=L
//! Response: audio/mpeg binary

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::application::ports::{AudioClip, AudioFormat, SpeechSynthesizerPort, SynthesisError};
use crate::domain::{chunk_text, ChunkConfig};

/// Translate TTS 客户端配置
#[derive(Debug, Clone)]
pub struct TranslateTtsClientConfig {
    /// TTS 服务基础 URL
    pub base_url: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
    /// 单块最大字符数（接口输入上限）
    pub max_chunk_chars: usize,
}

impl Default for TranslateTtsClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://translate.google.com".to_string(),
            timeout_secs: 60,
            max_chunk_chars: 100,
        }
    }
}

impl TranslateTtsClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Translate TTS 客户端
///
/// 通过 HTTP 调用 Translate TTS 服务
pub struct TranslateTtsClient {
    client: Client,
    config: TranslateTtsClientConfig,
}

impl TranslateTtsClient {
    /// 创建新的 Translate TTS 客户端
    pub fn new(config: TranslateTtsClientConfig) -> Result<Self, SynthesisError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SynthesisError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// 使用默认配置创建客户端
    pub fn with_default_config() -> Result<Self, SynthesisError> {
        Self::new(TranslateTtsClientConfig::default())
    }

    /// 获取合成 URL
    fn tts_url(&self) -> String {
        format!("{}/translate_tts", self.config.base_url)
    }

    /// 合成单块文本，返回该块的 MP3 字节
    async fn synthesize_chunk(
        &self,
        chunk: &str,
        language_code: &str,
        idx: usize,
        total: usize,
    ) -> Result<Vec<u8>, SynthesisError> {
        let params: [(&str, String); 7] = [
            ("ie", "UTF-8".to_string()),
            ("q", chunk.to_string()),
            ("tl", language_code.to_string()),
            ("client", "tw-ob".to_string()),
            ("total", total.to_string()),
            ("idx", idx.to_string()),
            ("textlen", chunk.chars().count().to_string()),
        ];

        let response = self
            .client
            .get(self.tts_url())
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SynthesisError::Timeout
                } else if e.is_connect() {
                    SynthesisError::NetworkError(format!("Cannot connect to TTS service: {}", e))
                } else {
                    SynthesisError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(SynthesisError::ServiceError(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let audio = response
            .bytes()
            .await
            .map_err(|e| SynthesisError::InvalidResponse(format!("Failed to read audio: {}", e)))?
            .to_vec();

        if audio.is_empty() {
            return Err(SynthesisError::InvalidResponse(format!(
                "Empty audio for chunk {}",
                idx
            )));
        }

        Ok(audio)
    }
}

#[async_trait]
impl SpeechSynthesizerPort for TranslateTtsClient {
    async fn synthesize(
        &self,
        text: &str,
        language_code: &str,
    ) -> Result<AudioClip, SynthesisError> {
        if text.trim().is_empty() {
            return Err(SynthesisError::EmptyText);
        }

        let chunk_config = ChunkConfig {
            max_chars: self.config.max_chunk_chars,
        };
        let chunks = chunk_text(text, &chunk_config);
        let total = chunks.len();

        tracing::debug!(
            language_code = %language_code,
            text_len = text.len(),
            chunks = total,
            "Sending TTS synthesis requests"
        );

        // 逐块顺序合成，单块失败即整体失败
        let mut data = Vec::new();
        for (idx, chunk) in chunks.iter().enumerate() {
            let audio = self
                .synthesize_chunk(chunk, language_code, idx, total)
                .await?;
            data.extend_from_slice(&audio);
        }

        if data.is_empty() {
            return Err(SynthesisError::InvalidResponse(
                "No audio produced".to_string(),
            ));
        }

        tracing::info!(
            language_code = %language_code,
            chunks = total,
            audio_size = data.len(),
            "TTS synthesis completed"
        );

        Ok(AudioClip {
            data,
            format: AudioFormat::Mp3,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = TranslateTtsClientConfig::default();
        assert_eq!(config.base_url, "https://translate.google.com");
        assert_eq!(config.timeout_secs, 60);
        assert_eq!(config.max_chunk_chars, 100);
    }

    #[test]
    fn test_config_builder() {
        let config = TranslateTtsClientConfig::new("http://localhost:9001").with_timeout(10);
        assert_eq!(config.base_url, "http://localhost:9001");
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn test_tts_url() {
        let client = TranslateTtsClient::with_default_config().unwrap();
        assert_eq!(
            client.tts_url(),
            "https://translate.google.com/translate_tts"
        );
    }

    #[tokio::test]
    async fn test_empty_text_rejected_without_network() {
        let client = TranslateTtsClient::with_default_config().unwrap();
        let result = client.synthesize("   \n ", "en").await;
        assert!(matches!(result, Err(SynthesisError::EmptyText)));
    }
}
