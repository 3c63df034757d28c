//! Speech Synthesizer Port - 语音合成服务抽象
//!
//! 定义文本转语音的抽象接口，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use thiserror::Error;

/// 语音合成错误
#[derive(Debug, Error)]
pub enum SynthesisError {
    #[error("Cannot synthesize empty text")]
    EmptyText,

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Service error: {0}")]
    ServiceError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// 音频编码格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioFormat {
    Mp3,
}

impl AudioFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Mp3 => "mp3",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Mp3 => "audio/mpeg",
        }
    }
}

/// 合成得到的音频
///
/// 完整音频内容在内存中持有，不落盘
#[derive(Debug, Clone)]
pub struct AudioClip {
    /// 音频字节
    pub data: Vec<u8>,
    /// 编码格式
    pub format: AudioFormat,
}

/// Speech Synthesizer Port
///
/// 外部语音合成服务的抽象接口
#[async_trait]
pub trait SpeechSynthesizerPort: Send + Sync {
    /// 将文本合成为语音
    ///
    /// `language_code` 为合成语言代码（如 "en"、"hi"）。
    /// 空文本直接失败，不发起网络调用
    async fn synthesize(
        &self,
        text: &str,
        language_code: &str,
    ) -> Result<AudioClip, SynthesisError>;
}
