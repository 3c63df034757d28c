//! Fake Speech Synthesizer - 用于联调的语音合成客户端
//!
//! 返回拼凑的字节序列（不是可播放的音频），不实际调用合成服务

use async_trait::async_trait;

use crate::application::ports::{AudioClip, AudioFormat, SpeechSynthesizerPort, SynthesisError};

/// 填充用的 MP3 帧头字节
const FRAME_STUB: [u8; 4] = [0xFF, 0xF3, 0x44, 0xC4];

/// Fake Speech Synthesizer 配置
#[derive(Debug, Clone)]
pub struct FakeSpeechSynthesizerConfig {
    /// 每个输入字符生成的填充字节数
    pub bytes_per_char: usize,
    /// 模拟的合成延迟（毫秒）
    pub delay_ms: u64,
}

impl Default for FakeSpeechSynthesizerConfig {
    fn default() -> Self {
        Self {
            bytes_per_char: 4,
            delay_ms: 200,
        }
    }
}

/// Fake Speech Synthesizer
///
/// 用于联调，音频大小与输入文本长度成比例，便于观察链路行为
pub struct FakeSpeechSynthesizer {
    config: FakeSpeechSynthesizerConfig,
}

impl FakeSpeechSynthesizer {
    pub fn new(config: FakeSpeechSynthesizerConfig) -> Self {
        Self { config }
    }

    /// 使用默认配置创建
    pub fn with_defaults() -> Self {
        Self::new(FakeSpeechSynthesizerConfig::default())
    }
}

#[async_trait]
impl SpeechSynthesizerPort for FakeSpeechSynthesizer {
    async fn synthesize(
        &self,
        text: &str,
        language_code: &str,
    ) -> Result<AudioClip, SynthesisError> {
        if text.trim().is_empty() {
            return Err(SynthesisError::EmptyText);
        }

        tracing::debug!(
            text_len = text.len(),
            language_code = %language_code,
            "FakeSpeechSynthesizer: returning stub audio"
        );

        // 模拟合成延迟
        tokio::time::sleep(tokio::time::Duration::from_millis(self.config.delay_ms)).await;

        let total = text.chars().count() * self.config.bytes_per_char;
        let data: Vec<u8> = FRAME_STUB.iter().copied().cycle().take(total).collect();

        Ok(AudioClip {
            data,
            format: AudioFormat::Mp3,
        })
    }
}
