//! Fake Story Generator - 用于联调的文本生成客户端
//!
//! 始终返回固定故事文本，不实际调用生成服务

use async_trait::async_trait;

use crate::application::ports::{GenerationError, StoryGeneratorPort};

/// Fake Story Generator 配置
#[derive(Debug, Clone)]
pub struct FakeStoryGeneratorConfig {
    /// 固定返回的故事文本
    pub story: String,
    /// 模拟的生成延迟（毫秒）
    pub delay_ms: u64,
}

impl Default for FakeStoryGeneratorConfig {
    fn default() -> Self {
        Self {
            story: "Once upon a time, a little fox found a shiny river stone. \
                    It shared the stone with every friend in the forest, and the \
                    forest felt twice as bright. The end."
                .to_string(),
            delay_ms: 200,
        }
    }
}

/// Fake Story Generator
///
/// 用于联调，始终返回配置的固定文本
pub struct FakeStoryGenerator {
    config: FakeStoryGeneratorConfig,
}

impl FakeStoryGenerator {
    pub fn new(config: FakeStoryGeneratorConfig) -> Self {
        Self { config }
    }

    /// 使用默认配置创建
    pub fn with_defaults() -> Self {
        Self::new(FakeStoryGeneratorConfig::default())
    }
}

#[async_trait]
impl StoryGeneratorPort for FakeStoryGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        tracing::debug!(
            prompt_len = prompt.len(),
            "FakeStoryGenerator: returning fixed story"
        );

        // 模拟生成延迟
        tokio::time::sleep(tokio::time::Duration::from_millis(self.config.delay_ms)).await;

        Ok(self.config.story.clone())
    }
}
