//! Story Command Handlers

use std::sync::Arc;

use uuid::Uuid;

use crate::application::commands::story_commands::{GenerateStoryCommand, GenerateStoryResponse};
use crate::application::error::ApplicationError;
use crate::application::ports::{SpeechSynthesizerPort, StoryGeneratorPort};
use crate::domain::story::{synthesis_code_for, StoryRequest};

/// GenerateStory Handler - 故事生成流水线
///
/// 单次触发线性执行：构建提示词 -> 文本生成 -> 语音合成。
/// 任一阶段失败即终止，后续阶段不执行，不产生部分结果
pub struct GenerateStoryHandler {
    story_generator: Arc<dyn StoryGeneratorPort>,
    speech_synthesizer: Arc<dyn SpeechSynthesizerPort>,
}

impl GenerateStoryHandler {
    pub fn new(
        story_generator: Arc<dyn StoryGeneratorPort>,
        speech_synthesizer: Arc<dyn SpeechSynthesizerPort>,
    ) -> Self {
        Self {
            story_generator,
            speech_synthesizer,
        }
    }

    pub async fn handle(
        &self,
        cmd: GenerateStoryCommand,
    ) -> Result<GenerateStoryResponse, ApplicationError> {
        let request_id = Uuid::new_v4().to_string();

        let request = StoryRequest {
            story_type: cmd.story_type,
            language: cmd.language,
            audience: cmd.audience,
            custom_prompt: cmd.custom_prompt,
        };

        // 构建提示词；失败则不触发任何外部调用
        let prompt = request.build_prompt()?;

        tracing::info!(
            request_id = %request_id,
            story_type = ?request.story_type,
            language = %request.language,
            audience = ?request.audience,
            prompt_len = prompt.as_str().len(),
            "Generating story"
        );

        let raw_story = self.story_generator.generate(prompt.as_str()).await?;
        let story = raw_story.trim().to_string();

        tracing::debug!(
            request_id = %request_id,
            story_len = story.len(),
            "Story text generated"
        );

        // 语言代码按显示名称查表，未识别回退 "en"（全链路唯一的静默回退）
        let audio = self
            .speech_synthesizer
            .synthesize(&story, synthesis_code_for(request.language.name()))
            .await?;

        tracing::info!(
            request_id = %request_id,
            audio_size = audio.data.len(),
            "Story pipeline completed"
        );

        Ok(GenerateStoryResponse {
            request_id,
            story,
            download_filename: format!("{}_story.txt", request.language),
            language: request.language,
            audio,
        })
    }
}
