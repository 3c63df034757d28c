//! Application State
//!
//! 包含端口与 Command Handler 的应用状态

use std::sync::Arc;

use crate::application::{GenerateStoryHandler, SpeechSynthesizerPort, StoryGeneratorPort};

/// 应用状态
///
/// 仅持有无状态的客户端与处理器；触发之间不保留任何数据
pub struct AppState {
    // ========== Ports ==========
    pub story_generator: Arc<dyn StoryGeneratorPort>,
    pub speech_synthesizer: Arc<dyn SpeechSynthesizerPort>,

    // ========== Command Handlers ==========
    pub generate_story_handler: GenerateStoryHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        story_generator: Arc<dyn StoryGeneratorPort>,
        speech_synthesizer: Arc<dyn SpeechSynthesizerPort>,
    ) -> Self {
        Self {
            // Ports
            story_generator: story_generator.clone(),
            speech_synthesizer: speech_synthesizer.clone(),

            // Command handlers
            generate_story_handler: GenerateStoryHandler::new(
                story_generator.clone(),
                speech_synthesizer.clone(),
            ),
        }
    }
}
