//! Story Commands

use crate::application::ports::AudioClip;
use crate::domain::story::{Audience, Language, StoryType};

/// 生成故事命令（一次触发的全部输入）
#[derive(Debug, Clone)]
pub struct GenerateStoryCommand {
    pub story_type: StoryType,
    pub language: Language,
    pub audience: Audience,
    /// 可选的自定义提示词；空串等价于未填写
    pub custom_prompt: String,
}

/// 生成故事结果
#[derive(Debug, Clone)]
pub struct GenerateStoryResponse {
    /// 本次触发的标识（用于日志追踪）
    pub request_id: String,
    /// 生成的故事文本（已 trim）
    pub story: String,
    /// 故事语言
    pub language: Language,
    /// 文本下载文件名（{language}_story.txt）
    pub download_filename: String,
    /// 合成的语音
    pub audio: AudioClip,
}
