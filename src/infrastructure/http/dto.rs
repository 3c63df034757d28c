//! Data Transfer Objects

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::story::{Audience, Language, StoryType};

/// 占位插画地址（不做真实图片生成）
pub const ILLUSTRATION_PLACEHOLDER_URL: &str =
    "https://via.placeholder.com/400x300.png?text=AI+Story+Illustration";

// ============================================================================
// 统一响应结构
// ============================================================================

/// 统一 API 响应格式
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub errno: i32,
    pub error: String,
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// 成功响应
    pub fn success(data: T) -> Self {
        Self {
            errno: 0,
            error: String::new(),
            data: Some(data),
        }
    }
}

// ============================================================================
// Story DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct GenerateStoryRequest {
    pub story_type: StoryType,
    pub language: Language,
    pub audience: Audience,
    /// 可选自定义提示词；缺省等价于空串
    #[serde(default)]
    pub custom_prompt: String,
}

#[derive(Debug, Serialize)]
pub struct GenerateStoryResponseDto {
    pub request_id: String,
    pub story: String,
    pub language: String,
    /// 文本下载文件名（{language}_story.txt）
    pub download_filename: String,
    /// MP3 音频，Base64 编码内联（服务端不保留任何状态）
    pub audio_base64: String,
    pub audio_format: String,
    pub illustration_url: String,
    pub generated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_request_deserializes_enum_values() {
        let req: GenerateStoryRequest = serde_json::from_str(
            r#"{
                "story_type": "Moral",
                "language": "Tamil",
                "audience": "Children",
                "custom_prompt": ""
            }"#,
        )
        .unwrap();

        assert_eq!(req.story_type, StoryType::Moral);
        assert_eq!(req.language, Language::Tamil);
        assert_eq!(req.audience, Audience::Children);
        assert!(req.custom_prompt.is_empty());
    }

    #[test]
    fn test_generate_request_custom_prompt_defaults_to_empty() {
        let req: GenerateStoryRequest = serde_json::from_str(
            r#"{"story_type": "Custom", "language": "English", "audience": "Parents"}"#,
        )
        .unwrap();

        assert!(req.custom_prompt.is_empty());
    }

    #[test]
    fn test_generate_request_rejects_unknown_language() {
        let result = serde_json::from_str::<GenerateStoryRequest>(
            r#"{"story_type": "Magic", "language": "Latin", "audience": "Children"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_api_response_success_envelope() {
        let response = ApiResponse::success("payload");
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["errno"], 0);
        assert_eq!(json["error"], "");
        assert_eq!(json["data"], "payload");
    }
}
