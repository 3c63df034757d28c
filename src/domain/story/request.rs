//! Story Context - 故事请求聚合

use super::errors::StoryError;
use super::value_objects::{Audience, Language, StoryType};

/// 构建完成的提示词
///
/// 不变量: 构建后不可变
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptString(String);

impl PromptString {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for PromptString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 一次生成触发携带的全部输入
///
/// 不变量:
/// - story_type 为 Custom 时，custom_prompt 去空白后必须非空，
///   否则请求在任何外部调用之前被拒绝
#[derive(Debug, Clone)]
pub struct StoryRequest {
    pub story_type: StoryType,
    pub language: Language,
    pub audience: Audience,
    pub custom_prompt: String,
}

impl StoryRequest {
    /// 构建提示词
    ///
    /// 优先级规则（固定语义，不可"修正"）:
    /// 1. 非 Custom 类型且自定义提示为空 -> 模板提示
    /// 2. 自定义提示非空 -> 逐字使用自定义提示，覆盖模板，
    ///    即使同时选择了非 Custom 类型
    /// 3. Custom 类型且自定义提示为空 -> RequiresInput
    ///
    /// 空判定用 trim 后的文本；逐字使用时不做 trim
    pub fn build_prompt(&self) -> Result<PromptString, StoryError> {
        if self.custom_prompt.trim().is_empty() {
            match self.story_type.theme_word() {
                Some(theme) => Ok(PromptString(format!(
                    "Write a short {} story in {} for {}.",
                    theme,
                    self.language,
                    self.audience.as_lowercase()
                ))),
                None => Err(StoryError::RequiresInput),
            }
        } else {
            Ok(PromptString(self.custom_prompt.clone()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(
        story_type: StoryType,
        language: Language,
        audience: Audience,
        custom_prompt: &str,
    ) -> StoryRequest {
        StoryRequest {
            story_type,
            language,
            audience,
            custom_prompt: custom_prompt.to_string(),
        }
    }

    #[test]
    fn test_templated_prompt_for_each_story_type() {
        let cases = [
            (StoryType::Adventure, "adventure"),
            (StoryType::Friendship, "friendship"),
            (StoryType::Animals, "animals"),
            (StoryType::Moral, "moral"),
            (StoryType::Magic, "magic"),
        ];

        for (story_type, theme) in cases {
            let prompt = request(story_type, Language::English, Audience::Children, "")
                .build_prompt()
                .unwrap();
            assert_eq!(
                prompt.as_str(),
                format!("Write a short {} story in English for children.", theme)
            );
        }
    }

    #[test]
    fn test_moral_tamil_children_scenario() {
        let prompt = request(StoryType::Moral, Language::Tamil, Audience::Children, "")
            .build_prompt()
            .unwrap();
        assert_eq!(
            prompt.as_str(),
            "Write a short moral story in Tamil for children."
        );
    }

    #[test]
    fn test_audience_is_lowercased_in_template() {
        let prompt = request(StoryType::Magic, Language::Hindi, Audience::Teachers, "")
            .build_prompt()
            .unwrap();
        assert_eq!(
            prompt.as_str(),
            "Write a short magic story in Hindi for teachers."
        );
    }

    #[test]
    fn test_custom_prompt_overrides_template() {
        // 非 Custom 类型 + 非空自定义提示：自定义提示获胜
        let prompt = request(
            StoryType::Adventure,
            Language::English,
            Audience::Children,
            "A dragon learns to share",
        )
        .build_prompt()
        .unwrap();
        assert_eq!(prompt.as_str(), "A dragon learns to share");
    }

    #[test]
    fn test_custom_prompt_used_verbatim_untrimmed() {
        let prompt = request(
            StoryType::Custom,
            Language::Kannada,
            Audience::Parents,
            "  a story with spaces  ",
        )
        .build_prompt()
        .unwrap();
        assert_eq!(prompt.as_str(), "  a story with spaces  ");
    }

    #[test]
    fn test_custom_type_with_empty_prompt_requires_input() {
        let result = request(StoryType::Custom, Language::English, Audience::Children, "")
            .build_prompt();
        assert_eq!(result.unwrap_err(), StoryError::RequiresInput);
    }

    #[test]
    fn test_custom_type_with_whitespace_prompt_requires_input() {
        let result = request(
            StoryType::Custom,
            Language::Tamil,
            Audience::Teachers,
            "   \n\t  ",
        )
        .build_prompt();
        assert_eq!(result.unwrap_err(), StoryError::RequiresInput);
    }
}
