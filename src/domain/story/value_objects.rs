//! Story Context - Value Objects

use serde::{Deserialize, Serialize};

/// 故事类型
///
/// Custom 表示用户自带提示词，不参与模板拼接
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StoryType {
    Adventure,
    Friendship,
    Animals,
    Moral,
    Magic,
    Custom,
}

impl StoryType {
    /// 模板提示词中使用的小写主题词
    ///
    /// Custom 没有主题词（永远不会出现在模板提示里）
    pub fn theme_word(&self) -> Option<&'static str> {
        match self {
            Self::Adventure => Some("adventure"),
            Self::Friendship => Some("friendship"),
            Self::Animals => Some("animals"),
            Self::Moral => Some("moral"),
            Self::Magic => Some("magic"),
            Self::Custom => None,
        }
    }
}

/// 支持的故事语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    English,
    Hindi,
    Kannada,
    Tamil,
    Malayalam,
}

impl Language {
    pub const ALL: [Language; 5] = [
        Language::English,
        Language::Hindi,
        Language::Kannada,
        Language::Tamil,
        Language::Malayalam,
    ];

    /// 显示名称（同时用于下载文件名前缀）
    pub fn name(&self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Hindi => "Hindi",
            Self::Kannada => "Kannada",
            Self::Tamil => "Tamil",
            Self::Malayalam => "Malayalam",
        }
    }

    /// 语音合成语言代码
    pub fn synthesis_code(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Hindi => "hi",
            Self::Kannada => "kn",
            Self::Tamil => "ta",
            Self::Malayalam => "ml",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// 按显示名称查找语音合成代码
///
/// 映射对五种支持语言是全函数；未识别的名称回退到 "en"
pub fn synthesis_code_for(name: &str) -> &'static str {
    Language::ALL
        .iter()
        .find(|lang| lang.name() == name)
        .map(|lang| lang.synthesis_code())
        .unwrap_or("en")
}

/// 目标受众
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Audience {
    Children,
    Parents,
    Teachers,
}

impl Audience {
    /// 模板提示词中使用的小写形式
    pub fn as_lowercase(&self) -> &'static str {
        match self {
            Self::Children => "children",
            Self::Parents => "parents",
            Self::Teachers => "teachers",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_word_for_templated_types() {
        assert_eq!(StoryType::Adventure.theme_word(), Some("adventure"));
        assert_eq!(StoryType::Friendship.theme_word(), Some("friendship"));
        assert_eq!(StoryType::Animals.theme_word(), Some("animals"));
        assert_eq!(StoryType::Moral.theme_word(), Some("moral"));
        assert_eq!(StoryType::Magic.theme_word(), Some("magic"));
    }

    #[test]
    fn test_custom_has_no_theme_word() {
        assert_eq!(StoryType::Custom.theme_word(), None);
    }

    #[test]
    fn test_synthesis_code_total_for_supported_languages() {
        assert_eq!(Language::English.synthesis_code(), "en");
        assert_eq!(Language::Hindi.synthesis_code(), "hi");
        assert_eq!(Language::Kannada.synthesis_code(), "kn");
        assert_eq!(Language::Tamil.synthesis_code(), "ta");
        assert_eq!(Language::Malayalam.synthesis_code(), "ml");

        for lang in Language::ALL {
            assert_eq!(synthesis_code_for(lang.name()), lang.synthesis_code());
        }
    }

    #[test]
    fn test_unknown_language_name_falls_back_to_en() {
        assert_eq!(synthesis_code_for("Klingon"), "en");
        assert_eq!(synthesis_code_for(""), "en");
        assert_eq!(synthesis_code_for("hindi"), "en"); // 大小写敏感，非精确名称也回退
    }

    #[test]
    fn test_audience_lowercase() {
        assert_eq!(Audience::Children.as_lowercase(), "children");
        assert_eq!(Audience::Parents.as_lowercase(), "parents");
        assert_eq!(Audience::Teachers.as_lowercase(), "teachers");
    }

    #[test]
    fn test_language_display_matches_name() {
        assert_eq!(Language::Malayalam.to_string(), "Malayalam");
    }
}
