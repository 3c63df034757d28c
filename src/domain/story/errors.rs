//! Story Context - Errors

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoryError {
    /// Custom 类型且自定义提示去空白后为空，无法构建提示词
    #[error("Please select a story type or enter a custom prompt")]
    RequiresInput,
}
