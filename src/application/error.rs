//! 应用层错误定义
//!
//! 统一的命令错误类型

use thiserror::Error;

use crate::application::ports::{GenerationError, SynthesisError};
use crate::domain::story::StoryError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 输入不完整（可恢复；未触发任何外部调用）
    #[error("{0}")]
    RequiresInput(String),

    /// 验证错误
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 外部服务错误（文本生成或语音合成失败）
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 内部错误
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ApplicationError {
    /// 创建验证错误
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }

    /// 创建外部服务错误
    pub fn external(message: impl Into<String>) -> Self {
        Self::ExternalServiceError(message.into())
    }

    /// 创建内部错误
    pub fn internal(message: impl Into<String>) -> Self {
        Self::InternalError(message.into())
    }
}

impl From<StoryError> for ApplicationError {
    fn from(err: StoryError) -> Self {
        match err {
            StoryError::RequiresInput => Self::RequiresInput(err.to_string()),
        }
    }
}

impl From<GenerationError> for ApplicationError {
    fn from(err: GenerationError) -> Self {
        Self::ExternalServiceError(err.to_string())
    }
}

impl From<SynthesisError> for ApplicationError {
    fn from(err: SynthesisError) -> Self {
        Self::ExternalServiceError(err.to_string())
    }
}
