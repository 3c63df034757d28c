//! Story Generator Port - 文本生成服务抽象
//!
//! 定义生成式文本服务的抽象接口，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use thiserror::Error;

/// 文本生成错误
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Service error: {0}")]
    ServiceError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Story Generator Port
///
/// 外部生成式文本服务的抽象接口
#[async_trait]
pub trait StoryGeneratorPort: Send + Sync {
    /// 根据提示词生成故事文本
    ///
    /// 返回服务原样输出的文本，调用方负责 trim。
    /// 不重试：任何失败直接上抛
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;

    /// 检查生成服务是否可用
    async fn health_check(&self) -> bool {
        true // 默认实现
    }
}
