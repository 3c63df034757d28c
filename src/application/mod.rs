//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（StoryGenerator、SpeechSynthesizer）
//! - commands: 命令及处理器（单触发生成流水线）
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;

// Re-exports
pub use commands::{
    // Story commands
    GenerateStoryCommand,
    GenerateStoryResponse,
    // Handlers
    handlers::GenerateStoryHandler,
};

pub use error::ApplicationError;

pub use ports::{
    AudioClip, AudioFormat, GenerationError, SpeechSynthesizerPort, StoryGeneratorPort,
    SynthesisError,
};
