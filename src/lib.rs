//! Katha - 多语言 AI 故事讲述服务
//!
//! 架构设计: DDD + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Story Context: 故事请求与提示词构建、合成语言代码映射
//! - text_chunker: 语音合成文本分块
//!
//! 应用层 (application/):
//! - Ports: 端口定义（StoryGenerator, SpeechSynthesizer）
//! - Commands: 命令处理器（单触发生成流水线）
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: 单页表单 + RESTful API
//! - Adapters: Gemini 文本生成、Translate TTS 语音合成

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
