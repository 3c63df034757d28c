//! Infrastructure Layer - 基础设施层
//!
//! - http: 单页表单 + RESTful API
//! - adapters: Gemini 文本生成、Translate TTS 语音合成客户端

pub mod adapters;
pub mod http;
