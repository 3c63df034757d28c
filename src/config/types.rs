//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::path::PathBuf;

/// 应用主配置
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 文本生成服务配置
    #[serde(default)]
    pub llm: LlmConfig,

    /// 语音合成服务配置
    #[serde(default)]
    pub tts: TtsConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            llm: LlmConfig::default(),
            tts: TtsConfig::default(),
            log: LogConfig::default(),
        }
    }
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,

    /// 静态文件服务配置（单页表单）
    #[serde(default)]
    pub static_files: StaticFilesConfig,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8501
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_files: StaticFilesConfig::default(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 静态文件服务配置
#[derive(Debug, Clone, Deserialize)]
pub struct StaticFilesConfig {
    /// 是否托管单页表单
    #[serde(default = "default_static_enabled")]
    pub enabled: bool,

    /// 静态文件目录
    #[serde(default = "default_static_dir")]
    pub dir: PathBuf,
}

fn default_static_enabled() -> bool {
    true
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("web")
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            enabled: default_static_enabled(),
            dir: default_static_dir(),
        }
    }
}

/// 文本生成服务配置
#[derive(Debug, Clone, Deserialize)]
pub struct LlmConfig {
    /// API 基础 URL
    #[serde(default = "default_llm_base_url")]
    pub base_url: String,

    /// 模型标识（固定单模型，不携带生成参数）
    #[serde(default = "default_llm_model")]
    pub model: String,

    /// API 密钥；为空时回退读取 GOOGLE_API_KEY 环境变量
    #[serde(default)]
    pub api_key: String,

    /// 请求超时时间（秒）
    #[serde(default = "default_llm_timeout")]
    pub timeout_secs: u64,
}

fn default_llm_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_llm_model() -> String {
    "gemini-2.5-flash-lite".to_string()
}

fn default_llm_timeout() -> u64 {
    120
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: default_llm_base_url(),
            model: default_llm_model(),
            api_key: String::new(),
            timeout_secs: default_llm_timeout(),
        }
    }
}

/// 语音合成服务配置
#[derive(Debug, Clone, Deserialize)]
pub struct TtsConfig {
    /// TTS 服务基础 URL
    #[serde(default = "default_tts_base_url")]
    pub base_url: String,

    /// 请求超时时间（秒）
    #[serde(default = "default_tts_timeout")]
    pub timeout_secs: u64,

    /// 单块最大字符数（接口输入上限）
    #[serde(default = "default_tts_max_chunk")]
    pub max_chunk_chars: usize,
}

fn default_tts_base_url() -> String {
    "https://translate.google.com".to_string()
}

fn default_tts_timeout() -> u64 {
    60
}

fn default_tts_max_chunk() -> usize {
    100
}

impl Default for TtsConfig {
    fn default() -> Self {
        Self {
            base_url: default_tts_base_url(),
            timeout_secs: default_tts_timeout(),
            max_chunk_chars: default_tts_max_chunk(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}
