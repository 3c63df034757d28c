//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),

    /// API 密钥缺失属于致命配置错误，进程应在监听端口前退出
    #[error("GOOGLE_API_KEY not found! Set it in the environment or in config.toml (llm.api_key)")]
    MissingCredential,
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 裸环境变量形式的 API 密钥（部署方习惯用法）
const API_KEY_ENV: &str = "GOOGLE_API_KEY";

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `KATHA_`，层级分隔符 `__`）
/// 2. 配置文件（config.toml 或 config.local.toml）
/// 3. 默认值
///
/// # 环境变量示例
/// - `KATHA_SERVER__HOST=127.0.0.1`
/// - `KATHA_SERVER__PORT=8080`
/// - `KATHA_LLM__MODEL=gemini-2.0-flash`
/// - `KATHA_TTS__BASE_URL=http://tts-proxy:9000`
///
/// API 密钥额外支持裸环境变量 `GOOGLE_API_KEY`（在 `KATHA_LLM__API_KEY`
/// 与配置文件均未提供时生效）
///
/// # 返回
/// - `Ok(AppConfig)` - 成功加载的配置
/// - `Err(ConfigError)` - 加载失败（含密钥缺失）
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 首先设置默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8501)?
        .set_default("server.static_files.enabled", true)?
        .set_default("server.static_files.dir", "web")?
        .set_default(
            "llm.base_url",
            "https://generativelanguage.googleapis.com/v1beta",
        )?
        .set_default("llm.model", "gemini-2.5-flash-lite")?
        .set_default("llm.api_key", "")?
        .set_default("llm.timeout_secs", 120)?
        .set_default("tts.base_url", "https://translate.google.com")?
        .set_default("tts.timeout_secs", 60)?
        .set_default("tts.max_chunk_chars", 100)?
        .set_default("log.level", "info")?;

    // 2. 添加配置文件（如果存在）
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        // 搜索默认配置文件
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 添加环境变量（最高优先级）
    // 前缀: KATHA_
    // 层级分隔符: __ (双下划线)
    // 例如: KATHA_LLM__MODEL=gemini-2.0-flash
    builder = builder.add_source(
        Environment::with_prefix("KATHA")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    // 4. 构建配置
    let config = builder.build()?;

    // 5. 反序列化为 AppConfig
    let mut app_config: AppConfig = config
        .try_deserialize()
        .map_err(|e| ConfigError::ParseError(format!("Failed to deserialize config: {}", e)))?;

    // 6. API 密钥回退：裸 GOOGLE_API_KEY 环境变量
    if app_config.llm.api_key.is_empty() {
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            app_config.llm.api_key = key;
        }
    }

    // 7. 验证配置
    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    // 验证端口范围
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    // 验证生成服务配置
    if config.llm.base_url.is_empty() {
        return Err(ConfigError::ValidationError(
            "LLM base URL cannot be empty".to_string(),
        ));
    }
    if config.llm.model.is_empty() {
        return Err(ConfigError::ValidationError(
            "LLM model cannot be empty".to_string(),
        ));
    }

    // 验证 TTS URL
    if config.tts.base_url.is_empty() {
        return Err(ConfigError::ValidationError(
            "TTS base URL cannot be empty".to_string(),
        ));
    }
    if config.tts.max_chunk_chars == 0 {
        return Err(ConfigError::ValidationError(
            "TTS max chunk chars cannot be 0".to_string(),
        ));
    }

    // API 密钥缺失：致命错误
    if config.llm.api_key.is_empty() {
        return Err(ConfigError::MissingCredential);
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
///
/// 密钥只打印存在性，不打印内容
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}:{}", config.server.host, config.server.port);
    tracing::info!(
        "Static Files: {} ({:?})",
        config.server.static_files.enabled,
        config.server.static_files.dir
    );
    tracing::info!("LLM Base URL: {}", config.llm.base_url);
    tracing::info!("LLM Model: {}", config.llm.model);
    tracing::info!("LLM API Key: {}", if config.llm.api_key.is_empty() { "missing" } else { "set" });
    tracing::info!("LLM Timeout: {}s", config.llm.timeout_secs);
    tracing::info!("TTS Base URL: {}", config.tts.base_url);
    tracing::info!("TTS Timeout: {}s", config.tts.timeout_secs);
    tracing::info!("TTS Max Chunk Chars: {}", config.tts.max_chunk_chars);
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_key() -> AppConfig {
        let mut config = AppConfig::default();
        config.llm.api_key = "test-key".to_string();
        config
    }

    #[test]
    fn test_validation_passes_for_valid_config() {
        assert!(validate_config(&config_with_key()).is_ok());
    }

    #[test]
    fn test_validation_error_for_missing_api_key() {
        let config = AppConfig::default();
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::MissingCredential)
        ));
    }

    #[test]
    fn test_validation_error_for_zero_port() {
        let mut config = config_with_key();
        config.server.port = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_empty_model() {
        let mut config = config_with_key();
        config.llm.model = String::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_empty_tts_url() {
        let mut config = config_with_key();
        config.tts.base_url = String::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_zero_chunk_chars() {
        let mut config = config_with_key();
        config.tts.max_chunk_chars = 0;
        assert!(validate_config(&config).is_err());
    }
}
