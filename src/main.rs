//! Katha - 多语言 AI 故事讲述服务
//!
//! 架构:
//! - Domain: story/ (提示词构建), text_chunker
//! - Application: ports, commands
//! - Infrastructure: http, adapters

use std::sync::Arc;

use katha::config::{load_config, print_config};
use katha::infrastructure::adapters::{
    GeminiClient, GeminiClientConfig, TranslateTtsClient, TranslateTtsClientConfig,
};
// use katha::infrastructure::adapters::{FakeSpeechSynthesizer, FakeStoryGenerator};
use katha::infrastructure::http::{AppState, HttpServer, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    // API 密钥缺失属于致命错误，进程在监听端口前退出
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},katha={},tower_http=debug",
        config.log.level, config.log.level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    tracing::info!("Katha - 多语言 AI 故事讲述服务");
    print_config(&config);

    // 创建 Gemini 文本生成客户端
    let llm_config = GeminiClientConfig {
        base_url: config.llm.base_url.clone(),
        model: config.llm.model.clone(),
        api_key: config.llm.api_key.clone(),
        timeout_secs: config.llm.timeout_secs,
    };
    let story_generator = Arc::new(GeminiClient::new(llm_config)?);

    // // Fake 文本生成客户端（联调用，始终返回固定故事）
    // let story_generator = Arc::new(FakeStoryGenerator::with_defaults());

    // 创建 Translate TTS 语音合成客户端
    let tts_config = TranslateTtsClientConfig {
        base_url: config.tts.base_url.clone(),
        timeout_secs: config.tts.timeout_secs,
        max_chunk_chars: config.tts.max_chunk_chars,
    };
    let speech_synthesizer = Arc::new(TranslateTtsClient::new(tts_config)?);

    // // Fake 语音合成客户端（联调用，返回占位字节）
    // let speech_synthesizer = Arc::new(FakeSpeechSynthesizer::with_defaults());

    // 创建 HTTP 服务器
    let static_dir = config
        .server
        .static_files
        .enabled
        .then(|| config.server.static_files.dir.clone());
    let server_config = ServerConfig::new(&config.server.host, config.server.port, static_dir);
    let state = AppState::new(story_generator, speech_synthesizer);

    let server = HttpServer::new(server_config, state);

    tracing::info!("Starting HTTP server...");

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to listen for ctrl-c");
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
