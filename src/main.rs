//! Lotevoz - 文本块批量语音合成与导出服务

use std::sync::Arc;

use lotevoz::config::{load_config, print_config};
use lotevoz::domain::voice::VoiceId;
use lotevoz::infrastructure::adapters::{
    FfmpegTranscoder, FfmpegTranscoderConfig, FileStaging, HttpTtsClient, HttpTtsClientConfig,
    ZipBundler,
};
use lotevoz::infrastructure::http::{AppState, HttpServer, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},lotevoz={},tower_http=debug",
        config.log.level, config.log.level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    tracing::info!("Lotevoz - 文本块批量语音合成与导出服务");
    print_config(&config);

    // 确保暂存根目录存在
    tokio::fs::create_dir_all(&config.staging.root).await?;

    // 创建 HTTP TTS 客户端
    let tts_config = HttpTtsClientConfig {
        base_url: config.tts.url.clone(),
        timeout_secs: config.tts.timeout_secs,
        max_retries: config.tts.max_retries,
    };
    let synthesizer = Arc::new(HttpTtsClient::new(tts_config)?);

    // 创建 ffmpeg 转码器
    let transcoder = Arc::new(FfmpegTranscoder::new(FfmpegTranscoderConfig {
        ffmpeg_path: config.transcoder.ffmpeg_path.clone(),
    }));

    // 创建会话作用域的文件暂存
    let staging = Arc::new(FileStaging::new(config.staging.root.clone()));

    // 创建 ZIP 写出器
    let archive_writer = Arc::new(ZipBundler::new());

    // 语音目录来自配置
    let voice_catalog = config
        .tts
        .voices
        .iter()
        .map(VoiceId::new)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| anyhow::anyhow!("Invalid voice catalog entry: {}", e))?;

    // 创建 HTTP 服务器
    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let state = AppState::new(
        synthesizer,
        transcoder,
        staging,
        archive_writer,
        voice_catalog,
    );

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
