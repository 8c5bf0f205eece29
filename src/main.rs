use std::sync::Arc;

use assist_server::{
    config::AppConfig, create_router, domain::ai::OpenAiCompatClient, logging, shutdown, AppState,
};
use metrics_exporter_prometheus::PrometheusBuilder;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. 환경변수 로드
    dotenvy::dotenv().ok();

    // 2. 로깅 초기화
    logging::init_logging();

    // 3. 설정 로드 (API 키가 없으면 시작 실패)
    let config = AppConfig::from_env().map_err(|e| {
        tracing::error!(error = %e, "Invalid configuration");
        e
    })?;

    // 4. Completion 클라이언트 및 상태 구성
    let client = OpenAiCompatClient::new(
        &config.api_key,
        &config.api_base,
        config.completion_timeout,
    );
    let mut state = AppState::new(Arc::new(client), config.chat_model.clone());

    match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => state = state.with_metrics(handle),
        Err(e) => tracing::warn!(error = %e, "Metrics recorder not installed"),
    }

    let app = create_router(state);

    // 5. 서버 실행
    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(
        address = %addr,
        model = %config.chat_model,
        api_base = %config.api_base,
        "Server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown::shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}
