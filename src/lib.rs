pub mod config;
pub mod domain;
pub mod error;
pub mod global;
pub mod logging;
pub mod response;
pub mod shutdown;

use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use domain::ai::{handler as ai_handler, TaskKind};
use domain::health::{health_check, render_metrics};

pub use domain::ai::{CompletionClient, CompletionClientTrait, CompletionRequest, PromptRouter};

/// 테스트 라우터에서 사용하는 모델 이름
pub const TEST_MODEL: &str = "test-model";

#[derive(OpenApi)]
#[openapi(
    paths(
        ai_handler::chat,
        ai_handler::categorize,
        ai_handler::extract_medical,
        ai_handler::mortgage_response,
        ai_handler::analyze_newsletter,
        ai_handler::list_tasks,
        domain::health::handler::health_check,
    ),
    components(
        schemas(
            domain::ai::dto::ChatRequest,
            domain::ai::dto::CategorizeRequest,
            domain::ai::dto::ExtractMedicalRequest,
            domain::ai::dto::MortgageResponseRequest,
            domain::ai::dto::AnalyzeNewsletterRequest,
            domain::ai::dto::TaskCatalog,
            domain::ai::dto::TaskSummary,
            domain::health::dto::HealthStatus,
            response::TaskResponse,
            response::ResponseStatus,
        )
    ),
    tags(
        (name = "Tasks", description = "프롬프트 템플릿 기반 AI 태스크 API"),
        (name = "Health", description = "헬스체크 API")
    )
)]
pub struct ApiDoc;

/// 공유 애플리케이션 상태
#[derive(Clone)]
pub struct AppState {
    pub prompt_router: PromptRouter,
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    pub fn new(client: CompletionClient, model: impl Into<String>) -> Self {
        Self {
            prompt_router: PromptRouter::new(client, model),
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }
}

/// 전체 라우터 생성
pub fn create_router(state: AppState) -> Router {
    let mut router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/health", get(health_check))
        .route("/tasks", get(ai_handler::list_tasks))
        .route(TaskKind::Chat.path(), post(ai_handler::chat))
        .route(TaskKind::Categorize.path(), post(ai_handler::categorize))
        .route(TaskKind::ExtractMedical.path(), post(ai_handler::extract_medical))
        .route(TaskKind::MortgageResponse.path(), post(ai_handler::mortgage_response))
        .route(TaskKind::AnalyzeNewsletter.path(), post(ai_handler::analyze_newsletter));

    if state.metrics.is_some() {
        router = router.route("/metrics", get(render_metrics));
    }

    router
        .layer(middleware::from_fn(global::middleware::request_tracing))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Mock 클라이언트로 테스트용 라우터 생성
pub fn create_test_router_with_mock<C>(client: C) -> Router
where
    C: CompletionClientTrait + 'static,
{
    create_router(AppState::new(Arc::new(client), TEST_MODEL))
}
