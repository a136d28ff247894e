use axum::extract::DefaultBodyLimit;
use axum::routing::{get, patch, post};
use axum::Router;
use returns_gateway::analysis::condition::ConditionAnalysisService;
use returns_gateway::analysis::decision::DecisionService;
use returns_gateway::analysis::fraud::FraudAnalysisService;
use returns_gateway::config::AppConfig;
use returns_gateway::model::gemini::GeminiModel;
use returns_gateway::model::GenerativeModel;
use returns_gateway::repo::pg::PgReturnStore;
use returns_gateway::repo::ReturnStore;
use returns_gateway::service::return_service::ReturnService;
use returns_gateway::AppState;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cfg = AppConfig::from_env();

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(&cfg.database_url)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    let model: Arc<dyn GenerativeModel> = Arc::new(GeminiModel {
        base_url: cfg.gemini_base_url.clone(),
        api_key: cfg.google_api_key.clone(),
        model: cfg.model_name.clone(),
        temperature: cfg.temperature,
        top_p: cfg.top_p,
        top_k: cfg.top_k,
        max_output_tokens: cfg.max_tokens,
        client: reqwest::Client::new(),
    });

    let store: Arc<dyn ReturnStore> = Arc::new(PgReturnStore { pool: pool.clone() });

    let return_service = ReturnService {
        store: store.clone(),
        condition_service: ConditionAnalysisService { model: model.clone() },
        fraud_service: FraudAnalysisService {
            model: model.clone(),
            return_frequency_threshold: cfg.return_frequency_threshold,
        },
        decision_service: DecisionService {
            model: model.clone(),
            policy_rules: cfg.return_policy_rules.clone(),
        },
    };

    let state = AppState { return_service, store };

    let app = Router::new()
        .route("/health", get(returns_gateway::http::handlers::returns::health))
        .route(
            "/api/analyze-return",
            post(returns_gateway::http::handlers::returns::analyze_return),
        )
        .route(
            "/api/return/:return_id",
            get(returns_gateway::http::handlers::returns::get_return),
        )
        .route(
            "/api/return/:return_id/status",
            patch(returns_gateway::http::handlers::returns::update_return_status),
        )
        .route(
            "/api/users/:user_id/returns",
            get(returns_gateway::http::handlers::history::get_user_history),
        )
        .layer(DefaultBodyLimit::max(25 * 1024 * 1024))
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&cfg.bind_addr).await?;
    tracing::info!("listening on {}", cfg.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
