pub mod auth;
pub mod badge;
pub mod error;
pub mod handlers;
pub mod models;
pub mod openapi;
pub mod registry;
pub mod session;
pub mod settings;
pub mod stats;
pub mod validation;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use handlers::{
    get_badge, get_profile, get_schedule, get_stats, healthz_live, healthz_ready, login, logout,
    root, toggle_registration,
};
use http::Method;
use tower_http::LatencyUnit;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::badge::BadgeRenderer;
use crate::openapi::ApiDoc;
use crate::registry::ClassRegistry;
use crate::session::SessionGate;
use crate::settings::Settings;

#[derive(Clone)]
pub struct AppState {
    pub settings: Settings,
    pub gate: Arc<SessionGate>,
    pub registry: Arc<ClassRegistry>,
    pub badges: Arc<BadgeRenderer>,
}

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::from_env()?;

    let env_filter = if settings.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .without_time()
        .init();

    let state = AppState {
        settings: settings.clone(),
        gate: Arc::new(SessionGate::new()),
        registry: Arc::new(ClassRegistry::with_sample_classes()),
        badges: Arc::new(BadgeRenderer::new()),
    };

    let app = build_router(state.clone());

    let addr = SocketAddr::from(([0, 0, 0, 0], state.settings.port));
    info!("Starting {} Membership API on {addr}", settings.club_name);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

pub fn build_router(state: AppState) -> Router {
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        );

    // The web front-end is served from a different origin.
    let cors_layer = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    let mut router = Router::new()
        .route("/", get(root))
        .route("/healthz/live", get(healthz_live))
        .route("/healthz/ready", get(healthz_ready))
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/schedule", get(get_schedule))
        .route("/classes/{id}/registration", post(toggle_registration))
        .route("/stats", get(get_stats))
        .route("/profile", get(get_profile))
        .route("/profile/badge.png", get(get_badge))
        .with_state(state.clone());

    if state.settings.enable_swagger {
        let openapi = ApiDoc::openapi();
        let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi);
        router = router.merge(swagger);
    }

    router.layer(trace_layer).layer(cors_layer)
}
