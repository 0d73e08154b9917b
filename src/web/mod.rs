//! Web layer module
//!
//! HTTP interface for the portfolio API. Handlers are thin and delegate to
//! the service objects held in [`AppState`].
//!
//! - **Handlers**: request handlers organized by domain
//! - **Responses**: response bodies and the error-to-status mapping
//! - **Extractors**: JSON/query extraction with consistent rejections, client identity
//! - **Middleware**: request logging and the submission rate limit

use anyhow::Result;
use axum::{
    http::{HeaderValue, Method},
    middleware::{from_fn, from_fn_with_state},
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};

use crate::{
    catalog::StaticDataStore,
    config::Config,
    repositories::QuestionRepository,
    services::{ProfileService, ProjectsService, RateLimiter, SkillsService, TalksService},
};

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod responses;

pub use extractors::{ApiJson, ApiQuery, ClientKey};
pub use responses::{ErrorResponse, HealthResponse};

/// Web server configuration and setup
pub struct WebServer {
    app: Router,
    addr: SocketAddr,
}

impl WebServer {
    pub fn new(state: AppState) -> Result<Self> {
        let addr: SocketAddr =
            format!("{}:{}", state.config.web.host, state.config.web.port).parse()?;
        let app = create_router(state);

        Ok(Self { app, addr })
    }

    /// Start the web server
    pub async fn serve(self) -> Result<()> {
        let listener = tokio::net::TcpListener::bind(&self.addr).await?;
        axum::serve(
            listener,
            self.app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await?;
        Ok(())
    }

    /// Get the host address
    pub fn host(&self) -> String {
        self.addr.ip().to_string()
    }

    /// Get the port number
    pub fn port(&self) -> u16 {
        self.addr.port()
    }
}

/// Build the router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    let submit = post(handlers::talks::submit_question).route_layer(from_fn_with_state(
        state.clone(),
        middleware::rate_limit_middleware,
    ));

    let mut router = Router::new()
        .route("/", get(handlers::docs::index))
        .route("/docs", get(handlers::docs::docs_page))
        .route("/openapi.json", get(handlers::docs::openapi_document))
        .route("/health", get(handlers::health::health_check))
        .route("/profile", get(handlers::profile::get_profile))
        .route("/profile/quotes", get(handlers::profile::get_quote))
        .route("/skills", get(handlers::skills::list_skills))
        .route("/talks", get(handlers::talks::list_talks))
        .route("/talks/:talk_id/questions", submit)
        .route("/projects", get(handlers::projects::list_projects));

    if state.config.debug.enabled {
        info!("Debug routes enabled");
        router = router
            .route("/debug/questions", get(handlers::debug::list_questions))
            .route("/debug/storage", get(handlers::debug::storage_status))
            .route("/debug/rate-limit", get(handlers::debug::rate_limit_status));
    }

    // Middleware (applied in reverse order)
    router
        .layer(cors_layer(&state.config))
        .layer(from_fn(middleware::request_logging_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// CORS for the configured origins; a `*` entry allows any origin
pub fn cors_layer(config: &Config) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    if config.allows_any_origin() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = config
        .web
        .cors_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    layer.allow_origin(origins)
}

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub profile_service: ProfileService,
    pub skills_service: SkillsService,
    pub talks_service: TalksService,
    pub projects_service: ProjectsService,
    pub rate_limiter: RateLimiter,
}

impl AppState {
    pub fn new(
        config: Config,
        store: Arc<StaticDataStore>,
        questions: Arc<dyn QuestionRepository>,
    ) -> Self {
        Self {
            rate_limiter: RateLimiter::from_config(&config.rate_limit),
            profile_service: ProfileService::new(store.clone()),
            skills_service: SkillsService::new(store.clone()),
            projects_service: ProjectsService::new(store.clone()),
            talks_service: TalksService::new(store, questions),
            config: Arc::new(config),
        }
    }
}
