use super::service_manager::{Error, Service};
use crate::configuration::{Config, Context};
use crate::database::ProfileStore;
use crate::http::{failure, ErrorKind};
use crate::identity::IdentityProvider;
use crate::{advertiser, auth, influencer, users};
use async_trait::async_trait;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use std::any::Any;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};

/// Shared dependencies handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub database: Arc<dyn ProfileStore>,
    pub identity: Arc<dyn IdentityProvider>,
}

impl From<&Context> for AppState {
    fn from(context: &Context) -> Self {
        Self {
            database: context.database.clone(),
            identity: context.identity.clone(),
        }
    }
}

pub fn build_router(config: &Config, state: AppState) -> Router {
    let api = Router::new()
        .merge(auth::router())
        .merge(advertiser::router())
        .merge(influencer::router())
        .merge(users::router(config.features.role_endpoint));

    let prefix = config.http.api_prefix.trim_matches('/');
    let api = if prefix.is_empty() {
        api
    } else {
        Router::new().nest(&format!("/{}", prefix), api)
    };

    Router::new()
        .route("/health", get(health_check))
        .merge(api)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health_check() -> (StatusCode, &'static str) {
    (StatusCode::OK, "OK")
}

fn handle_panic(_: Box<dyn Any + Send + 'static>) -> Response {
    error!("Handler panicked");
    failure(
        ErrorKind::InternalError,
        "INTERNAL_ERROR",
        "서버 내부 오류가 발생했습니다.",
    )
    .into_response()
}

pub struct HttpService {
    context: Context,
}

#[async_trait]
impl Service for HttpService {
    type Context = Context;
    const NAME: &'static str = "http";

    async fn new(context: Context) -> Self {
        Self { context }
    }

    async fn run(self) -> Result<(), Error> {
        let config = &self.context.config;
        let app = build_router(config, AppState::from(&self.context));

        let listener = TcpListener::bind(format!("0.0.0.0:{}", config.http.port))
            .await
            .map_err(Error::from)?;
        info!("HTTP server running on port {}", config.http.port);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(Error::from)
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutting down HTTP server");
}
