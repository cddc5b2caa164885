//! HTTP front end: the index page and the transform API.

pub mod handlers;
pub mod page;
pub mod params;

use crate::application::engine::TransformEngine;
use crate::config::AppConfig;
use crate::error::Result;
use poem::listener::TcpListener;
use poem::middleware::Tracing;
use poem::{Endpoint, EndpointExt, Route, Server, get, post};
use std::sync::Arc;
use tracing::info;

/// State shared by every handler. Read-only after startup.
#[derive(Debug, Clone)]
pub struct AppState {
    pub engine: TransformEngine,
}

impl AppState {
    pub fn new(engine: TransformEngine) -> Self {
        Self { engine }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(TransformEngine::new(config.reference_shape.clone()))
    }
}

/// Builds the route table with `state` attached.
pub fn app(state: AppState) -> impl Endpoint {
    Route::new()
        .at("/", get(handlers::index))
        .at("/api/transform", post(handlers::transform_shape))
        .data(Arc::new(state))
        .with(Tracing)
}

/// Runs the server until the process is stopped.
pub async fn serve(config: &AppConfig) -> Result<()> {
    let app = app(AppState::from_config(config));
    info!(bind = %config.bind, "serving on http://{}", config.bind);
    Server::new(TcpListener::bind(config.bind)).run(app).await?;
    Ok(())
}
