//! HTTP server: article pages plus image and robots.txt passthrough

use anyhow::Result;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use thiserror::Error;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::content::{self, ArticleRepository, ContentError};
use crate::templates::{SiteData, TemplateRenderer};
use crate::Site;

/// Server state, shared read-only between requests
struct AppState {
    site: SiteData,
    repo: ArticleRepository,
    renderer: TemplateRenderer,
}

/// Errors a request handler can end with
#[derive(Error, Debug)]
enum AppError {
    #[error(transparent)]
    Content(#[from] ContentError),

    #[error("render failed: {0}")]
    Render(#[from] anyhow::Error),

    #[error("handler task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Content(e) if e.is_not_found() => {
                tracing::debug!("{}", e);
                StatusCode::NOT_FOUND.into_response()
            }
            e => {
                tracing::error!("Request failed: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
        }
    }
}

/// Build the application router for a site
pub fn router(site: &Site) -> Result<Router> {
    let state = Arc::new(AppState {
        site: SiteData::from(&site.config),
        repo: site.repository(),
        renderer: TemplateRenderer::new()?,
    });

    let app = Router::new()
        .route("/", get(home_handler))
        .route("/tag/:tag_slug", get(tag_handler))
        .route("/article/:name", get(article_handler))
        .nest_service("/articles/images", ServeDir::new(&site.images_dir))
        .route_service("/robots.txt", ServeFile::new(site.static_dir.join("robots.txt")))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(app)
}

/// Start the server and run until Ctrl+C
pub async fn start(site: &Site, ip: &str, port: u16) -> Result<()> {
    let app = router(site)?;

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    tracing::info!("Serving articles from {:?}", site.articles_dir);
    println!("Server running at http://{}:{}", ip, port);
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
}

/// Run filesystem and rendering work off the async workers
async fn run_blocking<F>(state: Arc<AppState>, f: F) -> Result<Html<String>, AppError>
where
    F: FnOnce(&AppState) -> Result<String, AppError> + Send + 'static,
{
    let html = tokio::task::spawn_blocking(move || f(&state)).await??;
    Ok(Html(html))
}

async fn home_handler(State(state): State<Arc<AppState>>) -> Result<Html<String>, AppError> {
    run_blocking(state, |state| {
        let articles = content::home_listing(&state.repo)?;
        Ok(state.renderer.render_listing(&state.site, &articles, None)?)
    })
    .await
}

async fn tag_handler(
    State(state): State<Arc<AppState>>,
    Path(tag_slug): Path<String>,
) -> Result<Html<String>, AppError> {
    run_blocking(state, move |state| {
        let articles = content::tag_listing(&state.repo, &tag_slug)?;
        Ok(state
            .renderer
            .render_listing(&state.site, &articles, Some(tag_slug.as_str()))?)
    })
    .await
}

async fn article_handler(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Html<String>, AppError> {
    run_blocking(state, move |state| {
        let article = content::render_article(&state.repo, &name)?;
        Ok(state.renderer.render_article(&state.site, &article)?)
    })
    .await
}
