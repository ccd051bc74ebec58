//! HTTP server and route table
//!
//! Three fixed routes: `/`, `/blogs`, and `/blogs/:id`. Anything else falls
//! through to axum's default 404. The detail handler translates a failed
//! lookup into a terminal 404 response carrying the not-found page.

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
use tower_http::trace::TraceLayer;

use crate::config::SiteConfig;
use crate::loader::{self, Lookup};
use crate::store::BlogStore;
use crate::templates::TemplateRenderer;
use crate::Blog;

/// Shared server state: the immutable store plus rendering collaborators
pub struct ServerState {
    pub config: SiteConfig,
    pub store: BlogStore,
    pub templates: TemplateRenderer,
}

impl ServerState {
    pub fn new(config: SiteConfig, store: BlogStore) -> Result<Self> {
        let templates = TemplateRenderer::new()?;
        Ok(Self {
            config,
            store,
            templates,
        })
    }
}

/// Build the application router
pub fn router(state: Arc<ServerState>) -> Router {
    Router::new()
        .route("/", get(home_handler))
        .route("/blogs", get(blogs_handler))
        .route("/blogs/:id", get(blog_detail_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the server
pub async fn start(blog: &Blog, ip: &str, port: u16, open: bool) -> Result<()> {
    let store = blog.load_store()?;
    let state = Arc::new(ServerState::new(blog.config.clone(), store)?);
    let app = router(state);

    // Handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    let url = format!("http://{}:{}", ip, port);
    println!("Server running at {}", url);
    println!("Press Ctrl+C to stop.");

    if open {
        if let Err(e) = open_browser(&url) {
            tracing::warn!("Failed to open browser: {}", e);
        }
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Home page: no data dependency
async fn home_handler(State(state): State<Arc<ServerState>>) -> Response {
    match state.templates.render_home(&state.config) {
        Ok(html) => Html(html).into_response(),
        Err(e) => render_error(e),
    }
}

/// Listing page: the full collection, in source order
async fn blogs_handler(State(state): State<Arc<ServerState>>) -> Response {
    let posts = loader::list_all(&state.store);
    match state.templates.render_blogs(&state.config, posts) {
        Ok(html) => Html(html).into_response(),
        Err(e) => render_error(e),
    }
}

/// Detail page: matching post, or 404 with the not-found view
async fn blog_detail_handler(
    State(state): State<Arc<ServerState>>,
    Path(raw_id): Path<String>,
) -> Response {
    match loader::get_by_id(&state.store, &raw_id) {
        Lookup::Found(post) => match state.templates.render_blog(&state.config, post) {
            Ok(html) => Html(html).into_response(),
            Err(e) => render_error(e),
        },
        Lookup::NotFound => {
            tracing::debug!("No post matching id {:?}", raw_id);
            match state.templates.render_not_found(&state.config) {
                Ok(html) => (StatusCode::NOT_FOUND, Html(html)).into_response(),
                Err(e) => render_error(e),
            }
        }
    }
}

fn render_error(e: anyhow::Error) -> Response {
    tracing::error!("Template rendering failed: {}", e);
    (StatusCode::INTERNAL_SERVER_ERROR, "Server error").into_response()
}

/// Open a URL in the default browser
fn open_browser(url: &str) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("open").arg(url).spawn()?;
    }

    #[cfg(target_os = "linux")]
    {
        std::process::Command::new("xdg-open").arg(url).spawn()?;
    }

    #[cfg(target_os = "windows")]
    {
        std::process::Command::new("cmd")
            .args(["/c", "start", url])
            .spawn()?;
    }

    Ok(())
}
