//! Serve command implementation.

use crate::ServeArgs;
use anyhow::{Context, Result};
use askama::Template;
use axum::{
    extract::{Path as AxumPath, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use chrono::{DateTime, Local};
use mdpages_core::{convert_dir, list_pages, Config};
use mdpages_render::{IndexTemplate, PageEntry, PageTemplate, DATE_FORMAT};
use std::path::PathBuf;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
struct AppState {
    pages_dir: PathBuf,
}

/// Start the page server, optionally converting markdown sources first.
pub async fn serve_pages(config: &Config, args: ServeArgs) -> Result<()> {
    let port = args.port.unwrap_or(config.server.port);
    let pages_dir = args.dir.clone().unwrap_or_else(|| config.pages_dir());

    // An empty --md value means the same as leaving it out.
    let md_dir = args.md.as_ref().filter(|p| !p.as_os_str().is_empty());
    if let Some(md_dir) = md_dir {
        let report = convert_dir(md_dir, &pages_dir)
            .with_context(|| format!("Failed to convert {:?}", md_dir))?;
        tracing::info!(
            "Converted {} markdown files to {}",
            report.converted,
            pages_dir.display()
        );
    }

    let shown = std::fs::canonicalize(&pages_dir).unwrap_or_else(|_| pages_dir.clone());
    tracing::info!("Serving pages from {:?}", shown);

    let app = router(AppState { pages_dir });

    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;

    tracing::info!("Server started at http://localhost:{}", port);
    println!("Serving at http://localhost:{port}");
    println!("Press Ctrl+C to stop");

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/page", get(page_root_redirect))
        .route("/page/", get(page_root_redirect))
        .route("/page/{name}", get(page_handler))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Render the index: every page in the store, newest first.
async fn index_handler(State(state): State<AppState>) -> Response {
    let pages_dir = state.pages_dir.clone();
    let listing = tokio::task::spawn_blocking(move || list_pages(&pages_dir)).await;

    let pages = match listing {
        Ok(Ok(pages)) => pages,
        Ok(Err(err)) => {
            tracing::error!("Failed to list pages: {}", err);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to read pages directory",
            )
                .into_response();
        }
        Err(err) => {
            tracing::error!("Listing task failed: {}", err);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to read pages directory",
            )
                .into_response();
        }
    };

    let entries: Vec<PageEntry> = pages
        .iter()
        .map(|page| PageEntry {
            name: page.name.clone(),
            href: format!("/page/{}", page.name),
            modified: page.modified.format(DATE_FORMAT).to_string(),
        })
        .collect();

    match (IndexTemplate { pages: entries }).render() {
        Ok(html) => Html(html).into_response(),
        Err(err) => {
            tracing::error!("Failed to render index template: {}", err);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to render index").into_response()
        }
    }
}

/// Serve a single page, wrapping its stored HTML in the page template.
async fn page_handler(State(state): State<AppState>, AxumPath(name): AxumPath<String>) -> Response {
    // Flat namespace: reject rather than sanitize. The router only hands us
    // a single segment, but percent-encoding can smuggle a separator in.
    if name.contains("..") || name.contains('/') {
        return not_found().await.into_response();
    }

    let mut file = name;
    if !file.ends_with(".html") {
        file.push_str(".html");
    }

    let path = state.pages_dir.join(&file);
    let metadata = match tokio::fs::metadata(&path).await {
        Ok(metadata) => metadata,
        Err(_) => return not_found().await.into_response(),
    };

    let content = match tokio::fs::read_to_string(&path).await {
        Ok(content) => content,
        Err(err) => {
            tracing::error!("Failed to read page {:?}: {}", path, err);
            return (StatusCode::INTERNAL_SERVER_ERROR, "Failed to read page").into_response();
        }
    };

    let modified = metadata
        .modified()
        .map(|time| DateTime::<Local>::from(time).format(DATE_FORMAT).to_string())
        .unwrap_or_default();

    // `content` is the converter's output: trusted HTML, injected verbatim.
    let template = PageTemplate {
        name: file.strip_suffix(".html").unwrap_or(&file).to_string(),
        modified,
        content,
    };

    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(err) => {
            tracing::error!("Failed to render page template: {}", err);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to render page").into_response()
        }
    }
}

async fn page_root_redirect() -> impl IntoResponse {
    (StatusCode::FOUND, [(header::LOCATION, "/")])
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "404 page not found")
}
