use anyhow::{Context, Result};
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use minijinja::path_loader;
use minijinja_autoreload::AutoReloader;
use serde::{Deserialize, Serialize};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::{error, info};

use crate::chat::Assistant;
use crate::messages::Turn;

pub const PAGE_TITLE: &str = "MEU Logistics Assistant";
pub const PAGE_DESCRIPTION: &str =
    "Ask questions about Marine Expeditionary Unit logistics data.";
pub const EXAMPLE_QUESTIONS: [&str; 4] = [
    "What units make up the MEU?",
    "What's the daily fuel consumption during offensive operations?",
    "Compare Guam and Darwin port capacities",
    "What aircraft does the ACE have?",
];

// Shared application state
#[derive(Clone)]
pub struct AppState {
    templates: Arc<AutoReloader>,
    assistant: Arc<Assistant>,
}

impl AppState {
    pub fn new(assistant: Arc<Assistant>) -> Result<Self> {
        let templates =
            create_minijinja_env().context("Failed to initialize template engine")?;
        Ok(Self {
            templates: Arc::new(templates),
            assistant,
        })
    }
}

// Minijinja Environment setup
fn create_minijinja_env() -> Result<AutoReloader> {
    // Use AutoReloader for development convenience
    let reloader = AutoReloader::new(|notifier| {
        let loader = path_loader("templates");
        let mut env = minijinja::Environment::new();
        env.set_loader(loader);
        // Watch the templates directory for changes
        notifier.watch_path("templates", true);
        Ok(env)
    });
    Ok(reloader)
}

async fn index_handler(State(state): State<AppState>) -> Result<Html<String>, Html<String>> {
    state
        .templates
        .acquire_env()
        .and_then(|env| {
            env.get_template("index.html").and_then(|tmpl| {
                let context = minijinja::context! {
                    title => PAGE_TITLE,
                    description => PAGE_DESCRIPTION,
                    examples => EXAMPLE_QUESTIONS,
                };
                tmpl.render(context)
            })
        })
        .map(Html)
        .map_err(|e| {
            error!("Failed to get or render template: {}", e);
            Html(format!("Internal Server Error: {}", e))
        })
}

/// One chat turn from the browser. The page owns the conversation history and
/// re-sends it with every message; the server keeps no per-session state.
#[derive(Debug, Deserialize)]
pub struct ChatTurnRequest {
    pub message: String,
    #[serde(default)]
    pub history: Vec<Turn>,
}

#[derive(Debug, Serialize)]
struct ChatTurnReply {
    reply: String,
}

#[derive(Debug, Serialize)]
struct ChatTurnError {
    error: String,
    kind: &'static str,
}

async fn chat_handler(
    State(state): State<AppState>,
    Json(body): Json<ChatTurnRequest>,
) -> Response {
    match state.assistant.respond(&body.message, &body.history).await {
        Ok(reply) => (StatusCode::OK, Json(ChatTurnReply { reply })).into_response(),
        Err(e) => {
            error!(kind = e.kind(), "Chat turn failed: {}", e);
            (
                StatusCode::BAD_GATEWAY,
                Json(ChatTurnError {
                    error: e.to_string(),
                    kind: e.kind(),
                }),
            )
                .into_response()
        }
    }
}

// Build our application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/api/chat", post(chat_handler))
        .nest_service("/static", ServeDir::new("static"))
        .with_state(state)
        .layer(TraceLayer::new_for_http()) // Add request logging
}

pub async fn start_web_server(port: u16, assistant: Arc<Assistant>) -> Result<()> {
    let state = AppState::new(assistant)?;
    let app = build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("Web server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context(format!("Failed to bind to address {}", addr))?;

    axum::serve(listener, app.into_make_service())
        .await
        .context("Web server failed")?;

    Ok(())
}
