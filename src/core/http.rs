//! HTTP endpoint server using Axum

use axum::{
    extract::{Path, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{Json, Response},
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{error, info, warn, Level};

use crate::bot::{BotDispatcher, BotMessage, TelegramClient, Update};
use crate::metrics::Metrics;
use crate::models::SymbolReport;
use crate::signals::SignalError;

#[derive(Clone)]
pub struct AppState {
    pub health: Arc<RwLock<HealthStatus>>,
    pub metrics: Arc<Metrics>,
    pub start_time: Arc<Instant>,
    pub dispatcher: Arc<BotDispatcher>,
    /// Replies are only returned in the webhook response when this is `None`.
    pub telegram: Option<Arc<TelegramClient>>,
}

impl AppState {
    pub fn new(
        metrics: Arc<Metrics>,
        dispatcher: Arc<BotDispatcher>,
        telegram: Option<Arc<TelegramClient>>,
    ) -> Self {
        Self {
            health: Arc::new(RwLock::new(HealthStatus::default())),
            metrics,
            start_time: Arc::new(Instant::now()),
            dispatcher,
            telegram,
        }
    }
}

#[derive(Clone, Debug)]
pub struct HealthStatus {
    pub status: String,
}

impl Default for HealthStatus {
    fn default() -> Self {
        Self {
            status: "healthy".to_string(),
        }
    }
}

pub async fn health_check(State(state): State<AppState>) -> Result<Json<Value>, StatusCode> {
    let health = state.health.read().await;
    let uptime_seconds = state.start_time.elapsed().as_secs();
    Ok(Json(json!({
        "status": health.status,
        "uptime_seconds": uptime_seconds,
        "service": "stonks-bot"
    })))
}

pub async fn hello() -> &'static str {
    info!("Hello");
    "Hello"
}

pub async fn metrics_handler(State(state): State<AppState>) -> Result<String, StatusCode> {
    state
        .metrics
        .export()
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

/// Middleware to track HTTP request metrics
async fn metrics_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    state.metrics.http_requests_in_flight.inc();

    let response = next.run(request).await;
    let status = response.status();
    let duration = start.elapsed();

    state.metrics.http_requests_in_flight.dec();

    state.metrics.http_requests_total.inc();
    state
        .metrics
        .http_request_duration_seconds
        .observe(duration.as_secs_f64());

    if status.is_server_error() {
        error!(
            method = %method,
            path = %path,
            status = %status,
            duration_ms = duration.as_millis() as u64,
            "HTTP request error"
        );
    }

    response
}

fn signal_error_status(e: &SignalError) -> StatusCode {
    match e {
        SignalError::SymbolNotFound(_) => StatusCode::NOT_FOUND,
        SignalError::InsufficientData { .. } | SignalError::UndefinedIndicator { .. } => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        SignalError::Provider(_) => StatusCode::BAD_GATEWAY,
    }
}

/// Report for a single symbol as JSON
async fn get_signal(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
) -> Result<Json<SymbolReport>, (StatusCode, Json<Value>)> {
    let engine = state.dispatcher.engine();
    match engine.get_report(&symbol).await {
        Ok(report) => {
            state.metrics.record_report(report.overall.as_str());
            Ok(Json(report))
        }
        Err(e) => {
            state.metrics.record_report("failed");
            let status = signal_error_status(&e);
            warn!(symbol = %symbol, kind = e.kind(), error = %e, "Report request failed");
            Err((
                status,
                Json(json!({
                    "symbol": symbol.to_uppercase(),
                    "error": e.kind(),
                    "message": e.to_string(),
                })),
            ))
        }
    }
}

/// Telegram webhook: answer the message and forward the reply through `sendMessage`.
async fn telegram_webhook(State(state): State<AppState>, Json(update): Json<Update>) -> Json<Value> {
    info!(update_id = ?update.update_id, "Received update");

    let Some((chat_id, text)) = update.text_message() else {
        return Json(json!({}));
    };

    let reply = state
        .dispatcher
        .handle_text(&chat_id.to_string(), text)
        .await;
    let bot_message = BotMessage {
        chat_id,
        text: reply,
    };
    info!(chat_id = chat_id, "Replying with bot message");

    if let Some(ref telegram) = state.telegram {
        if let Err(e) = telegram.send_message(&bot_message).await {
            error!(chat_id = chat_id, error = %e, "Failed to deliver Telegram message");
        }
    }

    Json(json!(bot_message))
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", post(telegram_webhook))
        .route("/health", get(health_check))
        .route("/hello", get(hello))
        .route("/metrics", get(metrics_handler))
        .route("/api/signals/{symbol}", get(get_signal))
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
                        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                        .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
                )
                .layer(axum::middleware::from_fn_with_state(
                    state.clone(),
                    metrics_middleware,
                ))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

pub async fn start_server(port: u16, state: AppState) -> Result<(), Box<dyn std::error::Error>> {
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    info!(port = port, "HTTP server listening on port {}", port);
    info!(
        "Metrics endpoint available at http://0.0.0.0:{}/metrics",
        port
    );
    axum::serve(listener, app).await?;

    Ok(())
}
