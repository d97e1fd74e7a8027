//! FinTrack Web Server
//!
//! Axum-based REST API over the ledger service:
//! - `GET  /api/data` - full ledger snapshot
//! - `POST /api/transactions` - record a transaction (applies the
//!   auto-save policy, returns the contribution and new pocket balance)
//! - `POST /api/goals` - create a savings goal
//! - `GET  /api/advisor/insights` - health score and advisory insights
//!
//! No authentication: this serves a single local user. Validation
//! failures come back as 400 with a sanitized `{ "error": ... }` body;
//! everything else internal stays in the logs.

use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{error, info};

use fintrack_core::{LedgerService, LedgerStore};

mod handlers;


/// Server configuration
#[derive(Clone, Default)]
pub struct ServerConfig {
    /// Allowed CORS origins (empty = allow any origin; the server binds
    /// to localhost by default)
    pub allowed_origins: Vec<String>,
}

/// Shared application state
pub struct AppState {
    pub service: LedgerService,
}

/// Create the application router
pub fn create_router(store: Box<dyn LedgerStore>, config: ServerConfig) -> Router {
    let state = Arc::new(AppState {
        service: LedgerService::new(store),
    });

    let api_routes = Router::new()
        .route("/data", get(handlers::get_data))
        .route("/transactions", post(handlers::create_transaction))
        .route("/goals", post(handlers::create_goal))
        .route("/advisor/insights", get(handlers::get_insights));

    let cors = if config.allowed_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE])
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE])
    };

    Router::new()
        .nest("/api", api_routes)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Start the server
pub async fn serve(
    store: Box<dyn LedgerStore>,
    host: &str,
    port: u16,
    config: ServerConfig,
) -> anyhow::Result<()> {
    let app = create_router(store, config);

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server running on http://{}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}

// ============================================================================
// Error Handling
// ============================================================================

/// Application error type with proper HTTP status codes
pub struct AppError {
    status: StatusCode,
    message: String,
    internal: Option<anyhow::Error>,
}

impl AppError {
    pub fn bad_request(msg: &str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: msg.to_string(),
            internal: None,
        }
    }

    /// Map a core error: validation failures are the caller's fault,
    /// everything else is internal.
    pub fn from_core(err: fintrack_core::Error) -> Self {
        use fintrack_core::Error as CoreError;
        match &err {
            CoreError::InvalidAmount(_) | CoreError::InvalidTransactionType(_) => {
                Self::bad_request(&err.to_string())
            }
            _ => err.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the full internal error if present
        if let Some(err) = &self.internal {
            error!(error = %err, "Internal error");
        }

        let body = Json(serde_json::json!({
            "error": self.message
        }));

        (self.status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        let err = err.into();
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            // Return generic message to client
            message: "An internal error occurred".to_string(),
            // Keep full error for logging
            internal: Some(err),
        }
    }
}
