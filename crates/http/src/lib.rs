//! HTTP API server for perfcons.
//!
//! Routes, access flags and the shared state handed to every handler.

#![allow(clippy::exhaustive_structs, reason = "HTTP types are stable")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]

pub mod api_error;
mod api_types;
pub mod auth;
mod handlers;

use axum::{
    Json, Router,
    extract::State,
    handler::Handler as _,
    http::StatusCode,
    middleware::from_fn_with_state,
    routing::get,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use perfcons_core::ResourceKind;
use perfcons_service::RecordService;
use perfcons_storage::StorageBackend;

pub use api_types::{HealthResponse, ReadinessResponse, VersionResponse};
pub use auth::{AuthConfig, RouteAccess};

use api_error::ApiError;
use handlers::{budgets, facts};

/// Shared application state for all HTTP handlers.
pub struct AppState {
    /// Service for the `facts` table
    pub facts: Arc<RecordService>,
    /// Service for the `budgets` table
    pub budgets: Arc<RecordService>,
}

impl AppState {
    /// Both services over one shared connection pool.
    #[must_use]
    pub fn new(storage: Arc<StorageBackend>) -> Self {
        Self {
            facts: Arc::new(RecordService::new(Arc::clone(&storage), ResourceKind::Fact)),
            budgets: Arc::new(RecordService::new(storage, ResourceKind::Budget)),
        }
    }
}

/// Build the full router.
///
/// | group | routes | access |
/// |---|---|---|
/// | health | `/health`, `/api/readiness`, `/api/version` | public |
/// | list | `GET /facts/all`, `GET /budgets/all` | `auth.list_access` |
/// | records | `/facts/{id}`, `/budgets/{id}` | protected |
///
/// `/facts/all` is a static route and wins over `/facts/{conversation_id}`.
/// Anything else (including an empty id such as `/facts/`) falls through to a
/// protected JSON 404.
pub fn create_router(state: Arc<AppState>, auth: AuthConfig) -> Router {
    let gate = from_fn_with_state(auth.clone(), auth::require_bearer);

    let records = Router::new()
        .route(
            "/facts/{conversation_id}",
            get(facts::get_fact)
                .post(facts::create_fact)
                .put(facts::update_fact)
                .delete(facts::delete_fact),
        )
        .route(
            "/budgets/{conversation_id}",
            get(budgets::get_budget)
                .post(budgets::create_budget)
                .put(budgets::update_budget)
                .delete(budgets::delete_budget),
        )
        .route_layer(gate.clone());

    let unmatched = route_not_found.layer(gate.clone());

    let listing = Router::new()
        .route("/facts/all", get(facts::list_facts))
        .route("/budgets/all", get(budgets::list_budgets));
    let listing = match auth.list_access {
        RouteAccess::Protected => listing.route_layer(gate),
        RouteAccess::Public => listing,
    };

    let public = Router::new()
        .route("/health", get(health))
        .route("/api/readiness", get(readiness))
        .route("/api/version", get(version));

    Router::new()
        .merge(public)
        .merge(listing)
        .merge(records)
        .fallback(unmatched)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn route_not_found() -> ApiError {
    ApiError::NotFound("route not found".to_owned())
}

/// Liveness only; never touches storage.
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy" })
}

async fn readiness(State(state): State<Arc<AppState>>) -> (StatusCode, Json<ReadinessResponse>) {
    match state.facts.ping().await {
        Ok(()) => (StatusCode::OK, Json(ReadinessResponse { status: "ready", message: None })),
        Err(e) => {
            tracing::warn!(error = %e, "readiness check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ReadinessResponse {
                    status: "unavailable",
                    message: Some("storage backend unreachable".to_owned()),
                }),
            )
        },
    }
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse { version: env!("CARGO_PKG_VERSION") })
}
