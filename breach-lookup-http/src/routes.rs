use std::sync::Arc;

use axum::Router;
use axum::extract::{Form, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, post};
use breach_lookup::BreachCheckService;
use serde::{Deserialize, Serialize};

/// Tenant used when a request does not name one.
pub const DEFAULT_TENANT: &str = "default";

/// Shared application state for the handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<BreachCheckService>,
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/status", get(status))
        .route("/check", post(check))
        .with_state(state)
}

#[derive(Debug, Deserialize)]
struct StatusParams {
    tenant_domain: Option<String>,
}

#[derive(Debug, Serialize)]
struct StatusResponse {
    enabled: bool,
}

#[derive(Debug, Deserialize)]
struct CheckForm {
    #[serde(default)]
    password: String,
    tenant_domain: Option<String>,
}

/// `GET /status` — advisory enablement probe. Always answers 200; a config
/// hiccup reads as disabled rather than failing the caller.
async fn status(
    State(state): State<AppState>,
    Query(params): Query<StatusParams>,
) -> Json<StatusResponse> {
    let tenant = tenant_or_default(params.tenant_domain.as_deref());
    let enabled = state.service.is_enabled(tenant).await;
    Json(StatusResponse { enabled })
}

/// `POST /check` — password breach check. Lookup failures map to 500, never
/// to a zero count.
async fn check(State(state): State<AppState>, Form(form): Form<CheckForm>) -> Response {
    if form.password.trim().is_empty() {
        return StatusCode::BAD_REQUEST.into_response();
    }

    let tenant = tenant_or_default(form.tenant_domain.as_deref());
    match state.service.check_password(&form.password, tenant).await {
        Ok(result) => Json(result).into_response(),
        Err(err) => {
            tracing::error!(tenant, error = %err, "breach check failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

fn tenant_or_default(requested: Option<&str>) -> &str {
    match requested {
        Some(tenant) if !tenant.trim().is_empty() => tenant.trim(),
        _ => DEFAULT_TENANT,
    }
}
