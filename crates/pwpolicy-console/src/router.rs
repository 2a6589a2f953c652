//! Axum router wiring.

use axum::{
    routing::{get, post},
    Router,
};

use crate::{api::handlers, app_state::AppState, ops};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(ops::healthz))
        .route("/metrics", get(ops::metrics))
        .route("/v1/server-info/password-policies", get(handlers::list_policy_types))
        .route("/v1/realms", get(handlers::list_realms))
        .route(
            "/v1/realms/:realm/password-policy",
            get(handlers::get_password_policy).put(handlers::put_password_policy),
        )
        .route("/v1/password-policy/parse", post(handlers::parse_policy))
        .route("/v1/password-policy/serialize", post(handlers::serialize_policy))
        .with_state(state)
}
