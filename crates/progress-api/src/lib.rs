//! progress-api
//!
//! HTTP service over the progress engine: checklist recommendation and
//! scoring, milestone history, windowed reports and report export.

pub mod config;
pub mod error;
pub mod middleware;
pub mod notify;
pub mod routes;
pub mod state;
pub mod workflow;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health_check))
        // Checklist catalog
        .route("/templates", get(routes::templates::list_templates))
        .route("/templates/{id}", get(routes::templates::get_template))
        // Per-student
        .route(
            "/students/{id}/recommendations",
            get(routes::students::get_recommendations),
        )
        .route(
            "/students/{id}/checklists",
            post(routes::students::submit_checklist),
        )
        .route(
            "/students/{id}/milestones",
            get(routes::students::list_milestones),
        )
        .route("/students/{id}/buckets", get(routes::reports::list_buckets))
        .route("/students/{id}/report", get(routes::reports::get_report))
        .route(
            "/students/{id}/report/export",
            post(routes::reports::export_report),
        )
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state)
}
