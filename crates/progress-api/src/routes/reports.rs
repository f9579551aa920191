use axum::Json;
use axum::extract::{Path, Query, State};
use serde::Deserialize;
use uuid::Uuid;

use progress_export::assets::FileAssets;
use progress_export::export::ExportOutcome;
use progress_export::sink::DirectorySink;
use progress_report::window::{BucketSummary, WindowMode};

use crate::error::ApiError;
use crate::state::AppState;
use crate::workflow::{self, ExportRequest, ExportTarget, ReportView};

#[derive(Deserialize)]
pub struct BucketQuery {
    pub mode: Option<String>,
}

#[derive(Deserialize)]
pub struct ReportQuery {
    pub mode: Option<String>,
    pub bucket: String,
}

fn parse_mode(mode: Option<&str>) -> Result<WindowMode, ApiError> {
    Ok(mode.unwrap_or("weekly").parse::<WindowMode>()?)
}

pub async fn list_buckets(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<BucketQuery>,
) -> Result<Json<Vec<BucketSummary>>, ApiError> {
    let mode = parse_mode(query.mode.as_deref())?;
    let calendar = state.calendar();
    Ok(Json(
        workflow::bucket_summaries(state.store.as_ref(), id, mode, &calendar).await?,
    ))
}

pub async fn get_report(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<ReportQuery>,
) -> Result<Json<ReportView>, ApiError> {
    let mode = parse_mode(query.mode.as_deref())?;
    let ctx = state.report_context();
    Ok(Json(
        workflow::report_view(state.store.as_ref(), id, mode, &query.bucket, &ctx).await?,
    ))
}

/// Export a bucket's report to PDF or DOCX in the export directory.
pub async fn export_report(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<ExportRequest>,
) -> Result<Json<ExportOutcome>, ApiError> {
    let ctx = state.report_context();
    let assets = FileAssets::new(state.config.logo_path.clone());
    let sink = DirectorySink::new(state.config.export_dir.clone());

    let outcome = workflow::export_bucket(
        state.store.as_ref(),
        state.notifier.as_ref(),
        id,
        &req,
        &ctx,
        ExportTarget {
            styles: &state.config.styles,
            assets: &assets,
            sink: &sink,
        },
    )
    .await?;
    Ok(Json(outcome))
}
