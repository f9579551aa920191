use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use progress_checklists::age::TemplateRecommendation;
use progress_core::models::milestone::MilestoneRecord;

use crate::error::ApiError;
use crate::state::AppState;
use crate::workflow::{self, ChecklistSubmission};

pub async fn get_recommendations(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<TemplateRecommendation>>, ApiError> {
    let calendar = state.calendar();
    let recommendations = workflow::recommendations(state.store.as_ref(), id, &calendar).await?;
    Ok(Json(recommendations))
}

pub async fn submit_checklist(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(submission): Json<ChecklistSubmission>,
) -> Result<Json<MilestoneRecord>, ApiError> {
    let record = workflow::submit_checklist(
        state.store.as_ref(),
        state.notifier.as_ref(),
        id,
        submission,
        jiff::Timestamp::now(),
    )
    .await?;
    Ok(Json(record))
}

pub async fn list_milestones(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<MilestoneRecord>>, ApiError> {
    Ok(Json(
        workflow::milestone_history(state.store.as_ref(), id).await?,
    ))
}
