use axum::Json;
use axum::extract::Path;

use progress_core::models::template::Template;

use crate::error::ApiError;
use crate::workflow::{self, TemplateSummary};

pub async fn list_templates() -> Json<Vec<TemplateSummary>> {
    Json(workflow::template_summaries())
}

pub async fn get_template(Path(id): Path<String>) -> Result<Json<Template>, ApiError> {
    Ok(Json(workflow::template(&id)?))
}
