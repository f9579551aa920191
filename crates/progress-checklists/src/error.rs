use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChecklistError {
    #[error("unknown template: {0}")]
    UnknownTemplate(String),

    #[error("unknown item ids for template '{template_id}': {}", ids.join(", "))]
    UnknownItems {
        template_id: String,
        ids: Vec<String>,
    },
}
