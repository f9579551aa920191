//! progress-checklists
//!
//! Developmental checklist templates. Pure data and pure functions, no I/O.
//! Defines the seeded age-banded templates, the age-fit classification used
//! to recommend them, and the scoring that turns a filled checklist into a
//! milestone record.

pub mod age;
pub mod catalog;
pub mod error;
pub mod scoring;

use progress_core::models::template::Template;

use error::ChecklistError;

/// Return every seeded template, ordered by the age band it starts at.
pub fn all_templates() -> Vec<&'static Template> {
    let mut templates: Vec<&'static Template> = catalog::TEMPLATES.iter().collect();
    templates.sort_by(|a, b| {
        a.min_age_months
            .cmp(&b.min_age_months)
            .then_with(|| a.id.cmp(&b.id))
    });
    templates
}

/// Look up a template by ID.
pub fn get_template(id: &str) -> Option<&'static Template> {
    catalog::TEMPLATES.iter().find(|t| t.id == id)
}

/// Look up a template by ID, failing with [`ChecklistError::UnknownTemplate`].
pub fn require_template(id: &str) -> Result<&'static Template, ChecklistError> {
    get_template(id).ok_or_else(|| ChecklistError::UnknownTemplate(id.to_string()))
}
