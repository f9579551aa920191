use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// An age-banded developmental checklist.
///
/// Templates are seeded reference data: they are built once and never
/// mutated by staff. Scoring a template produces a
/// [`MilestoneRecord`](super::milestone::MilestoneRecord).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Template {
    pub id: String,
    pub label: String,
    pub min_age_months: i32,
    pub max_age_months: i32,
    pub sections: Vec<TemplateSection>,
    pub red_flags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TemplateSection {
    pub title: String,
    pub items: Vec<String>,
}

impl Template {
    /// Number of skill items across all sections. Red flags are not counted.
    pub fn item_count(&self) -> usize {
        self.sections.iter().map(|s| s.items.len()).sum()
    }

    /// Whether an age in months falls inside this template's band (inclusive).
    pub fn covers_age(&self, age_months: i32) -> bool {
        self.min_age_months <= age_months && age_months <= self.max_age_months
    }
}
