use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// One completed, scored checklist for a student.
///
/// Records are append-only. A correction is a new record, never an edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct MilestoneRecord {
    pub id: Uuid,
    pub student_id: Uuid,
    pub template_id: String,
    pub template_label: String,
    pub sections: Vec<ScoredSection>,
    pub red_flags: Vec<ChecklistItem>,
    /// Mastery percentage over section items, 0–100.
    pub overall_percentage: u8,
    pub timestamp: jiff::Timestamp,
    pub staff_id: Uuid,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoredSection {
    pub title: String,
    pub items: Vec<ChecklistItem>,
}

/// A single checklist line with its stable identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChecklistItem {
    pub id: String,
    pub text: String,
    pub checked: bool,
}

impl MilestoneRecord {
    /// Red flags that were observed. Unchecked flags carry no information.
    pub fn checked_red_flags(&self) -> impl Iterator<Item = &ChecklistItem> {
        self.red_flags.iter().filter(|f| f.checked)
    }

    pub fn section_items(&self) -> impl Iterator<Item = &ChecklistItem> {
        self.sections.iter().flat_map(|s| &s.items)
    }
}

/// Sort records for a history view: newest first, ties broken by id so the
/// order is stable across calls.
pub fn sort_history(records: &mut [MilestoneRecord]) {
    records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp).then_with(|| a.id.cmp(&b.id)));
}
