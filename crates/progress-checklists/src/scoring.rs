use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use progress_core::models::milestone::{ChecklistItem, MilestoneRecord, ScoredSection};
use progress_core::models::template::Template;

use crate::error::ChecklistError;

/// Stable identifier of a section item: `"{section}-{item}"`, zero-based.
pub fn section_item_id(section: usize, item: usize) -> String {
    format!("{section}-{item}")
}

/// Stable identifier of a red flag: `"flag-{index}"`, zero-based.
pub fn red_flag_id(index: usize) -> String {
    format!("flag-{index}")
}

/// The set of item identifiers a staff member ticked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CheckedItems(BTreeSet<String>);

impl CheckedItems {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>) -> bool {
        self.0.insert(id.into())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.contains(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Every item of `template` checked, red flags excluded.
    pub fn all_items(template: &Template) -> Self {
        template
            .sections
            .iter()
            .enumerate()
            .flat_map(|(s, section)| (0..section.items.len()).map(move |i| section_item_id(s, i)))
            .collect()
    }
}

impl<S: Into<String>> FromIterator<S> for CheckedItems {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Who scored the checklist, for which student, and when.
#[derive(Debug, Clone, Copy)]
pub struct ScoringContext {
    pub record_id: Uuid,
    pub student_id: Uuid,
    pub staff_id: Uuid,
    pub timestamp: jiff::Timestamp,
}

impl ScoringContext {
    /// A context with a freshly generated record id.
    pub fn new(student_id: Uuid, staff_id: Uuid, timestamp: jiff::Timestamp) -> Self {
        Self {
            record_id: Uuid::new_v4(),
            student_id,
            staff_id,
            timestamp,
        }
    }
}

/// `round(100 * checked / total)`, with halves rounded up. An empty
/// checklist scores 0.
pub fn mastery_percentage(checked: usize, total: usize) -> u8 {
    let total = total.max(1);
    let checked = checked.min(total);
    ((200 * checked + total) / (2 * total)) as u8
}

/// Score a filled checklist into a milestone record ready for persistence.
///
/// Only section items count toward the percentage; red flags are
/// observations, not mastery. Ids in `checked` that address nothing in the
/// template are ignored here; see [`unknown_item_ids`].
pub fn score(template: &Template, checked: &CheckedItems, ctx: ScoringContext) -> MilestoneRecord {
    let sections: Vec<ScoredSection> = template
        .sections
        .iter()
        .enumerate()
        .map(|(s, section)| ScoredSection {
            title: section.title.clone(),
            items: section
                .items
                .iter()
                .enumerate()
                .map(|(i, text)| {
                    let id = section_item_id(s, i);
                    ChecklistItem {
                        checked: checked.contains(&id),
                        id,
                        text: text.clone(),
                    }
                })
                .collect(),
        })
        .collect();

    let red_flags: Vec<ChecklistItem> = template
        .red_flags
        .iter()
        .enumerate()
        .map(|(i, text)| {
            let id = red_flag_id(i);
            ChecklistItem {
                checked: checked.contains(&id),
                id,
                text: text.clone(),
            }
        })
        .collect();

    let total = template.item_count();
    let achieved = sections
        .iter()
        .flat_map(|s| &s.items)
        .filter(|i| i.checked)
        .count();

    MilestoneRecord {
        id: ctx.record_id,
        student_id: ctx.student_id,
        template_id: template.id.clone(),
        template_label: template.label.clone(),
        sections,
        red_flags,
        overall_percentage: mastery_percentage(achieved, total),
        timestamp: ctx.timestamp,
        staff_id: ctx.staff_id,
    }
}

/// Ids in `checked` that do not address any item or red flag of `template`.
pub fn unknown_item_ids(template: &Template, checked: &CheckedItems) -> Vec<String> {
    checked
        .iter()
        .filter(|id| !addresses_item(template, id))
        .map(str::to_string)
        .collect()
}

/// Reject a submission that ticks ids the template does not have.
pub fn validate_checked(template: &Template, checked: &CheckedItems) -> Result<(), ChecklistError> {
    let ids = unknown_item_ids(template, checked);
    if ids.is_empty() {
        Ok(())
    } else {
        Err(ChecklistError::UnknownItems {
            template_id: template.id.clone(),
            ids,
        })
    }
}

fn addresses_item(template: &Template, id: &str) -> bool {
    if let Some(index) = id.strip_prefix("flag-") {
        return index
            .parse::<usize>()
            .is_ok_and(|i| i < template.red_flags.len() && red_flag_id(i) == id);
    }
    let Some((section, item)) = id.split_once('-') else {
        return false;
    };
    match (section.parse::<usize>(), item.parse::<usize>()) {
        (Ok(s), Ok(i)) => {
            section_item_id(s, i) == id
                && template.sections.get(s).is_some_and(|sec| i < sec.items.len())
        }
        _ => false,
    }
}
