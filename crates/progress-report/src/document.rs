//! The structured report for one reporting window.
//!
//! A [`ReportDocument`] is the single source for both the screen view and
//! the exported file: section order, block order and row order are fixed
//! here and never re-sorted downstream.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use progress_core::models::milestone::MilestoneRecord;
use progress_core::models::session::{PromptLevel, SessionLog, TaskStep};

use crate::window::{ReportingBucket, ReportingCalendar};

/// Trial columns shown per step row.
pub const MAX_TRIALS_PER_ROW: usize = 10;

pub const LEARNING_TASKS_TITLE: &str = "Learning Tasks";
pub const GROWTH_CHECKS_TITLE: &str = "Growth Checks";
pub const NO_LEARNING_TASKS: &str = "No learning tasks were recorded for this period.";
pub const NO_GROWTH_CHECKS: &str = "No growth checks were recorded for this period.";

/// Fixed identification block printed at the top of every report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ReportHeader {
    pub organization: String,
    pub student_name: String,
    pub student_class: Option<String>,
    pub period_label: String,
    pub generated_at: jiff::Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ReportDocument {
    pub header: ReportHeader,
    pub learning_tasks: Vec<LearningTaskBlock>,
    pub growth_checks: Vec<GrowthCheckBlock>,
    /// Prompt-level key, present only when there are learning tasks.
    pub legend: Vec<LegendEntry>,
}

/// One session log rendered as a trial grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LearningTaskBlock {
    pub log_id: Uuid,
    #[ts(type = "string")]
    pub date: Date,
    pub target_behavior: String,
    pub method: String,
    pub independence_score: u8,
    pub rows: Vec<TrialRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TrialRow {
    pub step: String,
    /// At most [`MAX_TRIALS_PER_ROW`] trials, in recorded order.
    pub trials: Vec<PromptLevel>,
    pub pass: bool,
}

/// One milestone record rendered as per-section skill tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct GrowthCheckBlock {
    pub record_id: Uuid,
    #[ts(type = "string")]
    pub date: Date,
    pub template_label: String,
    pub overall_percentage: u8,
    pub sections: Vec<SkillTable>,
    /// Only the red flags that were observed.
    pub red_flags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SkillTable {
    pub title: String,
    pub rows: Vec<SkillRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SkillRow {
    pub skill: String,
    pub achieved: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LegendEntry {
    pub symbol: String,
    pub description: String,
}

impl TrialRow {
    pub fn from_step(step: &TaskStep) -> Self {
        let trials: Vec<PromptLevel> = step
            .trials
            .iter()
            .copied()
            .take(MAX_TRIALS_PER_ROW)
            .collect();
        let pass = trials.iter().any(|t| t.is_independent());
        Self {
            step: step.description.clone(),
            trials,
            pass,
        }
    }
}

impl LearningTaskBlock {
    pub fn from_log(log: &SessionLog, calendar: &ReportingCalendar) -> Self {
        Self {
            log_id: log.id,
            date: calendar.day_of(log.date),
            target_behavior: log.target_behavior.clone(),
            method: log.method.clone(),
            independence_score: log.independence_score,
            rows: log.steps.iter().map(TrialRow::from_step).collect(),
        }
    }
}

impl GrowthCheckBlock {
    pub fn from_record(record: &MilestoneRecord, calendar: &ReportingCalendar) -> Self {
        Self {
            record_id: record.id,
            date: calendar.day_of(record.timestamp),
            template_label: record.template_label.clone(),
            overall_percentage: record.overall_percentage,
            sections: record
                .sections
                .iter()
                .map(|s| SkillTable {
                    title: s.title.clone(),
                    rows: s
                        .items
                        .iter()
                        .map(|i| SkillRow {
                            skill: i.text.clone(),
                            achieved: i.checked,
                        })
                        .collect(),
                })
                .collect(),
            red_flags: record.checked_red_flags().map(|f| f.text.clone()).collect(),
        }
    }

    pub fn has_red_flags(&self) -> bool {
        !self.red_flags.is_empty()
    }
}

impl ReportDocument {
    /// Assemble a document from a window's logs and milestones, keeping the
    /// order they were supplied in.
    pub fn build(
        header: ReportHeader,
        logs: &[SessionLog],
        milestones: &[MilestoneRecord],
        calendar: &ReportingCalendar,
    ) -> Self {
        let learning_tasks: Vec<LearningTaskBlock> = logs
            .iter()
            .map(|l| LearningTaskBlock::from_log(l, calendar))
            .collect();
        let legend = if learning_tasks.is_empty() {
            Vec::new()
        } else {
            prompt_legend()
        };

        Self {
            header,
            learning_tasks,
            growth_checks: milestones
                .iter()
                .map(|m| GrowthCheckBlock::from_record(m, calendar))
                .collect(),
            legend,
        }
    }

    /// Assemble a document for a bucket. The bucket label becomes the period.
    pub fn from_bucket(
        mut header: ReportHeader,
        bucket: &ReportingBucket,
        calendar: &ReportingCalendar,
    ) -> Self {
        header.period_label = bucket.label.clone();
        Self::build(header, &bucket.logs, &bucket.milestones, calendar)
    }

    pub fn is_empty(&self) -> bool {
        self.learning_tasks.is_empty() && self.growth_checks.is_empty()
    }

    /// Row counts per block, in document order. Two renders of the same
    /// data have the same shape.
    pub fn shape(&self) -> Vec<usize> {
        self.learning_tasks
            .iter()
            .map(|t| t.rows.len())
            .chain(self.growth_checks.iter().flat_map(|g| {
                g.sections
                    .iter()
                    .map(|s| s.rows.len())
                    .chain(std::iter::once(g.red_flags.len()))
            }))
            .collect()
    }
}

pub fn prompt_legend() -> Vec<LegendEntry> {
    PromptLevel::ALL
        .iter()
        .map(|level| LegendEntry {
            symbol: level.symbol().to_string(),
            description: level.description().to_string(),
        })
        .collect()
}
