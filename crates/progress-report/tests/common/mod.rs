#![allow(dead_code)]

use uuid::Uuid;

use progress_core::models::milestone::{ChecklistItem, MilestoneRecord, ScoredSection};
use progress_core::models::session::{PromptLevel, SessionLog, TaskStep};

pub fn ts(s: &str) -> jiff::Timestamp {
    s.parse().expect("valid RFC 3339 timestamp")
}

pub fn log_at(when: &str, steps: Vec<TaskStep>) -> SessionLog {
    SessionLog {
        id: Uuid::new_v4(),
        student_id: Uuid::nil(),
        staff_id: Uuid::nil(),
        date: ts(when),
        target_behavior: "Requests a preferred item".to_string(),
        method: "Discrete trial".to_string(),
        steps,
        independence_score: 60,
    }
}

pub fn step(description: &str, trials: &[PromptLevel]) -> TaskStep {
    TaskStep {
        id: Uuid::new_v4().to_string(),
        description: description.to_string(),
        trials: trials.to_vec(),
    }
}

pub fn item(id: &str, text: &str, checked: bool) -> ChecklistItem {
    ChecklistItem {
        id: id.to_string(),
        text: text.to_string(),
        checked,
    }
}

pub fn milestone_at(when: &str) -> MilestoneRecord {
    MilestoneRecord {
        id: Uuid::new_v4(),
        student_id: Uuid::nil(),
        template_id: "months_4_6".to_string(),
        template_label: "4–6 Months".to_string(),
        sections: vec![ScoredSection {
            title: "Social / Emotional".to_string(),
            items: vec![
                item("0-0", "Knows familiar people", true),
                item("0-1", "Laughs", false),
            ],
        }],
        red_flags: vec![],
        overall_percentage: 50,
        timestamp: ts(when),
        staff_id: Uuid::nil(),
    }
}
