#![allow(dead_code)]

use progress_core::models::session::PromptLevel;
use progress_report::document::{
    GrowthCheckBlock, LearningTaskBlock, ReportDocument, ReportHeader, SkillRow, SkillTable,
    TrialRow, prompt_legend,
};
use uuid::Uuid;

pub fn header() -> ReportHeader {
    ReportHeader {
        organization: "Little Oaks Learning Centre".to_string(),
        student_name: "Ada Lovelace".to_string(),
        student_class: Some("Room 3".to_string()),
        period_label: "October".to_string(),
        generated_at: "2026-10-16T14:30:00Z".parse().unwrap(),
    }
}

pub fn task(rows: usize) -> LearningTaskBlock {
    LearningTaskBlock {
        log_id: Uuid::new_v4(),
        date: "2026-10-14".parse().unwrap(),
        target_behavior: "Washing hands".to_string(),
        method: "Forward chaining".to_string(),
        independence_score: 40,
        rows: (0..rows)
            .map(|i| TrialRow {
                step: format!("Step {}", i + 1),
                trials: vec![PromptLevel::FullPhysical, PromptLevel::Independent],
                pass: true,
            })
            .collect(),
    }
}

pub fn check(items: usize, red_flags: &[&str]) -> GrowthCheckBlock {
    GrowthCheckBlock {
        record_id: Uuid::new_v4(),
        date: "2026-10-15".parse().unwrap(),
        template_label: "4–6 Months".to_string(),
        overall_percentage: 50,
        sections: vec![SkillTable {
            title: "Social/Emotional".to_string(),
            rows: (0..items)
                .map(|i| SkillRow {
                    skill: format!("Skill {i}"),
                    achieved: i % 2 == 0,
                })
                .collect(),
        }],
        red_flags: red_flags.iter().map(|f| f.to_string()).collect(),
    }
}

pub fn document(tasks: Vec<LearningTaskBlock>, checks: Vec<GrowthCheckBlock>) -> ReportDocument {
    let legend = if tasks.is_empty() {
        Vec::new()
    } else {
        prompt_legend()
    };
    ReportDocument {
        header: header(),
        learning_tasks: tasks,
        growth_checks: checks,
        legend,
    }
}
