//! On-screen rendering of a [`ReportDocument`] as Markdown.

use serde::Serialize;
use tera::{Context, Tera};

use crate::document::{
    GROWTH_CHECKS_TITLE, LEARNING_TASKS_TITLE, LegendEntry, MAX_TRIALS_PER_ROW, NO_GROWTH_CHECKS,
    NO_LEARNING_TASKS, ReportDocument, ReportHeader,
};
use crate::error::ReportError;

const TEMPLATE_NAME: &str = "report_screen.md";

const TEMPLATE: &str = r#"# Progress Report

**{{ header.organization }}**

- Student: {{ header.studentName }}{% if header.studentClass %} ({{ header.studentClass }}){% endif %}
- Period: {{ header.periodLabel }}
- Generated: {{ generated_at }}

## {{ tasks_title }}
{% if tasks | length == 0 %}
{{ no_tasks }}
{% else %}{% for task in tasks %}
### {{ task.target_behavior }}

- Date: {{ task.date }}
- Method: {{ task.method }}
- Independence: {{ task.independence_score }}%

| Step |{% for c in trial_columns %} {{ c }} |{% endfor %} Result |
|---|{% for c in trial_columns %}---|{% endfor %}---|
{% for row in task.rows %}| {{ row.step }} |{% for cell in row.cells %} {{ cell }} |{% endfor %} {{ row.result }} |
{% endfor %}{% endfor %}
Key: {% for entry in legend %}{{ entry.symbol }} = {{ entry.description }}{% if not loop.last %}; {% endif %}{% endfor %}
{% endif %}
## {{ checks_title }}
{% if checks | length == 0 %}
{{ no_checks }}
{% else %}{% for check in checks %}
### {{ check.template_label }}: {{ check.overall_percentage }}%

- Date: {{ check.date }}
{% for section in check.sections %}
| {{ section.title }} | Achieved |
|---|---|
{% for row in section.rows %}| {{ row.skill }} | {{ row.mark }} |
{% endfor %}{% endfor %}{% if check.red_flags | length > 0 %}
> **Red flags observed**
{% for flag in check.red_flags %}> - {{ flag }}
{% endfor %}{% endif %}{% endfor %}{% endif %}"#;

#[derive(Serialize)]
struct ScreenView<'a> {
    header: &'a ReportHeader,
    generated_at: String,
    tasks_title: &'static str,
    checks_title: &'static str,
    no_tasks: &'static str,
    no_checks: &'static str,
    trial_columns: Vec<usize>,
    tasks: Vec<TaskView>,
    checks: Vec<CheckView>,
    legend: &'a [LegendEntry],
}

#[derive(Serialize)]
struct TaskView {
    date: String,
    target_behavior: String,
    method: String,
    independence_score: u8,
    rows: Vec<TrialRowView>,
}

#[derive(Serialize)]
struct TrialRowView {
    step: String,
    cells: Vec<String>,
    result: &'static str,
}

#[derive(Serialize)]
struct CheckView {
    date: String,
    template_label: String,
    overall_percentage: u8,
    sections: Vec<SectionView>,
    red_flags: Vec<String>,
}

#[derive(Serialize)]
struct SectionView {
    title: String,
    rows: Vec<SkillView>,
}

#[derive(Serialize)]
struct SkillView {
    skill: String,
    mark: &'static str,
}

/// Render a document as Markdown for the screen view.
///
/// Sections and rows come out in document order. Empty sections render an
/// explicit "no data" line.
pub fn render_screen(doc: &ReportDocument) -> Result<String, ReportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(TEMPLATE_NAME, TEMPLATE)?;

    let value = serde_json::to_value(screen_view(doc))?;
    let context = Context::from_value(value)?;

    Ok(tera.render(TEMPLATE_NAME, &context)?)
}

fn screen_view(doc: &ReportDocument) -> ScreenView<'_> {
    ScreenView {
        header: &doc.header,
        generated_at: doc.header.generated_at.strftime("%Y-%m-%d %H:%M UTC").to_string(),
        tasks_title: LEARNING_TASKS_TITLE,
        checks_title: GROWTH_CHECKS_TITLE,
        no_tasks: NO_LEARNING_TASKS,
        no_checks: NO_GROWTH_CHECKS,
        trial_columns: (1..=MAX_TRIALS_PER_ROW).collect(),
        tasks: doc
            .learning_tasks
            .iter()
            .map(|task| TaskView {
                date: task.date.to_string(),
                target_behavior: cell(&task.target_behavior),
                method: cell(&task.method),
                independence_score: task.independence_score,
                rows: task
                    .rows
                    .iter()
                    .map(|row| TrialRowView {
                        step: cell(&row.step),
                        cells: (0..MAX_TRIALS_PER_ROW)
                            .map(|i| {
                                row.trials
                                    .get(i)
                                    .map(|t| t.symbol().to_string())
                                    .unwrap_or_default()
                            })
                            .collect(),
                        result: if row.pass { "pass" } else { "fail" },
                    })
                    .collect(),
            })
            .collect(),
        checks: doc
            .growth_checks
            .iter()
            .map(|check| CheckView {
                date: check.date.to_string(),
                template_label: cell(&check.template_label),
                overall_percentage: check.overall_percentage,
                sections: check
                    .sections
                    .iter()
                    .map(|s| SectionView {
                        title: cell(&s.title),
                        rows: s
                            .rows
                            .iter()
                            .map(|r| SkillView {
                                skill: cell(&r.skill),
                                mark: if r.achieved { "yes" } else { "no" },
                            })
                            .collect(),
                    })
                    .collect(),
                red_flags: check.red_flags.iter().map(|f| cell(f)).collect(),
            })
            .collect(),
        legend: &doc.legend,
    }
}

/// Keep free text from breaking Markdown table cells.
fn cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}
