//! Seeded checklist templates, one module per developmental stage.

mod infant;
mod preschool;
mod toddler;

use std::sync::LazyLock;

use progress_core::models::template::{Template, TemplateSection};

pub const SOCIAL: &str = "Social / Emotional";
pub const LANGUAGE: &str = "Language / Communication";
pub const COGNITIVE: &str = "Cognitive (Learning, Thinking, Problem-Solving)";
pub const MOVEMENT: &str = "Movement / Physical Development";

/// The full catalog in declaration order. Use [`crate::all_templates`] for
/// the presentation order.
pub static TEMPLATES: LazyLock<Vec<Template>> = LazyLock::new(|| {
    vec![
        infant::months_0_3(),
        infant::months_4_6(),
        infant::months_7_9(),
        infant::months_10_12(),
        toddler::months_13_18(),
        toddler::months_19_24(),
        preschool::years_2_3(),
        preschool::years_3_4(),
        preschool::years_4_5(),
    ]
});

fn template(
    id: &str,
    label: &str,
    (min_age_months, max_age_months): (i32, i32),
    sections: &[(&str, &[&str])],
    red_flags: &[&str],
) -> Template {
    Template {
        id: id.to_string(),
        label: label.to_string(),
        min_age_months,
        max_age_months,
        sections: sections
            .iter()
            .map(|(title, items)| TemplateSection {
                title: title.to_string(),
                items: items.iter().map(|i| i.to_string()).collect(),
            })
            .collect(),
        red_flags: red_flags.iter().map(|f| f.to_string()).collect(),
    }
}
