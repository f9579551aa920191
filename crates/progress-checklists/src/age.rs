//! Age-fit classification for template recommendation.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use progress_core::models::template::Template;

/// How a template's age band relates to a student's age.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AgeFit {
    /// The student's age is inside the band.
    Recommended,
    /// The student is older than the band.
    OverAge,
    /// The student has not reached the band yet.
    Upcoming,
}

/// A template as presented to staff picking a checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct TemplateRecommendation {
    pub template_id: String,
    pub label: String,
    pub min_age_months: i32,
    pub max_age_months: i32,
    pub fit: AgeFit,
}

/// Whole calendar months between `dob` and `now`.
///
/// Day-of-month is ignored on purpose: a child born on the 31st is a month
/// older on the 1st of the next month. A missing date of birth is age 0.
pub fn age_in_months(dob: Option<Date>, now: Date) -> i32 {
    let Some(dob) = dob else {
        return 0;
    };
    let years = i32::from(now.year()) - i32::from(dob.year());
    let months = i32::from(now.month()) - i32::from(dob.month());
    years * 12 + months
}

pub fn classify(template: &Template, age_months: i32) -> AgeFit {
    if template.covers_age(age_months) {
        AgeFit::Recommended
    } else if age_months > template.max_age_months {
        AgeFit::OverAge
    } else {
        AgeFit::Upcoming
    }
}

/// Classify every template against an age, sorted ascending by the start of
/// the age band. An empty catalog yields an empty list.
pub fn recommend<'a>(
    templates: impl IntoIterator<Item = &'a Template>,
    age_months: i32,
) -> Vec<TemplateRecommendation> {
    let mut recommendations: Vec<TemplateRecommendation> = templates
        .into_iter()
        .map(|t| TemplateRecommendation {
            template_id: t.id.clone(),
            label: t.label.clone(),
            min_age_months: t.min_age_months,
            max_age_months: t.max_age_months,
            fit: classify(t, age_months),
        })
        .collect();
    recommendations.sort_by(|a, b| {
        a.min_age_months
            .cmp(&b.min_age_months)
            .then_with(|| a.template_id.cmp(&b.template_id))
    });
    recommendations
}
