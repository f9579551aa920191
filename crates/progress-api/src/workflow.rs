//! The service's operations, written against the storage and export
//! collaborator traits so they run the same over the JSON store in
//! production and the in-memory store in tests.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use progress_checklists::age::{TemplateRecommendation, age_in_months, recommend};
use progress_checklists::scoring::{CheckedItems, ScoringContext, score, validate_checked};
use progress_checklists::{all_templates, require_template};
use progress_core::models::milestone::{MilestoneRecord, sort_history};
use progress_core::models::student::Student;
use progress_core::models::template::Template;
use progress_export::assets::AssetSource;
use progress_export::export::{ExportFormat, ExportOutcome, export_filename, export_report};
use progress_export::sink::ExportSink;
use progress_export::styles::DocumentStyles;
use progress_report::document::{ReportDocument, ReportHeader};
use progress_report::screen::render_screen;
use progress_report::window::{BucketSummary, ReportingBucket, ReportingCalendar, WindowMode};
use progress_storage::{RecordStore, StaffDirectory, StudentDirectory};

use crate::error::ApiError;
use crate::notify::{Notice, Notifier};

/// Catalog entry without its items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateSummary {
    pub id: String,
    pub label: String,
    pub min_age_months: i32,
    pub max_age_months: i32,
    pub item_count: usize,
    pub red_flag_count: usize,
}

impl From<&Template> for TemplateSummary {
    fn from(t: &Template) -> Self {
        Self {
            id: t.id.clone(),
            label: t.label.clone(),
            min_age_months: t.min_age_months,
            max_age_months: t.max_age_months,
            item_count: t.item_count(),
            red_flag_count: t.red_flags.len(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistSubmission {
    pub template_id: String,
    pub staff_id: Uuid,
    #[serde(default)]
    pub checked_ids: CheckedItems,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExportRequest {
    pub mode: WindowMode,
    pub bucket: String,
    pub format: ExportFormat,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportView {
    pub document: ReportDocument,
    pub screen: String,
}

/// Who the report is for and when it is generated.
#[derive(Debug, Clone)]
pub struct ReportContext {
    pub organization: String,
    pub calendar: ReportingCalendar,
    pub generated_at: Timestamp,
}

/// Where an export goes and how it looks.
pub struct ExportTarget<'a, A, K> {
    pub styles: &'a DocumentStyles,
    pub assets: &'a A,
    pub sink: &'a K,
}

pub fn template_summaries() -> Vec<TemplateSummary> {
    all_templates().into_iter().map(TemplateSummary::from).collect()
}

pub fn template(id: &str) -> Result<Template, ApiError> {
    Ok(require_template(id)?.clone())
}

pub async fn load_student<S>(store: &S, id: Uuid) -> Result<Student, ApiError>
where
    S: StudentDirectory + Sync,
{
    store
        .student(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("student not found: {id}")))
}

/// Every template classified against the student's age today.
pub async fn recommendations<S>(
    store: &S,
    student_id: Uuid,
    calendar: &ReportingCalendar,
) -> Result<Vec<TemplateRecommendation>, ApiError>
where
    S: StudentDirectory + Sync,
{
    let student = load_student(store, student_id).await?;
    let age = age_in_months(student.date_of_birth, calendar.today());
    Ok(recommend(all_templates(), age))
}

/// Score a filled checklist and append it to the student's history.
///
/// The notifier hears about the outcome of the save either way.
pub async fn submit_checklist<S, N>(
    store: &S,
    notifier: &N,
    student_id: Uuid,
    submission: ChecklistSubmission,
    now: Timestamp,
) -> Result<MilestoneRecord, ApiError>
where
    S: StudentDirectory + StaffDirectory + RecordStore + Sync,
    N: Notifier + ?Sized,
{
    let student = load_student(store, student_id).await?;
    let template = require_template(&submission.template_id)
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;
    validate_checked(template, &submission.checked_ids)?;
    let staff = store
        .staff_member(submission.staff_id)
        .await?
        .ok_or_else(|| {
            ApiError::BadRequest(format!("unknown staff member: {}", submission.staff_id))
        })?;

    let record = score(
        template,
        &submission.checked_ids,
        ScoringContext::new(student.id, staff.id, now),
    );

    match store.append_milestone(&record).await {
        Ok(()) => {
            info!(
                student_id = %student.id,
                record_id = %record.id,
                template_id = %template.id,
                percentage = record.overall_percentage,
                "checklist scored"
            );
            notifier.notify(Notice::Saved(format!(
                "{} saved for {} ({}%)",
                template.label, student.name, record.overall_percentage
            )));
            Ok(record)
        }
        Err(e) => {
            warn!(student_id = %student.id, error = %e, "failed to save checklist");
            notifier.notify(Notice::Failed(format!(
                "{} could not be saved for {}",
                template.label, student.name
            )));
            Err(e.into())
        }
    }
}

/// A student's milestone records, newest first.
pub async fn milestone_history<S>(store: &S, student_id: Uuid) -> Result<Vec<MilestoneRecord>, ApiError>
where
    S: StudentDirectory + RecordStore + Sync,
{
    load_student(store, student_id).await?;
    let mut records = store.milestones(student_id).await?;
    sort_history(&mut records);
    Ok(records)
}

pub async fn bucket_summaries<S>(
    store: &S,
    student_id: Uuid,
    mode: WindowMode,
    calendar: &ReportingCalendar,
) -> Result<Vec<BucketSummary>, ApiError>
where
    S: StudentDirectory + RecordStore + Sync,
{
    load_student(store, student_id).await?;
    let logs = store.session_logs(student_id).await?;
    let milestones = store.milestones(student_id).await?;
    Ok(calendar
        .buckets(&logs, &milestones, mode)
        .iter()
        .map(ReportingBucket::summary)
        .collect())
}

/// Build the report document for one bucket.
pub async fn report_document<S>(
    store: &S,
    student_id: Uuid,
    mode: WindowMode,
    bucket_id: &str,
    ctx: &ReportContext,
) -> Result<(Student, ReportDocument), ApiError>
where
    S: StudentDirectory + RecordStore + Sync,
{
    let student = load_student(store, student_id).await?;
    let logs = store.session_logs(student_id).await?;
    let milestones = store.milestones(student_id).await?;
    let bucket = ctx.calendar.bucket(&logs, &milestones, mode, bucket_id)?;

    let header = ReportHeader {
        organization: ctx.organization.clone(),
        student_name: student.name.clone(),
        student_class: student.class_name.clone(),
        period_label: String::new(),
        generated_at: ctx.generated_at,
    };
    let document = ReportDocument::from_bucket(header, &bucket, &ctx.calendar);
    Ok((student, document))
}

/// The report document together with its rendered screen text.
pub async fn report_view<S>(
    store: &S,
    student_id: Uuid,
    mode: WindowMode,
    bucket_id: &str,
    ctx: &ReportContext,
) -> Result<ReportView, ApiError>
where
    S: StudentDirectory + RecordStore + Sync,
{
    let (_, document) = report_document(store, student_id, mode, bucket_id, ctx).await?;
    let screen = render_screen(&document)?;
    Ok(ReportView { document, screen })
}

/// Export one bucket's report as a file.
pub async fn export_bucket<S, A, K, N>(
    store: &S,
    notifier: &N,
    student_id: Uuid,
    request: &ExportRequest,
    ctx: &ReportContext,
    target: ExportTarget<'_, A, K>,
) -> Result<ExportOutcome, ApiError>
where
    S: StudentDirectory + RecordStore + Sync,
    A: AssetSource + Sync,
    K: ExportSink + Sync,
    N: Notifier + ?Sized,
{
    let (student, document) =
        report_document(store, student_id, request.mode, &request.bucket, ctx).await?;
    let filename = export_filename(&student.name, &request.bucket, request.format);

    match export_report(
        &document,
        request.format,
        &filename,
        target.styles,
        target.assets,
        target.sink,
    )
    .await
    {
        Ok(outcome) => {
            notifier.notify(Notice::Saved(format!(
                "{} saved ({} pages)",
                outcome.filename, outcome.pages
            )));
            Ok(outcome)
        }
        Err(e) => {
            warn!(student_id = %student.id, error = %e, "export failed");
            notifier.notify(Notice::Failed(format!("{filename} could not be saved")));
            Err(e.into())
        }
    }
}
