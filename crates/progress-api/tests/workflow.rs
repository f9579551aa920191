use std::path::PathBuf;
use std::sync::Mutex;

use jiff::Timestamp;
use uuid::Uuid;

use progress_api::error::ApiError;
use progress_api::notify::{Notice, Notifier};
use progress_api::workflow::{
    self, ChecklistSubmission, ExportRequest, ExportTarget, ReportContext,
};
use progress_checklists::age::AgeFit;
use progress_checklists::require_template;
use progress_checklists::scoring::CheckedItems;
use progress_core::models::session::{PromptLevel, SessionLog, TaskStep};
use progress_core::models::student::{StaffMember, Student};
use progress_export::assets::NoAssets;
use progress_export::error::ExportError;
use progress_export::export::ExportFormat;
use progress_export::sink::{DirectorySink, ExportSink, SavedExport};
use progress_export::styles::DocumentStyles;
use progress_report::window::{ReportingCalendar, WindowMode};
use progress_storage::{MemoryStore, RecordStore};

#[derive(Default)]
struct RecordingNotifier(Mutex<Vec<Notice>>);

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.0.lock().unwrap().push(notice);
    }
}

impl RecordingNotifier {
    fn notices(&self) -> Vec<Notice> {
        self.0.lock().unwrap().clone()
    }
}

struct ReadOnlySink;

impl ExportSink for ReadOnlySink {
    async fn save(&self, filename: &str, _: &str, _: Vec<u8>) -> Result<SavedExport, ExportError> {
        Err(ExportError::Write {
            path: PathBuf::from(filename),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
        })
    }
}

struct Fixture {
    store: MemoryStore,
    student: Student,
    staff: StaffMember,
}

async fn fixture() -> Fixture {
    let store = MemoryStore::new();
    let student = Student {
        id: Uuid::new_v4(),
        name: "Ada Lovelace".to_string(),
        class_name: Some("Room 3".to_string()),
        date_of_birth: Some("2025-02-10".parse().unwrap()),
    };
    let staff = StaffMember {
        id: Uuid::new_v4(),
        name: "Grace Hopper".to_string(),
    };
    store.put_student(student.clone()).await;
    store.put_staff_member(staff.clone()).await;
    Fixture {
        store,
        student,
        staff,
    }
}

fn calendar() -> ReportingCalendar {
    // Friday
    ReportingCalendar::new("2026-10-16".parse().unwrap())
}

fn context() -> ReportContext {
    ReportContext {
        organization: "Little Oaks".to_string(),
        calendar: calendar(),
        generated_at: ts("2026-10-16T15:00:00Z"),
    }
}

fn ts(s: &str) -> Timestamp {
    s.parse().unwrap()
}

fn session(student_id: Uuid, at: &str) -> SessionLog {
    SessionLog {
        id: Uuid::new_v4(),
        student_id,
        staff_id: Uuid::new_v4(),
        date: ts(at),
        target_behavior: "Washing hands".to_string(),
        method: "Forward chaining".to_string(),
        steps: vec![TaskStep {
            id: "s1".to_string(),
            description: "Turn on tap".to_string(),
            trials: vec![PromptLevel::Gestural, PromptLevel::Independent],
        }],
        independence_score: 50,
    }
}

fn submission(f: &Fixture, template_id: &str, checked: CheckedItems) -> ChecklistSubmission {
    ChecklistSubmission {
        template_id: template_id.to_string(),
        staff_id: f.staff.id,
        checked_ids: checked,
    }
}

#[tokio::test]
async fn twenty_month_old_gets_one_recommended_template() {
    let f = fixture().await;
    let recs = workflow::recommendations(&f.store, f.student.id, &calendar())
        .await
        .unwrap();

    let recommended: Vec<&str> = recs
        .iter()
        .filter(|r| r.fit == AgeFit::Recommended)
        .map(|r| r.template_id.as_str())
        .collect();
    assert_eq!(recommended, vec!["months_19_24"]);
    assert!(recs.iter().any(|r| r.fit == AgeFit::OverAge));
    assert!(recs.iter().any(|r| r.fit == AgeFit::Upcoming));
}

#[tokio::test]
async fn unknown_student_is_not_found() {
    let f = fixture().await;
    let err = workflow::recommendations(&f.store, Uuid::new_v4(), &calendar())
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::NotFound(_)));
}

#[tokio::test]
async fn all_checked_round_trips_through_the_store_at_100() {
    let f = fixture().await;
    let notifier = RecordingNotifier::default();
    let template = require_template("months_19_24").unwrap();

    let record = workflow::submit_checklist(
        &f.store,
        &notifier,
        f.student.id,
        submission(&f, "months_19_24", CheckedItems::all_items(template)),
        ts("2026-10-16T10:00:00Z"),
    )
    .await
    .unwrap();

    let stored = f.store.milestones(f.student.id).await.unwrap();
    assert_eq!(stored, vec![record]);
    assert_eq!(stored[0].overall_percentage, 100);
    assert_eq!(stored[0].staff_id, f.staff.id);
    assert!(stored[0].section_items().all(|i| i.checked));
    assert!(stored[0].red_flags.iter().all(|i| !i.checked));
    assert!(matches!(notifier.notices().as_slice(), [Notice::Saved(_)]));
}

#[tokio::test]
async fn unknown_item_ids_are_rejected_before_saving() {
    let f = fixture().await;
    let notifier = RecordingNotifier::default();

    let err = workflow::submit_checklist(
        &f.store,
        &notifier,
        f.student.id,
        submission(&f, "months_19_24", ["0-0", "99-0"].into_iter().collect()),
        ts("2026-10-16T10:00:00Z"),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, ApiError::BadRequest(_)));
    assert!(f.store.milestones(f.student.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn unknown_template_and_staff_are_bad_requests() {
    let f = fixture().await;
    let notifier = RecordingNotifier::default();

    let err = workflow::submit_checklist(
        &f.store,
        &notifier,
        f.student.id,
        submission(&f, "months_99", CheckedItems::new()),
        Timestamp::now(),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ApiError::BadRequest(_)));

    let mut stranger = submission(&f, "months_19_24", CheckedItems::new());
    stranger.staff_id = Uuid::new_v4();
    let err = workflow::submit_checklist(&f.store, &notifier, f.student.id, stranger, Timestamp::now())
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::BadRequest(_)));
}

#[tokio::test]
async fn history_is_newest_first() {
    let f = fixture().await;
    let notifier = RecordingNotifier::default();
    for at in ["2026-03-01T09:00:00Z", "2026-10-01T09:00:00Z", "2026-06-01T09:00:00Z"] {
        workflow::submit_checklist(
            &f.store,
            &notifier,
            f.student.id,
            submission(&f, "months_19_24", CheckedItems::new()),
            ts(at),
        )
        .await
        .unwrap();
    }

    let history = workflow::milestone_history(&f.store, f.student.id)
        .await
        .unwrap();
    let stamps: Vec<String> = history.iter().map(|r| r.timestamp.to_string()).collect();
    assert_eq!(
        stamps,
        vec![
            "2026-10-01T09:00:00Z",
            "2026-06-01T09:00:00Z",
            "2026-03-01T09:00:00Z"
        ]
    );
}

#[tokio::test]
async fn monthly_buckets_disable_empty_months() {
    let f = fixture().await;
    f.store
        .put_session_log(session(f.student.id, "2026-10-14T09:00:00Z"))
        .await;
    f.store
        .put_session_log(session(f.student.id, "2026-03-02T09:00:00Z"))
        .await;

    let buckets =
        workflow::bucket_summaries(&f.store, f.student.id, WindowMode::Monthly, &calendar())
            .await
            .unwrap();

    assert_eq!(buckets.len(), 12);
    let enabled: Vec<&str> = buckets
        .iter()
        .filter(|b| !b.disabled)
        .map(|b| b.id.as_str())
        .collect();
    assert_eq!(enabled, vec!["2026-03", "2026-10"]);
    assert_eq!(buckets[9].log_count, 1);
}

#[tokio::test]
async fn report_view_renders_the_selected_day() {
    let f = fixture().await;
    f.store
        .put_session_log(session(f.student.id, "2026-10-14T09:00:00Z"))
        .await;

    let view = workflow::report_view(
        &f.store,
        f.student.id,
        WindowMode::Weekly,
        "2026-10-14",
        &context(),
    )
    .await
    .unwrap();

    assert_eq!(view.document.header.period_label, "Wednesday, October 14");
    assert_eq!(view.document.header.organization, "Little Oaks");
    assert_eq!(view.document.learning_tasks.len(), 1);
    assert!(view.screen.contains("Ada Lovelace"));
    assert!(view.screen.contains("Washing hands"));

    let err = workflow::report_view(
        &f.store,
        f.student.id,
        WindowMode::Weekly,
        "2026-10-17",
        &context(),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ApiError::NotFound(_)));
}

#[tokio::test]
async fn export_writes_a_file_and_notifies() {
    let f = fixture().await;
    let dir = tempfile::tempdir().unwrap();
    let notifier = RecordingNotifier::default();
    f.store
        .put_session_log(session(f.student.id, "2026-10-14T09:00:00Z"))
        .await;

    let request = ExportRequest {
        mode: WindowMode::Monthly,
        bucket: "2026-10".to_string(),
        format: ExportFormat::Docx,
    };
    let outcome = workflow::export_bucket(
        &f.store,
        &notifier,
        f.student.id,
        &request,
        &context(),
        ExportTarget {
            styles: &DocumentStyles::default(),
            assets: &NoAssets,
            sink: &DirectorySink::new(dir.path()),
        },
    )
    .await
    .unwrap();

    assert_eq!(outcome.filename, "progress-ada-lovelace-2026-10.docx");
    assert_eq!(outcome.pages, 1);
    assert!(dir.path().join(&outcome.filename).exists());
    assert!(matches!(notifier.notices().as_slice(), [Notice::Saved(_)]));
}

#[tokio::test]
async fn export_write_failure_is_reported() {
    let f = fixture().await;
    let notifier = RecordingNotifier::default();

    let request = ExportRequest {
        mode: WindowMode::Yearly,
        bucket: "2026".to_string(),
        format: ExportFormat::Pdf,
    };
    let err = workflow::export_bucket(
        &f.store,
        &notifier,
        f.student.id,
        &request,
        &context(),
        ExportTarget {
            styles: &DocumentStyles::default(),
            assets: &NoAssets,
            sink: &ReadOnlySink,
        },
    )
    .await
    .unwrap_err();

    assert!(matches!(err, ApiError::Internal(_)));
    assert!(matches!(notifier.notices().as_slice(), [Notice::Failed(_)]));
}
