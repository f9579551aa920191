use std::path::{Path, PathBuf};

use tracing::{debug, info};
use uuid::Uuid;

use progress_core::keys;
use progress_core::models::milestone::MilestoneRecord;
use progress_core::models::session::SessionLog;
use progress_core::models::student::{StaffMember, Student};

use crate::error::StorageError;
use crate::state;
use crate::store::{RecordStore, StaffDirectory, StudentDirectory};

/// One JSON file per object under a data root.
///
/// Layout follows [`progress_core::keys`]. Logs and milestones are returned
/// oldest first, ties broken by id.
#[derive(Debug, Clone)]
pub struct JsonStore {
    root: PathBuf,
}

impl JsonStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub async fn put_student(&self, student: &Student) -> Result<(), StorageError> {
        state::save_state(&self.root, &keys::student(student.id), student).await
    }

    pub async fn put_staff_member(&self, staff: &StaffMember) -> Result<(), StorageError> {
        state::save_state(&self.root, &keys::staff(staff.id), staff).await
    }

    pub async fn put_session_log(&self, log: &SessionLog) -> Result<(), StorageError> {
        state::save_state(&self.root, &keys::session_log(log.student_id, log.id), log).await
    }
}

impl StudentDirectory for JsonStore {
    async fn student(&self, id: Uuid) -> Result<Option<Student>, StorageError> {
        state::load_optional(&self.root, &keys::student(id)).await
    }
}

impl StaffDirectory for JsonStore {
    async fn staff_member(&self, id: Uuid) -> Result<Option<StaffMember>, StorageError> {
        state::load_optional(&self.root, &keys::staff(id)).await
    }
}

impl RecordStore for JsonStore {
    async fn session_logs(&self, student_id: Uuid) -> Result<Vec<SessionLog>, StorageError> {
        let mut logs: Vec<SessionLog> =
            state::load_all(&self.root, &keys::session_logs_prefix(student_id)).await?;
        logs.sort_by(|a, b| a.date.cmp(&b.date).then(a.id.cmp(&b.id)));
        debug!(student_id = %student_id, count = logs.len(), "loaded session logs");
        Ok(logs)
    }

    async fn milestones(&self, student_id: Uuid) -> Result<Vec<MilestoneRecord>, StorageError> {
        let mut records: Vec<MilestoneRecord> =
            state::load_all(&self.root, &keys::milestones_prefix(student_id)).await?;
        records.sort_by(|a, b| a.timestamp.cmp(&b.timestamp).then(a.id.cmp(&b.id)));
        debug!(student_id = %student_id, count = records.len(), "loaded milestones");
        Ok(records)
    }

    async fn append_milestone(&self, record: &MilestoneRecord) -> Result<(), StorageError> {
        let key = keys::milestone(record.student_id, record.id);
        state::save_state_if_absent(&self.root, &key, record).await?;
        info!(
            student_id = %record.student_id,
            record_id = %record.id,
            template_id = %record.template_id,
            "milestone appended"
        );
        Ok(())
    }
}
