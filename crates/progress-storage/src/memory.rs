use std::collections::HashMap;

use tokio::sync::Mutex;
use uuid::Uuid;

use progress_core::models::milestone::MilestoneRecord;
use progress_core::models::session::SessionLog;
use progress_core::models::student::{StaffMember, Student};

use crate::error::StorageError;
use crate::store::{RecordStore, StaffDirectory, StudentDirectory};

#[derive(Debug, Default)]
struct Inner {
    students: HashMap<Uuid, Student>,
    staff: HashMap<Uuid, StaffMember>,
    logs: HashMap<Uuid, Vec<SessionLog>>,
    milestones: HashMap<Uuid, Vec<MilestoneRecord>>,
}

/// An in-process store. Records come back in insertion order.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn put_student(&self, student: Student) {
        self.inner.lock().await.students.insert(student.id, student);
    }

    pub async fn put_staff_member(&self, staff: StaffMember) {
        self.inner.lock().await.staff.insert(staff.id, staff);
    }

    pub async fn put_session_log(&self, log: SessionLog) {
        self.inner
            .lock()
            .await
            .logs
            .entry(log.student_id)
            .or_default()
            .push(log);
    }
}

impl StudentDirectory for MemoryStore {
    async fn student(&self, id: Uuid) -> Result<Option<Student>, StorageError> {
        Ok(self.inner.lock().await.students.get(&id).cloned())
    }
}

impl StaffDirectory for MemoryStore {
    async fn staff_member(&self, id: Uuid) -> Result<Option<StaffMember>, StorageError> {
        Ok(self.inner.lock().await.staff.get(&id).cloned())
    }
}

impl RecordStore for MemoryStore {
    async fn session_logs(&self, student_id: Uuid) -> Result<Vec<SessionLog>, StorageError> {
        Ok(self
            .inner
            .lock()
            .await
            .logs
            .get(&student_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn milestones(&self, student_id: Uuid) -> Result<Vec<MilestoneRecord>, StorageError> {
        Ok(self
            .inner
            .lock()
            .await
            .milestones
            .get(&student_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn append_milestone(&self, record: &MilestoneRecord) -> Result<(), StorageError> {
        let mut inner = self.inner.lock().await;
        let records = inner.milestones.entry(record.student_id).or_default();
        if records.iter().any(|r| r.id == record.id) {
            return Err(StorageError::AlreadyExists {
                key: progress_core::keys::milestone(record.student_id, record.id),
            });
        }
        records.push(record.clone());
        Ok(())
    }
}
