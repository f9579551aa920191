//! Collaborator interfaces the engine is wired against.

use std::future::Future;

use uuid::Uuid;

use progress_core::models::milestone::MilestoneRecord;
use progress_core::models::session::SessionLog;
use progress_core::models::student::{StaffMember, Student};

use crate::error::StorageError;

/// Student lookup.
pub trait StudentDirectory {
    fn student(
        &self,
        id: Uuid,
    ) -> impl Future<Output = Result<Option<Student>, StorageError>> + Send;
}

/// Lookup of the staff member acting on a student.
pub trait StaffDirectory {
    fn staff_member(
        &self,
        id: Uuid,
    ) -> impl Future<Output = Result<Option<StaffMember>, StorageError>> + Send;
}

/// A student's session logs and milestone records.
///
/// Milestones are append-only: writing a record whose id is already stored
/// fails with [`StorageError::AlreadyExists`] and leaves the stored record
/// untouched.
pub trait RecordStore {
    fn session_logs(
        &self,
        student_id: Uuid,
    ) -> impl Future<Output = Result<Vec<SessionLog>, StorageError>> + Send;

    fn milestones(
        &self,
        student_id: Uuid,
    ) -> impl Future<Output = Result<Vec<MilestoneRecord>, StorageError>> + Send;

    fn append_milestone(
        &self,
        record: &MilestoneRecord,
    ) -> impl Future<Output = Result<(), StorageError>> + Send;
}
