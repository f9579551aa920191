//! Storage key conventions.
//!
//! Pure string functions with no I/O. These define the canonical layout of
//! objects under a store root. Every key is a relative, `/`-separated path.

use uuid::Uuid;

pub const STUDENTS_PREFIX: &str = "students/";

pub const STAFF_PREFIX: &str = "staff/";

pub fn student(id: Uuid) -> String {
    format!("{STUDENTS_PREFIX}{id}.json")
}

pub fn staff(id: Uuid) -> String {
    format!("{STAFF_PREFIX}{id}.json")
}

pub fn session_logs_prefix(student_id: Uuid) -> String {
    format!("sessions/{student_id}/")
}

pub fn session_log(student_id: Uuid, id: Uuid) -> String {
    format!("sessions/{student_id}/{id}.json")
}

pub fn milestones_prefix(student_id: Uuid) -> String {
    format!("milestones/{student_id}/")
}

pub fn milestone(student_id: Uuid, id: Uuid) -> String {
    format!("milestones/{student_id}/{id}.json")
}
