//! progress-report
//!
//! Groups a student's session logs and milestone records into reporting
//! windows and assembles a window into a report document. Everything here is
//! a pure computation over in-memory snapshots; nothing is cached.

pub mod document;
pub mod error;
pub mod screen;
pub mod window;
