//! progress-storage
//!
//! Student and staff directories and the milestone record store, backed by
//! JSON files on disk or held in memory.

pub mod error;
pub mod json;
pub mod memory;
pub mod objects;
pub mod state;
pub mod store;

pub use json::JsonStore;
pub use memory::MemoryStore;
pub use store::{RecordStore, StaffDirectory, StudentDirectory};
