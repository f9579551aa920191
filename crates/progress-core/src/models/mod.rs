pub mod milestone;
pub mod session;
pub mod student;
pub mod template;
