//! progress-export
//!
//! Paginated PDF + DOCX generation for report documents.

pub mod assets;
pub mod docx;
pub mod error;
pub mod export;
pub mod layout;
pub mod pdf;
pub mod sink;
pub mod styles;
pub mod text;
