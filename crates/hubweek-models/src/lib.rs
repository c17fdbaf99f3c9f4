//! Data model for the weekly hub staffing digest.
//!
//! The remote base returns free-form records (`{id, fields}`). This crate
//! turns them into typed views without ever failing on missing or unknown
//! fields: each view looks attributes up through an ordered list of field
//! aliases and falls back to a defined default.

pub mod assignment;
pub mod designer;
pub mod fields;
pub mod project;
pub mod record;

pub use assignment::Assignment;
pub use designer::Designer;
pub use project::Project;
pub use record::Record;
