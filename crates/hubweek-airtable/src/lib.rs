//! Airtable data-retrieval layer for Hubweek.
//!
//! One authenticated client per base; record fetches transparently follow
//! cursor pagination and the schema endpoint exposes table metadata for
//! diagnostics. A failed call yields no partial results; the caller decides
//! whether to fall back to the local mock dataset.

pub mod client;
pub mod error;

pub use client::{
    AirtableClient, RecordPage, TableInfo, DEFAULT_API_ROOT, DEFAULT_PAGE_SIZE,
    DEFAULT_PROJECTS_TABLE, DESIGNERS_TABLE,
};
pub use error::{AirtableError, Result};
