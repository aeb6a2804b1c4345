//! Community export.
//!
//! Collects the account's joined communities into a portable document.
//! Writing the document to disk lives in the persistence crate.

pub mod exporter;
pub mod models;

pub use exporter::CommunityExporter;
pub use models::ExportDocument;
