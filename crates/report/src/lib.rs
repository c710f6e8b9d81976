//! # OptiCalc Path Reports
//!
//! This crate turns a measurement ledger into a portable summary document
//! and serializes it for consumers outside the process.
//!
//! ## Architectural Principles
//!
//! - **Frozen Snapshots:** A `PathReport` copies the ledger's rows and
//!   totals at generation time. Reports never observe later mutations.
//! - **Format Behind a Trait:** `ReportExporter` separates what a report
//!   contains from how it is encoded, so new output formats are additive.
//!
//! ## Public API
//!
//! - `PathReport`: The frozen summary of a measured path.
//! - `ReportExporter` / `JsonExporter`: The serialization seam and its JSON
//!   implementation.
//! - `ExportError`: The specific error types that can be returned from this
//!   crate.

// Declare the modules that constitute this crate.
pub mod error;
pub mod export;
pub mod path_report;

// Re-export the key components to provide a clean, public-facing API.
pub use error::ExportError;
pub use export::{JsonExporter, ReportExporter};
pub use path_report::PathReport;
